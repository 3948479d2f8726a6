use gloo_timers::callback::Interval;
use log::error;
use wasm_bindgen::JsCast;
use web_sys::Node;
use yew::prelude::*;

use crate::carousel::{Carousel, CarouselAction};
use crate::components::modal::Modal;
use crate::components::reveal::Reveal;
use crate::config;
use crate::content::{Testimonial, TESTIMONIALS};

fn stars(rating: u8) -> Html {
    html! {
        <div class="stars" aria-label={format!("{} out of 5 stars", rating)}>
            { for (0..rating).map(|_| html! { <span class="star">{"★"}</span> }) }
        </div>
    }
}

fn on_event<E: 'static>(
    carousel: &UseReducerHandle<Carousel<Testimonial>>,
    action: fn() -> CarouselAction,
) -> Callback<E> {
    let carousel = carousel.clone();
    Callback::from(move |_: E| carousel.dispatch(action()))
}

#[function_component(TestimonialsSection)]
pub fn testimonials_section() -> Html {
    let slider = match Carousel::new(TESTIMONIALS.to_vec(), config::TESTIMONIAL_INTERVAL_MS) {
        Ok(seed) => html! { <TestimonialSlider {seed} /> },
        Err(err) => {
            error!("Not rendering testimonials: {}", err);
            html! {}
        }
    };

    html! {
        <section id="reviews" class="section testimonials-section">
            <div class="container">
                <div class="section-header">
                    <Reveal><span class="eyebrow">{"Client Testimonials"}</span></Reveal>
                    <Reveal delay_ms={100}>
                        <h2 class="section-title">{"What Clients "}<span class="text-gradient">{"Say"}</span></h2>
                    </Reveal>
                    <Reveal delay_ms={200}>
                        <p class="section-subtitle">
                            {"Don't just take my word for it. Here's what clients have to say about their experience."}
                        </p>
                    </Reveal>
                </div>
                {slider}
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct TestimonialSliderProps {
    seed: Carousel<Testimonial>,
}

/// Rotates through testimonials. Hovering or focusing the slider pauses the
/// rotation until both the pointer and focus have left; any manual step
/// restarts the countdown.
#[function_component(TestimonialSlider)]
fn testimonial_slider(props: &TestimonialSliderProps) -> Html {
    let carousel = {
        let seed = props.seed.clone();
        use_reducer(move || seed)
    };
    let selected = use_state(|| None::<Testimonial>);

    {
        let dispatcher = carousel.dispatcher();
        let interval_ms = carousel.interval_ms();
        use_effect_with_deps(
            move |(paused, _epoch): &(bool, u64)| {
                let ticker = (!*paused).then(|| {
                    let millis = u32::try_from(interval_ms).unwrap_or(u32::MAX);
                    Interval::new(millis, move || {
                        dispatcher.dispatch(CarouselAction::Elapsed(interval_ms));
                    })
                });
                // Dropping the Interval cancels it.
                move || drop(ticker)
            },
            (carousel.is_paused(), carousel.timer_epoch()),
        );
    }

    let slider = use_node_ref();
    let onmouseenter: Callback<MouseEvent> = on_event(&carousel, || CarouselAction::Hover(true));
    let onmouseleave: Callback<MouseEvent> = on_event(&carousel, || CarouselAction::Hover(false));
    let onfocusin: Callback<FocusEvent> = on_event(&carousel, || CarouselAction::Focus(true));
    let onfocusout = {
        let carousel = carousel.clone();
        let slider = slider.clone();
        Callback::from(move |e: FocusEvent| {
            // Focus moving between the slider's own controls is not a blur.
            let still_inside = match (slider.cast::<Node>(), e.related_target()) {
                (Some(root), Some(target)) => target
                    .dyn_into::<Node>()
                    .map(|node| root.contains(Some(&node)))
                    .unwrap_or(false),
                _ => false,
            };
            carousel.dispatch(CarouselAction::Focus(still_inside));
        })
    };
    let on_prev: Callback<MouseEvent> = on_event(&carousel, || CarouselAction::Prev);
    let on_next: Callback<MouseEvent> = on_event(&carousel, || CarouselAction::Next);

    let current = carousel.current().clone();
    let open_current = {
        let selected = selected.clone();
        let current = current.clone();
        Callback::from(move |_: MouseEvent| selected.set(Some(current.clone())))
    };
    let close_modal = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    let dots = (0..carousel.len()).map(|index| {
        let onclick = {
            let carousel = carousel.clone();
            Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::JumpTo(index)))
        };
        let active = index == carousel.current_index();
        html! {
            <button
                class={classes!("carousel-dot", active.then_some("active"))}
                aria-label={format!("Show testimonial {}", index + 1)}
                aria-current={active.then_some("true")}
                {onclick}
            />
        }
    });

    html! {
        <div ref={slider} class="testimonial-slider" {onmouseenter} {onmouseleave} {onfocusin} {onfocusout}>
            <div
                key={carousel.current_index()}
                class="testimonial-card glass-card slide-in"
                onclick={open_current}
            >
                <div class="quote-mark">{"“"}</div>
                <p class="testimonial-quote">{format!("\"{}\"", current.short_quote)}</p>
                <div class="testimonial-footer">
                    <div class="testimonial-author">
                        <div class="avatar">{current.avatar.to_string()}</div>
                        <div>
                            <div class="author-name">{current.name}</div>
                            <div class="author-role">{format!("{}, {}", current.role, current.company)}</div>
                        </div>
                    </div>
                    {stars(current.rating)}
                </div>
                <div class="click-hint">{"Click to read full review →"}</div>
            </div>

            <div class="carousel-nav">
                <button class="carousel-arrow" aria-label="Previous testimonial" onclick={on_prev}>{"‹"}</button>
                <div class="carousel-dots">{ for dots }</div>
                <button class="carousel-arrow" aria-label="Next testimonial" onclick={on_next}>{"›"}</button>
            </div>

            if let Some(testimonial) = (*selected).clone() {
                <Modal on_close={close_modal}>
                    <div class="testimonial-detail">
                        <div class="testimonial-author">
                            <div class="avatar avatar-large">{testimonial.avatar.to_string()}</div>
                            <div>
                                <div class="author-name">{testimonial.name}</div>
                                <div class="author-role">{format!("{}, {}", testimonial.role, testimonial.company)}</div>
                                {stars(testimonial.rating)}
                            </div>
                        </div>
                        <div class="project-type">
                            <div class="label">{"Project Type"}</div>
                            <span class="pill">{testimonial.project}</span>
                        </div>
                        <p class="testimonial-full">{format!("\"{}\"", testimonial.full_quote)}</p>
                    </div>
                </Modal>
            }
        </div>
    }
}
