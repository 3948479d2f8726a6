use yew::prelude::*;

use crate::components::modal::Modal;
use crate::components::reveal::Reveal;
use crate::content::company::{Highlight, WHY_CHOOSE_ME};

#[function_component(WhyChooseMe)]
pub fn why_choose_me() -> Html {
    let selected = use_state(|| None::<&'static Highlight>);

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    html! {
        <section id="why-choose-me" class="section why-section">
            <div class="container">
                <div class="section-header">
                    <Reveal><span class="eyebrow">{"Why Choose Me"}</span></Reveal>
                    <Reveal delay_ms={100}>
                        <h2 class="section-title">{"The "}<span class="text-gradient">{"WriteElite"}</span>{" Difference"}</h2>
                    </Reveal>
                </div>
                <div class="why-grid">
                    { for WHY_CHOOSE_ME.iter().enumerate().map(|(index, highlight)| {
                        let onclick = {
                            let selected = selected.clone();
                            Callback::from(move |_: MouseEvent| selected.set(Some(highlight)))
                        };
                        html! {
                            <Reveal delay_ms={(index as u32 % 4) * 100}>
                                <div class="why-card glass-card hover-lift" {onclick}>
                                    <span class="why-number">{format!("{:02}", index + 1)}</span>
                                    <h3>{highlight.title}</h3>
                                    <p>{highlight.summary}</p>
                                </div>
                            </Reveal>
                        }
                    }) }
                </div>
            </div>
            if let Some(highlight) = *selected {
                <Modal {on_close}>
                    <div class="highlight-modal">
                        <h3>{highlight.title}</h3>
                        <p>{highlight.description}</p>
                        <ul class="check-list">
                            { for highlight.benefits.iter().map(|benefit| html! { <li>{*benefit}</li> }) }
                        </ul>
                    </div>
                </Modal>
            }
        </section>
    }
}
