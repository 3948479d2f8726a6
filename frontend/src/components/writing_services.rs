use yew::prelude::*;

use crate::components::hire_button::HireButton;
use crate::components::modal::Modal;
use crate::components::reveal::Reveal;
use crate::content::{WritingService, WRITING_SERVICES};

#[function_component(WritingServicesSection)]
pub fn writing_services_section() -> Html {
    let selected = use_state(|| None::<&'static WritingService>);

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    html! {
        <section id="services" class="section services-section">
            <div class="container">
                <div class="section-header">
                    <Reveal><span class="eyebrow">{"What I Offer"}</span></Reveal>
                    <Reveal delay_ms={100}>
                        <h2 class="section-title">{"Professional "}<span class="text-gradient">{"Writing Services"}</span></h2>
                    </Reveal>
                    <Reveal delay_ms={200}>
                        <p class="section-subtitle">
                            {"From compelling content to career-defining documents, every word is crafted with purpose."}
                        </p>
                    </Reveal>
                </div>
                <div class="services-grid">
                    { for WRITING_SERVICES.iter().enumerate().map(|(index, service)| {
                        let onclick = {
                            let selected = selected.clone();
                            Callback::from(move |_: MouseEvent| selected.set(Some(service)))
                        };
                        html! {
                            <Reveal delay_ms={(index as u32 % 4) * 100}>
                                <div class="service-card glass-card hover-lift" {onclick}>
                                    <h3>{service.title}</h3>
                                    <p>{service.summary}</p>
                                    <div class="service-card-footer">
                                        <span class="starting-price">{format!("From {}", service.starting_price)}</span>
                                        <span class="learn-more">{"Learn more →"}</span>
                                    </div>
                                </div>
                            </Reveal>
                        }
                    }) }
                </div>
            </div>
            if let Some(service) = *selected {
                <Modal {on_close}>
                    <div class="service-detail-modal">
                        <h3>{service.title}</h3>
                        <p>{service.description}</p>
                        <h4>{"What's Included"}</h4>
                        <ul class="check-list">
                            { for service.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                        </ul>
                        <h4>{"How It Works"}</h4>
                        <ol class="process-list">
                            { for service.process.iter().map(|step| html! { <li>{*step}</li> }) }
                        </ol>
                        <div class="modal-meta">
                            <span>{format!("Delivery: {}", service.delivery_time)}</span>
                            <span>{format!("Starting at {}", service.starting_price)}</span>
                        </div>
                        <div class="modal-actions">
                            <HireButton service={service.contact_option} class="btn-primary">
                                {"Get Started"}
                            </HireButton>
                        </div>
                    </div>
                </Modal>
            }
        </section>
    }
}
