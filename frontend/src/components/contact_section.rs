use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::reveal::{Reveal, RevealFrom};
use crate::config;

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    /// Service to preselect in the form.
    #[prop_or_default]
    pub service: Option<AttrValue>,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    html! {
        <section id="contact" class="section contact-section">
            <div class="container">
                <div class="section-header">
                    <Reveal><span class="eyebrow">{"Get In Touch"}</span></Reveal>
                    <Reveal delay_ms={100}>
                        <h2 class="section-title">{"Let's Work "}<span class="text-gradient">{"Together"}</span></h2>
                    </Reveal>
                    <Reveal delay_ms={200}>
                        <p class="section-subtitle">{"Tell me about your project and I'll get back to you within 24 hours."}</p>
                    </Reveal>
                </div>
                <div class="contact-grid">
                    <Reveal from={RevealFrom::Left}>
                        <div class="contact-info">
                            <div class="contact-item glass-card">
                                <span class="contact-icon">{"✉"}</span>
                                <div>
                                    <h4>{"Email"}</h4>
                                    <a href={config::mailto("Project inquiry")}>{config::CONTACT_EMAIL}</a>
                                </div>
                            </div>
                            <div class="contact-item glass-card">
                                <span class="contact-icon">{"☏"}</span>
                                <div>
                                    <h4>{"WhatsApp"}</h4>
                                    <a href={config::WHATSAPP_URL} target="_blank" rel="noopener noreferrer">
                                        {config::WHATSAPP_DISPLAY}
                                    </a>
                                </div>
                            </div>
                            <div class="contact-item glass-card">
                                <span class="contact-icon">{"⌖"}</span>
                                <div>
                                    <h4>{"Location"}</h4>
                                    <span>{config::LOCATION}</span>
                                </div>
                            </div>
                        </div>
                    </Reveal>
                    <Reveal from={RevealFrom::Right}>
                        <ContactForm service={props.service.clone()} />
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
