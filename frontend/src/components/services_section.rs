use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::hire_button::HireButton;
use crate::components::lazy_image::LazyImage;
use crate::components::modal::Modal;
use crate::components::reveal::Reveal;
use crate::content::{Service, SERVICES};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: &'static Service,
    pub on_select: Callback<&'static Service>,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let service = props.service;
    let onclick = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(service))
    };

    html! {
        <div class="service-card glass-card hover-lift" {onclick}>
            <LazyImage
                src={service.illustration}
                alt={format!("{} illustration", service.title)}
                container_class="service-card-image"
            />
            <h3>{service.title}</h3>
            <p>{service.summary}</p>
            <div class="service-card-footer">
                if let Some(price) = service.starting_price {
                    <span class="starting-price">{format!("From {}", price)}</span>
                }
                <span class="learn-more">{"Learn more →"}</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceDetailModalProps {
    pub service: &'static Service,
    pub on_close: Callback<()>,
}

#[function_component(ServiceDetailModal)]
pub fn service_detail_modal(props: &ServiceDetailModalProps) -> Html {
    let service = props.service;
    html! {
        <Modal on_close={props.on_close.clone()}>
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
                    if let Some(price) = service.starting_price {
                        <span>{format!("Starting at {}", price)}</span>
                    }
                </div>
                <div class="modal-actions">
                    <Link<Route> to={Route::ServiceDetail { slug: service.slug.to_string() }} classes="btn-outline">
                        {"Full details"}
                    </Link<Route>>
                    <HireButton service={service.contact_option()} class="btn-primary">
                        {"Get Started"}
                    </HireButton>
                </div>
            </div>
        </Modal>
    }
}

#[function_component(ServicesSection)]
pub fn services_section() -> Html {
    let selected = use_state(|| None::<&'static Service>);

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |service: &'static Service| selected.set(Some(service)))
    };
    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    html! {
        <section id="catalog" class="section services-section">
            <div class="container">
                <div class="section-header">
                    <Reveal><span class="eyebrow">{"Full Catalog"}</span></Reveal>
                    <Reveal delay_ms={100}>
                        <h2 class="section-title">{"Every "}<span class="text-gradient">{"Service"}</span></h2>
                    </Reveal>
                    <Reveal delay_ms={200}>
                        <p class="section-subtitle">
                            {"Writing, web and marketing work, each with its own page of details."}
                        </p>
                    </Reveal>
                </div>
                <div class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                        <Reveal delay_ms={(index as u32 % 4) * 100}>
                            <ServiceCard {service} on_select={on_select.clone()} />
                        </Reveal>
                    }) }
                </div>
            </div>
            if let Some(service) = *selected {
                <ServiceDetailModal {service} {on_close} />
            }
        </section>
    }
}
