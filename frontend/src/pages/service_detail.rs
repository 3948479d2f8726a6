use log::warn;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::hire_button::HireButton;
use crate::components::lazy_image::LazyImage;
use crate::components::reveal::{Reveal, RevealFrom};
use crate::content::{find_service, Service, SERVICES};
use crate::pages::page_header::PageHeader;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ServiceDetailProps {
    pub slug: AttrValue,
}

#[function_component(ServiceDetail)]
pub fn service_detail(props: &ServiceDetailProps) -> Html {
    match find_service(&props.slug) {
        Some(service) => html! { <ServiceDetailView {service} /> },
        None => {
            warn!("Unknown service slug: {}", props.slug);
            html! {
                <section class="section not-found">
                    <div class="container">
                        <h1 class="page-title">{"Service Not Found"}</h1>
                        <p>{"That service doesn't exist. Take a look at everything on offer instead."}</p>
                        <Link<Route> to={Route::Services} classes="btn-primary">{"Browse Services"}</Link<Route>>
                    </div>
                </section>
            }
        }
    }
}

#[derive(Properties, PartialEq)]
struct ServiceDetailViewProps {
    service: &'static Service,
}

#[function_component(ServiceDetailView)]
fn service_detail_view(props: &ServiceDetailViewProps) -> Html {
    let service = props.service;
    let related = SERVICES
        .iter()
        .filter(|other| other.slug != service.slug)
        .take(3);

    html! {
        <>
            <PageHeader
                eyebrow="Service"
                title={service.title}
                subtitle={AttrValue::from(service.summary)}
            />
            <section class="section service-detail">
                <div class="container service-detail-grid">
                    <Reveal from={RevealFrom::Left}>
                        <LazyImage
                            src={service.illustration}
                            alt={format!("{} illustration", service.title)}
                            container_class="service-detail-image"
                        />
                    </Reveal>
                    <Reveal from={RevealFrom::Right}>
                        <div class="service-detail-body">
                            <p>{service.description}</p>
                            <div class="service-meta">
                                <span>{format!("Delivery: {}", service.delivery_time)}</span>
                                if let Some(price) = service.starting_price {
                                    <span>{format!("Starting at {}", price)}</span>
                                }
                            </div>
                            <HireButton service={service.contact_option()} class="btn-primary">
                                {"Hire Me for This →"}
                            </HireButton>
                        </div>
                    </Reveal>
                </div>
                <div class="container service-detail-columns">
                    <Reveal>
                        <div class="glass-card">
                            <h3>{"What's Included"}</h3>
                            <ul class="check-list">
                                { for service.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                            </ul>
                        </div>
                    </Reveal>
                    <Reveal delay_ms={100}>
                        <div class="glass-card">
                            <h3>{"How It Works"}</h3>
                            <ol class="process-list">
                                { for service.process.iter().map(|step| html! { <li>{*step}</li> }) }
                            </ol>
                        </div>
                    </Reveal>
                    <Reveal delay_ms={200}>
                        <div class="glass-card">
                            <h3>{"Why It Helps"}</h3>
                            <ul class="check-list">
                                { for service.benefits.iter().map(|benefit| html! { <li>{*benefit}</li> }) }
                            </ul>
                        </div>
                    </Reveal>
                </div>
            </section>
            <section class="section related-services">
                <div class="container">
                    <h2 class="section-title">{"Other "}<span class="text-gradient">{"Services"}</span></h2>
                    <div class="services-grid">
                        { for related.map(|other| html! {
                            <Link<Route> to={Route::ServiceDetail { slug: other.slug.to_string() }} classes="service-card glass-card hover-lift">
                                <h3>{other.title}</h3>
                                <p>{other.summary}</p>
                            </Link<Route>>
                        }) }
                    </div>
                </div>
            </section>
        </>
    }
}
