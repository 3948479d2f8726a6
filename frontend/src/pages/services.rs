use yew::prelude::*;

use crate::components::pricing_section::PricingSection;
use crate::components::services_section::ServicesSection;
use crate::components::transition_band::TransitionBand;
use crate::pages::page_header::PageHeader;

#[function_component(ServicesPage)]
pub fn services_page() -> Html {
    html! {
        <>
            <PageHeader
                eyebrow="Services"
                title="Writing Services"
                highlight="Built Around You"
                subtitle={AttrValue::from("Pick a service to see what's included, how the process works and when you can expect delivery.")}
            />
            <ServicesSection />
            <TransitionBand />
            <PricingSection />
        </>
    }
}
