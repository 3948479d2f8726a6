use yew::prelude::*;
use yew_hooks::use_search_param;

use crate::components::contact_section::ContactSection;
use crate::pages::page_header::PageHeader;

#[function_component(Contact)]
pub fn contact() -> Html {
    // `/contact?service=Resume%20Writing` preselects that service.
    let service = use_search_param("service".to_string());

    html! {
        <>
            <PageHeader
                eyebrow="Contact"
                title="Start Your"
                highlight="Project"
                subtitle={AttrValue::from("Questions, quotes or a quick hello. Every message gets a reply within a day.")}
            />
            <ContactSection service={service.map(AttrValue::from)} />
        </>
    }
}
