use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageHeaderProps {
    pub eyebrow: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub highlight: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

/// Banner shown at the top of every inner page.
#[function_component(PageHeader)]
pub fn page_header(props: &PageHeaderProps) -> Html {
    html! {
        <header class="page-header">
            <div class="container">
                <span class="eyebrow fade-up">{props.eyebrow.clone()}</span>
                <h1 class="page-title fade-up delay-1">
                    {props.title.clone()}
                    if !props.highlight.is_empty() {
                        {" "}<span class="text-gradient">{props.highlight.clone()}</span>
                    }
                </h1>
                if let Some(subtitle) = &props.subtitle {
                    <p class="page-subtitle fade-up delay-2">{subtitle.clone()}</p>
                }
            </div>
        </header>
    }
}
