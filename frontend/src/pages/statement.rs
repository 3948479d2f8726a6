use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::transition_band::TransitionBand;
use crate::content::company::{
    Value, MISSION_STATEMENT, MISSION_VALUES, VISION_STATEMENT, VISION_VALUES,
};
use crate::pages::page_header::PageHeader;

#[derive(Properties, PartialEq)]
struct StatementPageProps {
    eyebrow: &'static str,
    title: &'static str,
    highlight: &'static str,
    statement: &'static str,
    values_heading: &'static str,
    values: &'static [Value],
}

#[function_component(StatementPage)]
fn statement_page(props: &StatementPageProps) -> Html {
    html! {
        <>
            <PageHeader eyebrow={props.eyebrow} title={props.title} highlight={props.highlight} />
            <section class="section statement-section">
                <div class="container">
                    <Reveal>
                        <blockquote class="statement glass-card">{props.statement}</blockquote>
                    </Reveal>
                    <h2 class="section-title">{props.values_heading}</h2>
                    <div class="values-grid">
                        { for props.values.iter().enumerate().map(|(index, value)| html! {
                            <Reveal delay_ms={index as u32 * 100}>
                                <div class="value-card glass-card hover-lift">
                                    <h3>{value.title}</h3>
                                    <p>{value.description}</p>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>
            <TransitionBand />
        </>
    }
}

#[function_component(Mission)]
pub fn mission() -> Html {
    html! {
        <StatementPage
            eyebrow="Mission"
            title="Why I"
            highlight="Write"
            statement={MISSION_STATEMENT}
            values_heading="What Drives the Work"
            values={MISSION_VALUES}
        />
    }
}

#[function_component(Vision)]
pub fn vision() -> Html {
    html! {
        <StatementPage
            eyebrow="Vision"
            title="Where This Is"
            highlight="Heading"
            statement={VISION_STATEMENT}
            values_heading="Looking Ahead"
            values={VISION_VALUES}
        />
    }
}
