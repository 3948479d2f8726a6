use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::modal::Modal;
use crate::components::reveal::Reveal;
use crate::content::{PricingPlan, PRICING_PLANS};
use crate::Route;

#[derive(Properties, PartialEq)]
struct PlanCardProps {
    plan: &'static PricingPlan,
    on_details: Callback<&'static PricingPlan>,
}

#[function_component(PlanCard)]
fn plan_card(props: &PlanCardProps) -> Html {
    let plan = props.plan;
    let on_details = {
        let on_details = props.on_details.clone();
        Callback::from(move |_: MouseEvent| on_details.emit(plan))
    };

    html! {
        <div class={classes!("pricing-card", "glass-card", plan.popular.then_some("popular"))}>
            if plan.popular {
                <span class="popular-badge">{"Most Popular"}</span>
            }
            <h3>{plan.name}</h3>
            <div class="price">
                <span class="price-amount text-gradient">{plan.price}</span>
                <span class="price-period">{plan.period}</span>
            </div>
            <p class="plan-description">{plan.description}</p>
            <ul class="plan-features">
                { for plan.features.iter().map(|feature| html! {
                    <li class="included">{"✓ "}{*feature}</li>
                }) }
                { for plan.not_included.iter().map(|feature| html! {
                    <li class="excluded">{"✕ "}{*feature}</li>
                }) }
            </ul>
            <div class="plan-actions">
                <button class="btn-outline" onclick={on_details}>{"View Details"}</button>
                <Link<Route> to={Route::Contact} classes="btn-primary">{"Get Started"}</Link<Route>>
            </div>
        </div>
    }
}

#[function_component(PricingSection)]
pub fn pricing_section() -> Html {
    let selected = use_state(|| None::<&'static PricingPlan>);

    let on_details = {
        let selected = selected.clone();
        Callback::from(move |plan: &'static PricingPlan| selected.set(Some(plan)))
    };
    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    html! {
        <section id="pricing" class="section pricing-section">
            <div class="container">
                <div class="section-header">
                    <Reveal><span class="eyebrow">{"Pricing"}</span></Reveal>
                    <Reveal delay_ms={100}>
                        <h2 class="section-title">{"Simple, "}<span class="text-gradient">{"Transparent"}</span>{" Pricing"}</h2>
                    </Reveal>
                    <Reveal delay_ms={200}>
                        <p class="section-subtitle">{"Choose the package that fits your project. Custom quotes available for larger work."}</p>
                    </Reveal>
                </div>
                <div class="pricing-grid">
                    { for PRICING_PLANS.iter().enumerate().map(|(index, plan)| html! {
                        <Reveal delay_ms={index as u32 * 100}>
                            <PlanCard {plan} on_details={on_details.clone()} />
                        </Reveal>
                    }) }
                </div>
            </div>
            if let Some(plan) = *selected {
                <Modal {on_close}>
                    <div class="plan-modal">
                        <h3>{format!("{} Plan", plan.name)}</h3>
                        <p class="price-amount text-gradient">{plan.price}</p>
                        <dl class="plan-details">
                            <dt>{"Ideal for"}</dt>
                            <dd>{plan.details.ideal_for}</dd>
                            <dt>{"Turnaround"}</dt>
                            <dd>{plan.details.turnaround}</dd>
                            <dt>{"Support"}</dt>
                            <dd>{plan.details.support}</dd>
                            <dt>{"Extras"}</dt>
                            <dd>{plan.details.extras}</dd>
                        </dl>
                        <Link<Route> to={Route::Contact} classes="btn-primary">{"Get Started"}</Link<Route>>
                    </div>
                </Modal>
            }
        </section>
    }
}
