use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::lazy_image::LazyImage;
use crate::content::company::HERO_STATS;
use crate::Route;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <header class="hero" id="home">
            <div class="hero-background"></div>
            <div class="container hero-grid">
                <div class="hero-illustration float-in">
                    // Above the fold, so never deferred.
                    <LazyImage
                        src="/assets/3d-hero-writing.png"
                        alt="Writing desk illustration"
                        priority={true}
                        class="hero-image"
                    />
                </div>
                <div class="hero-content">
                    <div class="hero-badge fade-up">
                        <span>{"✦ Premium Writing Services"}</span>
                    </div>
                    <h1 class="hero-title fade-up delay-1">
                        {"Professional Writing "}
                        <span class="text-gradient">{"That Speaks for You"}</span>
                    </h1>
                    <p class="hero-subtitle fade-up delay-2">
                        {"Expert in Content Writing, Resume Creation, SOP Writing & Academic Communication. Transform your ideas into powerful, polished words."}
                    </p>
                    <div class="hero-cta-group fade-up delay-3">
                        <Link<Route> to={Route::Contact} classes="btn-primary">
                            {"Hire Me →"}
                        </Link<Route>>
                        <Link<Route> to={Route::Services} classes="btn-outline">
                            {"View Services"}
                        </Link<Route>>
                    </div>
                    <div class="hero-stats fade-up delay-4">
                        { for HERO_STATS.iter().map(|stat| html! {
                            <div class="stat">
                                <div class="stat-value text-gradient">{stat.value}</div>
                                <div class="stat-label">{stat.label}</div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </header>
    }
}
