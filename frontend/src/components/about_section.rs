use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::lazy_image::LazyImage;
use crate::components::reveal::{Reveal, RevealFrom};
use crate::content::company::{ABOUT_HIGHLIGHTS, ABOUT_STATS};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct AboutSectionProps {
    /// Show the "read more" link to the full about page.
    #[prop_or(true)]
    pub link_to_page: bool,
}

#[function_component(AboutSection)]
pub fn about_section(props: &AboutSectionProps) -> Html {
    html! {
        <section id="about" class="section about-section">
            <div class="container about-grid">
                <Reveal from={RevealFrom::Left}>
                    <div class="about-image-wrapper">
                        <LazyImage
                            src="/assets/writer-portrait.jpg"
                            alt="Portrait of the writer"
                            container_class="about-image"
                        />
                        <div class="about-badge glass-card">
                            <span class="text-gradient">{"5+"}</span>
                            <span>{"Years of crafting words"}</span>
                        </div>
                    </div>
                </Reveal>
                <Reveal from={RevealFrom::Right}>
                    <div class="about-content">
                        <span class="eyebrow">{"About Me"}</span>
                        <h2 class="section-title">
                            {"Crafting Words That "}<span class="text-gradient">{"Make an Impact"}</span>
                        </h2>
                        <p>
                            {"I'm a professional writer who helps students, professionals and businesses communicate with clarity and confidence. From admissions essays to brand stories, I turn ideas into writing that gets results."}
                        </p>
                        <p>
                            {"Every project gets thorough research, a tone tailored to its audience and careful editing before it reaches you."}
                        </p>
                        <div class="about-highlights">
                            { for ABOUT_HIGHLIGHTS.iter().map(|highlight| html! {
                                <div class="about-highlight">
                                    <h4>{highlight.title}</h4>
                                    <p>{highlight.description}</p>
                                </div>
                            }) }
                        </div>
                        if props.link_to_page {
                            <Link<Route> to={Route::About} classes="btn-outline">
                                {"More About Me →"}
                            </Link<Route>>
                        }
                    </div>
                </Reveal>
            </div>
            <div class="container about-stats">
                { for ABOUT_STATS.iter().enumerate().map(|(index, stat)| html! {
                    <Reveal delay_ms={index as u32 * 100}>
                        <div class="stat glass-card">
                            <div class="stat-value text-gradient">{stat.value}</div>
                            <div class="stat-label">{stat.label}</div>
                        </div>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}
