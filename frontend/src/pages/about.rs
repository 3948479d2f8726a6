use yew::prelude::*;

use crate::components::about_section::AboutSection;
use crate::components::reveal::Reveal;
use crate::components::testimonials::TestimonialsSection;
use crate::components::why_choose_me::WhyChooseMe;
use crate::content::company::{ACHIEVEMENTS, SKILLS};
use crate::pages::page_header::PageHeader;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <>
            <PageHeader eyebrow="About" title="The Writer Behind" highlight="WriteElite" />
            <AboutSection link_to_page={false} />
            <section class="section skills-section">
                <div class="container skills-grid">
                    <Reveal>
                        <div class="glass-card">
                            <h3>{"Skills & Expertise"}</h3>
                            <div class="skill-tags">
                                { for SKILLS.iter().map(|skill| html! { <span class="skill-tag">{*skill}</span> }) }
                            </div>
                        </div>
                    </Reveal>
                    <Reveal delay_ms={100}>
                        <div class="glass-card">
                            <h3>{"Achievements"}</h3>
                            <ul class="check-list">
                                { for ACHIEVEMENTS.iter().map(|item| html! { <li>{*item}</li> }) }
                            </ul>
                        </div>
                    </Reveal>
                </div>
            </section>
            <WhyChooseMe />
            <TestimonialsSection />
        </>
    }
}
