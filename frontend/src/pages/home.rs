use yew::prelude::*;

use crate::components::about_section::AboutSection;
use crate::components::contact_section::ContactSection;
use crate::components::hero::Hero;
use crate::components::pricing_section::PricingSection;
use crate::components::testimonials::TestimonialsSection;
use crate::components::transition_band::TransitionBand;
use crate::components::why_choose_me::WhyChooseMe;
use crate::components::writing_services::WritingServicesSection;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <>
            <Hero />
            <WritingServicesSection />
            <AboutSection />
            <TransitionBand />
            <WhyChooseMe />
            <PricingSection />
            <TestimonialsSection />
            <ContactSection />
        </>
    }
}
