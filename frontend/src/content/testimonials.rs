#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub avatar: char,
    pub rating: u8,
    pub short_quote: &'static str,
    pub full_quote: &'static str,
    pub project: &'static str,
}

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Mitchell",
        role: "Marketing Manager",
        company: "TechStart Inc.",
        avatar: 'S',
        rating: 5,
        short_quote: "Exceptional content that exceeded all expectations. The writing truly captured our brand voice.",
        full_quote: "Working with WriteElite was a game-changer for our content strategy. The writing quality is exceptional and every piece delivered exceeded our expectations. Turnaround was impressive and the attention to detail in capturing our brand voice was remarkable. Highly recommended for anyone serious about their content.",
        project: "Website Content & Blog Articles",
    },
    Testimonial {
        name: "James Chen",
        role: "MBA Graduate",
        company: "Harvard Business School",
        avatar: 'J',
        rating: 5,
        short_quote: "My SOP was perfect. Got accepted into my dream school thanks to this incredible writing.",
        full_quote: "I struggled with my Statement of Purpose for months until I found WriteElite. The writer understood exactly what admissions committees look for and crafted a narrative that was authentically me while highlighting my strengths. I got accepted, and I believe the SOP played a crucial role.",
        project: "Statement of Purpose",
    },
    Testimonial {
        name: "Emily Rodriguez",
        role: "HR Director",
        company: "Global Solutions Ltd",
        avatar: 'E',
        rating: 5,
        short_quote: "The resume writing service helped me land my dream job. Absolutely professional work.",
        full_quote: "After six months of job searching with no luck I invested in a professional resume. Within two weeks I started getting interview calls from top companies. The ATS optimization really works, I was finally getting past the automated screening. I landed my dream role and couldn't be more grateful.",
        project: "Resume & Cover Letter",
    },
    Testimonial {
        name: "Michael Thompson",
        role: "CEO",
        company: "Innovate Digital",
        avatar: 'M',
        rating: 5,
        short_quote: "Outstanding copywriting that significantly improved our conversion rates. A true professional.",
        full_quote: "We hired WriteElite to overhaul our landing page copy and our conversion rate increased by 47% in one month. The copy is strategic, persuasive and aligned with our audience. Communication was excellent and we have since engaged for ongoing content needs.",
        project: "Landing Page Copywriting",
    },
    Testimonial {
        name: "Dr. Amanda Foster",
        role: "Research Scientist",
        company: "Stanford University",
        avatar: 'A',
        rating: 5,
        short_quote: "Academic writing of the highest caliber. Proper citations, perfect structure, excellent research.",
        full_quote: "As a researcher I have very high standards for academic writing, and WriteElite met all of them. The paper was meticulously structured, properly cited and showed a deep understanding of the subject. The literature review was comprehensive. I've since recommended these services to several colleagues.",
        project: "Research Paper & Literature Review",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_quotes_summarise_full_quotes() {
        for testimonial in TESTIMONIALS {
            assert!((1..=5).contains(&testimonial.rating));
            assert!(testimonial.short_quote.len() < testimonial.full_quote.len());
        }
        assert_eq!(TESTIMONIALS.len(), 5);
    }
}
