/// A writing service shown on the home page. Each one backs an option in
/// the contact form's service picker.
#[derive(Clone, Debug, PartialEq)]
pub struct WritingService {
    pub title: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub process: &'static [&'static str],
    pub delivery_time: &'static str,
    pub features: &'static [&'static str],
    pub starting_price: &'static str,
    /// Option preselected in the contact form for this service.
    pub contact_option: &'static str,
}

pub static WRITING_SERVICES: &[WritingService] = &[
    WritingService {
        title: "Content Writing",
        summary: "Engaging blog posts, articles, and web content that captivates your audience.",
        description: "Transform your brand's message with professionally crafted content that engages, informs, and converts. From blog posts to website copy, I create content that resonates with your target audience and drives results.",
        process: &[
            "Initial consultation to understand your brand voice and goals",
            "Research and outline creation for approval",
            "First draft delivery with SEO optimization",
            "Revisions based on your feedback",
            "Final polished content ready for publishing",
        ],
        delivery_time: "3-5 Business Days",
        features: &[
            "SEO-optimized content",
            "Plagiarism-free guarantee",
            "Unlimited revisions",
            "Research-backed writing",
            "Brand voice consistency",
            "Meta descriptions included",
        ],
        starting_price: "$50",
        contact_option: "Content Writing",
    },
    WritingService {
        title: "Resume Writing",
        summary: "ATS-friendly resumes that get you noticed by top employers and recruiters.",
        description: "Stand out in the competitive job market with a professionally written, ATS-optimized resume. I craft compelling resumes that highlight your achievements and get past automated screening systems.",
        process: &[
            "Career history review and consultation",
            "Achievement identification and quantification",
            "ATS-optimized formatting and keywords",
            "First draft for review",
            "Final polishing with cover letter template",
        ],
        delivery_time: "2-3 Business Days",
        features: &[
            "ATS-friendly formatting",
            "Keyword optimization",
            "Achievement-focused content",
            "Modern, clean design",
            "LinkedIn profile tips",
            "Editable Word/PDF formats",
        ],
        starting_price: "$75",
        contact_option: "Resume Writing",
    },
    WritingService {
        title: "SOP Writing",
        summary: "Compelling statements of purpose for university and visa applications.",
        description: "Your Statement of Purpose is your story. I help craft narratives that showcase your unique journey, aspirations, and why you're the perfect candidate for your dream program or visa application.",
        process: &[
            "In-depth questionnaire about your background",
            "Review of program requirements",
            "Draft creation with compelling narrative",
            "Collaborative refinement process",
            "Final SOP tailored to specific programs",
        ],
        delivery_time: "5-7 Business Days",
        features: &[
            "Personalized storytelling",
            "Program-specific customization",
            "Strong opening hooks",
            "Clear career trajectory",
            "Admission committee insights",
            "Multiple program versions",
        ],
        starting_price: "$100",
        contact_option: "SOP Writing",
    },
    WritingService {
        title: "Academic Writing",
        summary: "Research papers, essays, and dissertations with proper citations.",
        description: "Excel in your academic pursuits with professionally written research papers, essays, and dissertations. I ensure rigorous research, proper citations, and adherence to academic standards.",
        process: &[
            "Topic analysis and research plan",
            "Comprehensive literature review",
            "Structured outline for approval",
            "Draft with proper citations",
            "Final review and formatting",
        ],
        delivery_time: "7-14 Business Days",
        features: &[
            "Thorough research",
            "Proper citation formats",
            "Plagiarism-free content",
            "Academic tone",
            "Bibliography included",
            "Formatting per guidelines",
        ],
        starting_price: "$120",
        contact_option: "Academic Writing",
    },
    WritingService {
        title: "Cover Letters",
        summary: "Personalized cover letters that complement your resume perfectly.",
        description: "Make a memorable first impression with cover letters that tell your professional story. Each letter is crafted to highlight your relevant experience and genuine interest in the role.",
        process: &[
            "Job description analysis",
            "Key skills mapping",
            "Draft creation with personal touch",
            "Review and refinement",
            "Final customizable template",
        ],
        delivery_time: "1-2 Business Days",
        features: &[
            "Job-specific customization",
            "Compelling opening",
            "Skills alignment",
            "Professional formatting",
            "Call-to-action closing",
            "Easy customization tips",
        ],
        starting_price: "$40",
        contact_option: "Cover Letter",
    },
    WritingService {
        title: "Email & Letter Writing",
        summary: "Professional business correspondence that gets results.",
        description: "From formal business letters to persuasive emails, I craft professional correspondence that communicates clearly, maintains proper etiquette, and achieves your communication goals.",
        process: &[
            "Purpose and audience understanding",
            "Tone and format selection",
            "Draft creation",
            "Review for clarity and impact",
            "Final polished version",
        ],
        delivery_time: "1-2 Business Days",
        features: &[
            "Professional tone",
            "Clear messaging",
            "Proper formatting",
            "Persuasive language",
            "Template creation",
            "Quick turnaround",
        ],
        starting_price: "$30",
        contact_option: "Email & Letter Writing",
    },
    WritingService {
        title: "Copywriting",
        summary: "Persuasive sales copy and marketing content that converts.",
        description: "Words that sell. I create compelling marketing copy that captures attention, builds desire, and drives action. From landing pages to ad copy, every word is crafted for maximum impact.",
        process: &[
            "Brand and audience analysis",
            "Competitive research",
            "Hook and headline creation",
            "Persuasive copy drafting",
            "A/B testing suggestions",
        ],
        delivery_time: "3-5 Business Days",
        features: &[
            "Conversion-focused",
            "Emotional triggers",
            "Clear CTAs",
            "Brand voice alignment",
            "SEO consideration",
            "Multiple variations",
        ],
        starting_price: "$80",
        contact_option: "Copywriting",
    },
    WritingService {
        title: "Portfolio Writing",
        summary: "Professional portfolios and bio pages that showcase your work.",
        description: "Present yourself professionally with compelling portfolio content and bios. I help you articulate your expertise, showcase your achievements, and create a lasting impression on potential clients or employers.",
        process: &[
            "Career and achievements review",
            "Unique value proposition identification",
            "Content structure planning",
            "Draft with engaging narrative",
            "Final polished portfolio content",
        ],
        delivery_time: "4-6 Business Days",
        features: &[
            "Professional tone",
            "Achievement highlights",
            "Engaging narrative",
            "SEO-optimized",
            "Platform-specific versions",
            "Visual content suggestions",
        ],
        starting_price: "$90",
        contact_option: "Portfolio Writing",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::services::{selectable_service, CONTACT_SERVICE_OPTIONS, OTHER_SERVICE};

    fn backing_service(option: &str) -> Option<&'static WritingService> {
        WRITING_SERVICES
            .iter()
            .find(|service| selectable_service(service.contact_option) == Some(option))
    }

    #[test]
    fn home_catalog_lists_eight_writing_services() {
        assert_eq!(WRITING_SERVICES.len(), 8);
        assert_eq!(WRITING_SERVICES[0].title, "Content Writing");
        assert_eq!(WRITING_SERVICES[7].title, "Portfolio Writing");
    }

    #[test]
    fn every_writing_service_preselects_a_real_option() {
        for service in WRITING_SERVICES {
            assert_eq!(
                selectable_service(service.contact_option),
                Some(service.contact_option),
                "{} points at an unknown option",
                service.title
            );
        }
    }

    #[test]
    fn every_named_option_is_backed_by_a_card() {
        for option in CONTACT_SERVICE_OPTIONS.iter().filter(|o| **o != OTHER_SERVICE) {
            assert!(backing_service(option).is_some(), "no card for {}", option);
        }
        assert!(backing_service(OTHER_SERVICE).is_none());
    }

    #[test]
    fn cards_are_fully_described() {
        for service in WRITING_SERVICES {
            assert_eq!(service.features.len(), 6, "{}", service.title);
            assert_eq!(service.process.len(), 5, "{}", service.title);
            assert!(service.starting_price.starts_with('$'));
        }
    }
}
