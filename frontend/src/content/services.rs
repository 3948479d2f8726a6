#[derive(Clone, Debug, PartialEq)]
pub struct Service {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub process: &'static [&'static str],
    pub delivery_time: &'static str,
    pub benefits: &'static [&'static str],
    pub starting_price: Option<&'static str>,
    pub illustration: &'static str,
}

const WRITING_ILLUSTRATION: &str = "/assets/3d-content-writing.png";
const STUDIO_ILLUSTRATION: &str = "/assets/3d-services.png";

pub static SERVICES: &[Service] = &[
    Service {
        slug: "content-writing",
        title: "Content Writing",
        summary: "Engaging blog posts, articles, and web content that captivates your audience.",
        description: "Transform your brand's message with professionally crafted content that engages, informs, and converts. From blog posts to website copy, I create content that resonates with your target audience and drives measurable results. Every piece is researched and optimized for both readers and search engines.",
        features: &[
            "SEO-optimized content that ranks",
            "Engaging blog posts & articles",
            "Compelling website copy",
            "Social media content",
            "Product descriptions",
            "Email newsletters",
        ],
        process: &[
            "Initial consultation to understand your brand voice and goals",
            "Research and outline creation for approval",
            "First draft delivery with SEO optimization",
            "Revisions based on your feedback",
            "Final polished content ready for publishing",
        ],
        delivery_time: "3-5 Business Days",
        benefits: &[
            "Increase organic traffic",
            "Build brand authority",
            "Engage your audience",
            "Drive conversions",
        ],
        starting_price: Some("$50"),
        illustration: WRITING_ILLUSTRATION,
    },
    Service {
        slug: "web-development",
        title: "Web Development",
        summary: "Modern, responsive websites and web applications built with current technologies.",
        description: "Create a strong online presence with custom-built websites and web applications. I deliver fast, responsive and user-friendly digital experiences that help your business stand out.",
        features: &[
            "Custom website design & development",
            "Responsive mobile-first approach",
            "E-commerce solutions",
            "Web applications",
            "Performance optimization",
            "Ongoing maintenance & support",
        ],
        process: &[
            "Discovery call to understand your requirements",
            "Wireframing and design mockups",
            "Development with regular updates",
            "Testing across devices and browsers",
            "Launch and post-launch support",
        ],
        delivery_time: "2-6 Weeks",
        benefits: &[
            "Professional online presence",
            "Better user experience",
            "Increased conversions",
            "Scalable solutions",
        ],
        starting_price: None,
        illustration: STUDIO_ILLUSTRATION,
    },
    Service {
        slug: "digital-marketing",
        title: "Digital Marketing",
        summary: "Strategic digital marketing solutions to grow your online presence.",
        description: "Drive growth with data-driven digital marketing strategies tailored to your business goals. From social media to email campaigns, I help you reach your audience, build awareness and generate leads that convert.",
        features: &[
            "Social media marketing",
            "Email marketing campaigns",
            "Content marketing strategy",
            "PPC advertising management",
            "Analytics & reporting",
            "Marketing automation",
        ],
        process: &[
            "Audit of current marketing efforts",
            "Strategy development and goal setting",
            "Campaign creation and implementation",
            "Continuous optimization and A/B testing",
            "Monthly reporting and analysis",
        ],
        delivery_time: "Ongoing Partnership",
        benefits: &[
            "Increased brand visibility",
            "Higher engagement rates",
            "Quality lead generation",
            "Measurable ROI",
        ],
        starting_price: None,
        illustration: STUDIO_ILLUSTRATION,
    },
    Service {
        slug: "branding",
        title: "Branding",
        summary: "Comprehensive branding services to establish your unique identity.",
        description: "Build a memorable brand that resonates with your audience and stands out from the competition. From strategy to visual identity, I help you create a cohesive brand experience that communicates your values and story.",
        features: &[
            "Brand strategy & positioning",
            "Visual identity design",
            "Logo design & variations",
            "Brand guidelines document",
            "Brand voice & messaging",
            "Collateral design",
        ],
        process: &[
            "Brand discovery and research",
            "Strategy and positioning development",
            "Visual identity concept creation",
            "Refinement based on feedback",
            "Final brand guidelines delivery",
        ],
        delivery_time: "2-4 Weeks",
        benefits: &[
            "Distinctive brand identity",
            "Consistent brand experience",
            "Stronger customer connection",
            "Competitive advantage",
        ],
        starting_price: None,
        illustration: STUDIO_ILLUSTRATION,
    },
    Service {
        slug: "seo",
        title: "SEO",
        summary: "Search engine optimization to improve visibility and drive organic traffic.",
        description: "Improve your search rankings and drive qualified organic traffic. I use proven, ethical techniques to help your website rank higher, attract more visitors and convert them into customers.",
        features: &[
            "Comprehensive keyword research",
            "On-page SEO optimization",
            "Technical SEO audit & fixes",
            "Link building strategies",
            "Local SEO optimization",
            "SEO content creation",
        ],
        process: &[
            "Website and competitor analysis",
            "Keyword research and strategy",
            "On-page optimization implementation",
            "Technical SEO improvements",
            "Ongoing monitoring and adjustments",
        ],
        delivery_time: "3-6 Months for Results",
        benefits: &[
            "Higher search rankings",
            "Increased organic traffic",
            "Better user experience",
            "Long-term growth",
        ],
        starting_price: None,
        illustration: STUDIO_ILLUSTRATION,
    },
    Service {
        slug: "resume-writing",
        title: "Resume Writing",
        summary: "ATS-friendly resumes that get you noticed by top employers and recruiters.",
        description: "Stand out in a competitive job market with a professionally written, ATS-optimized resume. I craft resumes that highlight your achievements, pass automated screening and land you interviews.",
        features: &[
            "ATS-optimized formatting",
            "Keyword optimization for your industry",
            "Achievement-focused content",
            "Clean, modern design",
            "Cover letter writing",
            "LinkedIn profile optimization",
        ],
        process: &[
            "Career history review and consultation",
            "Achievement identification and quantification",
            "ATS-optimized formatting and keywords",
            "First draft for review",
            "Final polishing with cover letter",
        ],
        delivery_time: "2-3 Business Days",
        benefits: &[
            "Pass ATS screening",
            "Stand out to recruiters",
            "Highlight your strengths",
            "Land more interviews",
        ],
        starting_price: Some("$75"),
        illustration: WRITING_ILLUSTRATION,
    },
    Service {
        slug: "sop-writing",
        title: "SOP Writing",
        summary: "Compelling statements of purpose for university and visa applications.",
        description: "Your Statement of Purpose is your story. I help craft narratives that show your journey, your aspirations and why you are the right candidate for your program or visa application.",
        features: &[
            "University admission SOPs",
            "Visa application SOPs",
            "Personal statements",
            "Scholarship essays",
            "Letters of motivation",
            "Research proposals",
        ],
        process: &[
            "In-depth questionnaire about your background",
            "Review of program/visa requirements",
            "Draft creation with compelling narrative",
            "Collaborative refinement process",
            "Final SOP tailored to specific programs",
        ],
        delivery_time: "5-7 Business Days",
        benefits: &[
            "Compelling personal story",
            "Program-specific customization",
            "Higher acceptance rates",
            "Stand out from applicants",
        ],
        starting_price: Some("$100"),
        illustration: WRITING_ILLUSTRATION,
    },
    Service {
        slug: "copywriting",
        title: "Copywriting",
        summary: "Persuasive sales copy that converts visitors into customers.",
        description: "Words that sell. I write marketing copy that captures attention, builds desire and drives action. From landing pages to ad copy, every word is written for impact and conversion.",
        features: &[
            "Landing page copy",
            "Sales page writing",
            "Email sequences",
            "Ad copy (Google, Facebook, etc.)",
            "Product descriptions",
            "Marketing collateral",
        ],
        process: &[
            "Brand and audience analysis",
            "Competitive research",
            "Hook and headline creation",
            "Persuasive copy drafting",
            "A/B testing suggestions",
        ],
        delivery_time: "3-5 Business Days",
        benefits: &[
            "Higher conversion rates",
            "Compelling brand voice",
            "Effective CTAs",
            "Measurable results",
        ],
        starting_price: Some("$60"),
        illustration: WRITING_ILLUSTRATION,
    },
];

impl Service {
    /// Contact-form option to preselect when hiring for this service.
    pub fn contact_option(&self) -> &'static str {
        selectable_service(self.title).unwrap_or(OTHER_SERVICE)
    }
}

pub fn find_service(slug: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|service| service.slug == slug)
}

/// Catch-all contact option for work outside the listed services.
pub const OTHER_SERVICE: &str = "Other";

/// The contact-form option named by `requested`, ignoring case and
/// surrounding whitespace.
pub fn selectable_service(requested: &str) -> Option<&'static str> {
    let requested = requested.trim();
    CONTACT_SERVICE_OPTIONS
        .iter()
        .copied()
        .find(|option| option.eq_ignore_ascii_case(requested))
}

/// Options offered in the contact form's service picker.
pub static CONTACT_SERVICE_OPTIONS: &[&str] = &[
    "Content Writing",
    "Resume Writing",
    "SOP Writing",
    "Academic Writing",
    "Cover Letter",
    "Email & Letter Writing",
    "Copywriting",
    "Portfolio Writing",
    "Other",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slugs_are_unique_and_url_safe() {
        let mut seen = HashSet::new();
        for service in SERVICES {
            assert!(seen.insert(service.slug), "duplicate slug {}", service.slug);
            assert!(service
                .slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c == '-'));
        }
        assert_eq!(SERVICES.len(), 8);
    }

    #[test]
    fn finds_services_by_slug() {
        let service = find_service("sop-writing").expect("sop service exists");
        assert_eq!(service.title, "SOP Writing");
        assert!(find_service("ghostwriting").is_none());
        assert!(find_service("").is_none());
    }

    #[test]
    fn every_service_is_fully_described() {
        for service in SERVICES {
            assert!(!service.features.is_empty(), "{} has no features", service.slug);
            assert!(!service.process.is_empty(), "{} has no process", service.slug);
            assert!(!service.benefits.is_empty(), "{} has no benefits", service.slug);
            assert!(service.illustration.starts_with("/assets/"));
        }
    }

    #[test]
    fn contact_options_end_with_other() {
        assert_eq!(CONTACT_SERVICE_OPTIONS.last(), Some(&OTHER_SERVICE));
        assert!(CONTACT_SERVICE_OPTIONS.contains(&"Resume Writing"));
    }

    #[test]
    fn every_service_hires_into_a_selectable_option() {
        for service in SERVICES {
            let option = service.contact_option();
            assert!(
                CONTACT_SERVICE_OPTIONS.contains(&option),
                "{} maps to unselectable {:?}",
                service.slug,
                option
            );
            assert_eq!(selectable_service(option), Some(option));
        }
    }

    #[test]
    fn services_without_their_own_option_fall_back_to_other() {
        let web = find_service("web-development").expect("web service exists");
        assert_eq!(web.contact_option(), OTHER_SERVICE);
        let seo = find_service("seo").expect("seo service exists");
        assert_eq!(seo.contact_option(), OTHER_SERVICE);
        let resume = find_service("resume-writing").expect("resume service exists");
        assert_eq!(resume.contact_option(), "Resume Writing");
    }

    #[test]
    fn selectable_service_normalises_input() {
        assert_eq!(selectable_service("  sop writing "), Some("SOP Writing"));
        assert_eq!(selectable_service("Ghostwriting"), None);
        assert_eq!(selectable_service(""), None);
    }
}
