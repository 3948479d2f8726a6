#[derive(Clone, Debug, PartialEq)]
pub struct Highlight {
    pub title: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub benefits: &'static [&'static str],
}

#[derive(Clone, Debug, PartialEq)]
pub struct Value {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const BRAND: &str = "WriteElite";
pub const TAGLINE: &str = "Professional Writing That Speaks for You";

pub static HERO_STATS: &[Stat] = &[
    Stat { value: "500+", label: "Projects Completed" },
    Stat { value: "100%", label: "Client Satisfaction" },
    Stat { value: "5+", label: "Years Experience" },
];

pub static ABOUT_STATS: &[Stat] = &[
    Stat { value: "500+", label: "Projects Completed" },
    Stat { value: "200+", label: "Happy Clients" },
    Stat { value: "5+", label: "Years Experience" },
    Stat { value: "100%", label: "Satisfaction Rate" },
];

pub static ABOUT_HIGHLIGHTS: &[Value] = &[
    Value { title: "Fast Delivery", description: "Quick turnaround without compromising quality" },
    Value { title: "100% Original", description: "Plagiarism-free, unique content every time" },
    Value { title: "Professional Tone", description: "Clear, polished communication" },
    Value { title: "Unlimited Revisions", description: "Until you're completely satisfied" },
];

pub static SKILLS: &[&str] = &[
    "Content Strategy",
    "SEO Writing",
    "Academic Research",
    "Creative Writing",
    "Technical Writing",
    "Brand Storytelling",
    "Copywriting",
    "Editorial Writing",
];

pub static ACHIEVEMENTS: &[&str] = &[
    "Featured writer on top publications",
    "Helped clients secure positions at Fortune 500 companies",
    "Contributed to successful university admissions worldwide",
    "Developed content strategies for leading startups",
    "Trained emerging writers in professional writing",
];

pub static WHY_CHOOSE_ME: &[Highlight] = &[
    Highlight {
        title: "Quality Writing",
        summary: "Premium content that exceeds expectations",
        description: "Every piece I write undergoes rigorous quality checks. I combine creativity with precision to deliver content built on deep research, clear thinking and polished prose.",
        benefits: &["Thoroughly researched content", "Error-free delivery", "Engaging and readable", "SEO optimized when needed"],
    },
    Highlight {
        title: "Deadline Guarantee",
        summary: "Your time matters, I deliver on schedule",
        description: "Whether it's a rush job or a planned deliverable, I deliver on time without compromising quality. Your deadlines are my priority.",
        benefits: &["On-time delivery always", "Rush orders available", "Clear timeline communication", "Buffer for revisions"],
    },
    Highlight {
        title: "100% Original",
        summary: "Plagiarism-free, unique content guaranteed",
        description: "Every piece is written from scratch for your needs. I verify uniqueness with professional tools and provide plagiarism reports on request.",
        benefits: &["Plagiarism report available", "Custom-written content", "No templates or recycling", "Full ownership transfer"],
    },
    Highlight {
        title: "Clear Communication",
        summary: "Always available, always responsive",
        description: "Great writing starts with great understanding. I keep you updated throughout the project so your vision is captured exactly.",
        benefits: &["Quick response time", "Regular progress updates", "Open to feedback", "Clear revision process"],
    },
    Highlight {
        title: "Tailored Approach",
        summary: "Customized solutions for your unique needs",
        description: "I take time to understand your brand voice, audience and objectives to create content that represents you and resonates with your readers.",
        benefits: &["Brand voice matching", "Audience-focused content", "Industry expertise", "Strategic approach"],
    },
    Highlight {
        title: "Result-Oriented",
        summary: "Writing that achieves your goals",
        description: "Landing a job, getting into university or converting visitors: I write with your end goal in mind and measure success by your results.",
        benefits: &["Goal-focused writing", "Conversion optimization", "Performance tracking", "Strategic content planning"],
    },
    Highlight {
        title: "Client-First Focus",
        summary: "Your satisfaction is my success",
        description: "I build lasting relationships with my clients and go the extra mile so you are delighted with the final result.",
        benefits: &["Unlimited revisions", "Flexible payment options", "Long-term partnership", "Priority support"],
    },
    Highlight {
        title: "Proven Expertise",
        summary: "Years of experience across industries",
        description: "Over five years of professional writing and hundreds of satisfied clients, from startups to Fortune 500 companies.",
        benefits: &["500+ projects completed", "Multi-industry experience", "Continuous learning", "Professional certifications"],
    },
];

pub const MISSION_STATEMENT: &str = "To empower students, professionals and businesses with clear, compelling writing that opens doors, builds trust and creates lasting impact.";

pub static MISSION_VALUES: &[Value] = &[
    Value {
        title: "Passion for Excellence",
        description: "Every word we write is crafted with dedication and a genuine desire to help our clients succeed.",
    },
    Value {
        title: "Client-Centric Approach",
        description: "Your goals are our priority. We listen, understand, and deliver content that aligns with your vision.",
    },
    Value {
        title: "Uncompromising Quality",
        description: "We maintain the highest standards in everything we do, ensuring every deliverable exceeds expectations.",
    },
    Value {
        title: "Integrity & Trust",
        description: "Building lasting relationships through transparency, honesty, and consistent delivery on our promises.",
    },
];

pub const VISION_STATEMENT: &str = "To become the most trusted name in professional writing, where every client finds the words that move their story forward.";

pub static VISION_VALUES: &[Value] = &[
    Value {
        title: "Global Impact",
        description: "To empower individuals and businesses worldwide with exceptional writing that transcends boundaries and connects people.",
    },
    Value {
        title: "Innovation in Writing",
        description: "To keep evolving with digital communication while maintaining timeless writing principles.",
    },
    Value {
        title: "Excellence as Standard",
        description: "To set the benchmark for quality in professional writing services, where every piece reflects mastery and dedication.",
    },
    Value {
        title: "Transformative Results",
        description: "To create content that doesn't just inform but transforms careers, businesses, and opportunities.",
    },
];
