#[derive(Clone, Debug, PartialEq)]
pub struct PlanDetails {
    pub ideal_for: &'static str,
    pub turnaround: &'static str,
    pub support: &'static str,
    pub extras: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PricingPlan {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub not_included: &'static [&'static str],
    pub popular: bool,
    pub details: PlanDetails,
}

pub static PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "Basic",
        price: "$49",
        period: "per project",
        description: "Perfect for individuals needing quick, quality content",
        features: &[
            "1 revision round",
            "3-5 day delivery",
            "Email support",
            "Basic formatting",
            "Up to 1,000 words",
        ],
        not_included: &["Rush delivery", "SEO optimization", "Plagiarism report"],
        popular: false,
        details: PlanDetails {
            ideal_for: "Students, individuals, and one-time projects",
            turnaround: "3-5 business days",
            support: "Email support with 24-48 hour response time",
            extras: "Additional revisions available at $15 each",
        },
    },
    PricingPlan {
        name: "Standard",
        price: "$99",
        period: "per project",
        description: "Most popular choice for professionals and businesses",
        features: &[
            "3 revision rounds",
            "2-3 day delivery",
            "Priority email support",
            "SEO optimization",
            "Up to 2,500 words",
            "Plagiarism report",
        ],
        not_included: &["Rush delivery"],
        popular: true,
        details: PlanDetails {
            ideal_for: "Professionals, businesses, and quality-focused clients",
            turnaround: "2-3 business days",
            support: "Priority email support with same-day response",
            extras: "Includes basic SEO optimization and Copyscape report",
        },
    },
    PricingPlan {
        name: "Premium",
        price: "$199",
        period: "per project",
        description: "Comprehensive solution for high-stakes projects",
        features: &[
            "Unlimited revisions",
            "24-hour rush available",
            "Dedicated support",
            "Advanced SEO",
            "Up to 5,000 words",
            "Plagiarism report",
            "Consultation call",
            "Brand voice guide",
        ],
        not_included: &[],
        popular: false,
        details: PlanDetails {
            ideal_for: "Businesses, executives, and critical projects",
            turnaround: "1-2 business days (24h rush available)",
            support: "Dedicated support with WhatsApp/phone access",
            extras: "Includes 30-min consultation, brand voice guide, and priority queue",
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_plan_is_popular() {
        let popular: Vec<_> = PRICING_PLANS.iter().filter(|plan| plan.popular).collect();
        assert_eq!(popular.len(), 1);
        assert_eq!(popular[0].name, "Standard");
    }

    #[test]
    fn features_and_exclusions_do_not_overlap() {
        for plan in PRICING_PLANS {
            for missing in plan.not_included {
                assert!(!plan.features.contains(missing), "{} lists {} twice", plan.name, missing);
            }
        }
    }
}
