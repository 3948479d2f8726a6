//! Static site content. Everything here is immutable and lives for the whole
//! program; components borrow it as `&'static`.

pub mod company;
pub mod pricing;
pub mod services;
pub mod testimonials;
pub mod writing;

pub use pricing::{PricingPlan, PRICING_PLANS};
pub use services::{
    find_service, selectable_service, Service, CONTACT_SERVICE_OPTIONS, SERVICES,
};
pub use testimonials::{Testimonial, TESTIMONIALS};
pub use writing::{WritingService, WRITING_SERVICES};
