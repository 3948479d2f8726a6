use crate::contact::ContactTransport;

pub const CONTACT_EMAIL: &str = "hello@writeelite.com";
pub const WHATSAPP_URL: &str = "https://wa.me/1234567890";
pub const WHATSAPP_DISPLAY: &str = "+1 (234) 567-890";
pub const LOCATION: &str = "Available Worldwide (Remote)";

pub const TESTIMONIAL_INTERVAL_MS: u64 = 5000;
pub const LAZY_ROOT_MARGIN_PX: u32 = 200;
pub const TOAST_DURATION_MS: u32 = 4000;
pub const SIMULATED_SUBMIT_DELAY_MS: u32 = 1500;
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;

#[cfg(debug_assertions)]
pub fn get_log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> log::Level {
    log::Level::Info
}

/// Where contact form submissions go.
///
/// Set `CONTACT_ENDPOINT` at build time to post to a real endpoint; without
/// it submissions are simulated.
pub fn contact_transport() -> ContactTransport {
    match option_env!("CONTACT_ENDPOINT") {
        Some(endpoint) if !endpoint.trim().is_empty() => ContactTransport::Http {
            endpoint: endpoint.trim().to_string(),
        },
        _ => ContactTransport::Simulated {
            delay_ms: SIMULATED_SUBMIT_DELAY_MS,
        },
    }
}

pub fn mailto(subject: &str) -> String {
    format!("mailto:{}?subject={}", CONTACT_EMAIL, urlencoding::encode(subject))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_encodes_subject() {
        assert_eq!(
            mailto("Project & pricing"),
            "mailto:hello@writeelite.com?subject=Project%20%26%20pricing"
        );
    }
}
