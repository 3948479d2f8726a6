use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use serde::Serialize;
use thiserror::Error;

use crate::content::CONTACT_SERVICE_OPTIONS;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in your {0}.")]
    MissingField(&'static str),
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("\"{0}\" is not a service we offer.")]
    UnknownService(String),
    #[error("Could not reach the server: {0}")]
    Network(String),
    #[error("The server rejected the message (status {0}).")]
    Rejected(u16),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactTransport {
    /// Waits, then reports success without sending anything.
    Simulated { delay_ms: u32 },
    /// POSTs the request as JSON.
    Http { endpoint: String },
}

impl ContactRequest {
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(ContactError::MissingField("email"));
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        if self.service.trim().is_empty() {
            return Err(ContactError::MissingField("service"));
        }
        if !CONTACT_SERVICE_OPTIONS.contains(&self.service.as_str()) {
            return Err(ContactError::UnknownService(self.service.clone()));
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingField("message"));
        }
        Ok(())
    }

    /// Copy with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> ContactRequest {
        ContactRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            service: self.service.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && tld.len() >= 2,
        None => false,
    }
}

pub async fn submit(transport: &ContactTransport, request: &ContactRequest) -> Result<(), ContactError> {
    let request = request.trimmed();
    request.validate()?;

    match transport {
        ContactTransport::Simulated { delay_ms } => {
            TimeoutFuture::new(*delay_ms).await;
            info!("Simulated contact submission for {}", request.service);
            Ok(())
        }
        ContactTransport::Http { endpoint } => {
            let response = Request::post(endpoint)
                .json(&request)
                .map_err(|e| ContactError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ContactError::Network(e.to_string()))?;

            if response.ok() {
                info!("Contact message accepted by {}", endpoint);
                Ok(())
            } else {
                warn!("Contact endpoint {} answered {}", endpoint, response.status());
                Err(ContactError::Rejected(response.status()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactRequest {
        ContactRequest {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            service: "Resume Writing".to_string(),
            message: "I need a resume for a product role.".to_string(),
        }
    }

    #[test]
    fn accepts_complete_request() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn rejects_blank_fields() {
        let mut request = filled();
        request.name = "   ".to_string();
        assert_eq!(request.validate(), Err(ContactError::MissingField("name")));

        let mut request = filled();
        request.message = "\n".to_string();
        assert_eq!(request.validate(), Err(ContactError::MissingField("message")));

        let mut request = filled();
        request.service.clear();
        assert_eq!(request.validate(), Err(ContactError::MissingField("service")));
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["john", "john@", "@example.com", "john@example", "jo hn@example.com", "a@b@c.com", "john@.com"] {
            let mut request = filled();
            request.email = email.to_string();
            assert_eq!(request.validate(), Err(ContactError::InvalidEmail), "{email}");
        }
    }

    #[test]
    fn rejects_unknown_service() {
        let mut request = filled();
        request.service = "Ghostwriting".to_string();
        assert_eq!(
            request.validate(),
            Err(ContactError::UnknownService("Ghostwriting".to_string()))
        );
    }

    #[test]
    fn trimmed_request_validates() {
        let mut request = filled();
        request.email = "  john@example.com ".to_string();
        request.service = " Other ".to_string();
        let trimmed = request.trimmed();
        assert_eq!(trimmed.email, "john@example.com");
        assert_eq!(trimmed.validate(), Ok(()));
    }

    #[test]
    fn serializes_exactly_four_fields() {
        let value = serde_json::to_value(filled()).expect("serializable");
        let object = value.as_object().expect("json object");
        assert_eq!(object.len(), 4);
        assert_eq!(object["name"], "John Doe");
        assert_eq!(object["email"], "john@example.com");
        assert_eq!(object["service"], "Resume Writing");
        assert!(object.contains_key("message"));
    }

    #[test]
    fn errors_read_as_user_messages() {
        assert_eq!(ContactError::MissingField("email").to_string(), "Please fill in your email.");
        assert_eq!(
            ContactError::Rejected(502).to_string(),
            "The server rejected the message (status 502)."
        );
    }
}
