//! Contact form submission as a `mailto:` link.
//!
//! The page has no backend: submitting the form opens the visitor's mail
//! client with the subject and body prefilled.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::config::ContactConfig;

/// Contact form fields as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Build from raw field values, trimming surrounding whitespace.
    #[must_use]
    pub fn from_fields(name: &str, subject: &str, message: &str) -> Self {
        Self { name: name.trim().to_owned(), subject: subject.trim().to_owned(), message: message.trim().to_owned() }
    }

    /// Plain-text mail body, signed with the configured footer.
    #[must_use]
    pub fn body(&self, footer: &str) -> String {
        format!("From: {}\n\n{}\n\n---\n{footer}", self.name, self.message)
    }

    /// Full `mailto:` URL with percent-encoded subject and body.
    #[must_use]
    pub fn mailto_link(&self, config: &ContactConfig) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            config.email_to,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body(&config.footer)),
        )
    }
}
