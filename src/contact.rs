use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONTACT_INBOX: &str = "dipeshsonitech@gmail.com";

#[cfg(feature = "ssr")]
const EMAIL_API_URL: &str = "https://api.resend.com/emails";

// Shape check only: local@domain.tld with a 2+ letter tld.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[A-Za-z]{2,}$").expect("email pattern should compile")
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Honeypot. The field is hidden in the UI, so any content means a bot
    /// filled the form.
    #[serde(default)]
    pub company: String,
}

impl ContactForm {
    pub fn is_honeypot(&self) -> bool {
        !self.company.trim().is_empty()
    }

    /// All fields are required non-empty after trimming; the email must
    /// look like `local@domain.tld`.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        if self.name.trim().is_empty() {
            errors.name = Some("Name is required".to_string());
        }
        let email = self.email.trim();
        if email.is_empty() {
            errors.email = Some("Email is required".to_string());
        } else if !EMAIL_RE.is_match(email) {
            errors.email = Some("Enter a valid email address".to_string());
        }
        if self.subject.trim().is_empty() {
            errors.subject = Some("Subject is required".to_string());
        }
        if self.message.trim().is_empty() {
            errors.message = Some("Message is required".to_string());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Per-field validation messages, surfaced inline next to each input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.subject.is_none()
            && self.message.is_none()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields = Vec::new();
        if self.name.is_some() {
            fields.push("name");
        }
        if self.email.is_some() {
            fields.push("email");
        }
        if self.subject.is_some() {
            fields.push("subject");
        }
        if self.message.is_some() {
            fields.push("message");
        }
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

#[derive(Error, Debug, Clone)]
pub enum ContactError {
    #[error("{0}")]
    Invalid(FieldErrors),
    #[error("failed to send message")]
    SendFailed,
}

#[cfg(any(feature = "ssr", test))]
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(any(feature = "ssr", test))]
fn email_body(form: &ContactForm) -> String {
    format!(
        "<h3>New Message from Portfolio</h3>\
         <p><strong>Name:</strong> {}</p>\
         <p><strong>Email:</strong> {}</p>\
         <p><strong>Subject:</strong> {}</p>\
         <p><strong>Message:</strong></p>\
         <p>{}</p>",
        escape_html(&form.name),
        escape_html(&form.email),
        escape_html(&form.subject),
        escape_html(&form.message),
    )
}

/// Forwards a validated submission to the transactional email API. With no
/// API key configured the submission is logged and reported as sent, so
/// local development works without credentials.
#[cfg(feature = "ssr")]
pub async fn forward_submission(form: &ContactForm) -> Result<(), ContactError> {
    let Ok(api_key) = std::env::var("RESEND_API_KEY") else {
        tracing::info!(
            name = %form.name,
            email = %form.email,
            subject = %form.subject,
            "RESEND_API_KEY not set; logging contact submission instead of sending"
        );
        return Ok(());
    };

    let payload = serde_json::json!({
        "from": "Portfolio Contact Form <onboarding@resend.dev>",
        "to": CONTACT_INBOX,
        "reply_to": form.email,
        "subject": format!("New Contact: {}", form.subject),
        "html": email_body(form),
    });

    let response = reqwest::Client::new()
        .post(EMAIL_API_URL)
        .bearer_auth(api_key)
        .json(&payload)
        .send()
        .await
        .map_err(|err| {
            tracing::error!("email API request failed: {err}");
            ContactError::SendFailed
        })?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        tracing::error!(%status, "email API rejected submission: {body}");
        return Err(ContactError::SendFailed);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Collaboration".to_string(),
            message: "I have a project in mind.".to_string(),
            company: String::new(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn test_missing_fields_are_reported_per_field() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert!(errors.name.is_some());
        assert!(errors.email.is_some());
        assert!(errors.subject.is_some());
        assert!(errors.message.is_some());
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let mut form = valid_form();
        form.message = "   \n\t ".to_string();
        let errors = form.validate().unwrap_err();
        assert!(errors.message.is_some());
        assert!(errors.name.is_none());
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        for email in ["not-an-email", "a@b", "a@b.c", "two words@example.com", "@example.com"] {
            let mut form = valid_form();
            form.email = email.to_string();
            let errors = form.validate().unwrap_err();
            assert!(errors.email.is_some(), "{email} should be rejected");
        }
    }

    #[test]
    fn test_email_with_surrounding_whitespace_is_accepted() {
        let mut form = valid_form();
        form.email = "  ada@example.com  ".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_honeypot_detection() {
        let mut form = valid_form();
        assert!(!form.is_honeypot());
        form.company = "Bots Inc".to_string();
        assert!(form.is_honeypot());
    }

    #[test]
    fn test_email_body_escapes_user_input() {
        let mut form = valid_form();
        form.message = "<script>alert('hi')</script>".to_string();
        let body = email_body(&form);
        assert!(!body.contains("<script>"));
        assert!(body.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_field_errors_display_lists_fields() {
        let errors = ContactForm::default().validate().unwrap_err();
        let rendered = errors.to_string();
        assert!(rendered.contains("name"));
        assert!(rendered.contains("message"));
    }
}
