//! Contact form validation and `mailto:` composition.
//!
//! There is no backend: a valid form opens the visitor's mail client with
//! the message prefilled.

use std::sync::LazyLock;

use regex::Regex;

use super::error::ContactError;
use crate::config::contact::{EMAIL, MAX_MESSAGE_LEN, MIN_MESSAGE_LEN};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").expect("email pattern is valid")
});

/// Raw form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl ContactForm {
    /// Every problem with the form, in field order. Empty when valid.
    pub fn validate(&self) -> Vec<ContactError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(ContactError::MissingName);
        }
        if !EMAIL_RE.is_match(self.email.trim()) {
            errors.push(ContactError::InvalidEmail);
        }
        let len = self.message.trim().chars().count();
        if len < MIN_MESSAGE_LEN {
            errors.push(ContactError::MessageTooShort(MIN_MESSAGE_LEN));
        } else if len > MAX_MESSAGE_LEN {
            errors.push(ContactError::MessageTooLong(MAX_MESSAGE_LEN));
        }
        errors
    }

    /// `mailto:` link carrying the form, or the validation errors.
    pub fn mailto(&self) -> Result<String, Vec<ContactError>> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        let name = self.name.trim();
        let company = self.company.trim();
        let subject = if company.is_empty() {
            format!("Project enquiry from {}", name)
        } else {
            format!("Project enquiry from {} ({})", name, company)
        };
        let body = format!(
            "{}\n\n-- \n{}\n{}",
            self.message.trim(),
            name,
            self.email.trim()
        );

        Ok(format!(
            "mailto:{}?subject={}&body={}",
            EMAIL,
            urlencoding::encode(&subject),
            urlencoding::encode(&body)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactForm {
        ContactForm {
            name: "Asha".to_string(),
            email: "asha@example.in".to_string(),
            company: String::new(),
            message: "We need a delivery app.".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(valid().validate().is_empty());
    }

    #[test]
    fn test_collects_all_errors() {
        let form = ContactForm {
            name: "  ".to_string(),
            email: "not-an-email".to_string(),
            company: String::new(),
            message: "hi".to_string(),
        };
        assert_eq!(
            form.validate(),
            vec![
                ContactError::MissingName,
                ContactError::InvalidEmail,
                ContactError::MessageTooShort(MIN_MESSAGE_LEN),
            ]
        );
    }

    #[test]
    fn test_email_shapes() {
        for bad in ["a@b", "a b@c.com", "@c.com", "a@c.o"] {
            let form = ContactForm {
                email: bad.to_string(),
                ..valid()
            };
            assert_eq!(form.validate(), vec![ContactError::InvalidEmail], "{}", bad);
        }
    }

    #[test]
    fn test_message_too_long() {
        let form = ContactForm {
            message: "x".repeat(MAX_MESSAGE_LEN + 1),
            ..valid()
        };
        assert_eq!(
            form.validate(),
            vec![ContactError::MessageTooLong(MAX_MESSAGE_LEN)]
        );
    }

    #[test]
    fn test_mailto_encodes_fields() {
        let form = ContactForm {
            company: "Bihar Eats".to_string(),
            ..valid()
        };
        let url = form.mailto().unwrap();
        assert!(url.starts_with(&format!("mailto:{}?subject=", EMAIL)));
        assert!(url.contains("Project%20enquiry%20from%20Asha%20%28Bihar%20Eats%29"));
        assert!(url.contains("&body=We%20need%20a%20delivery%20app."));
        assert!(!url.contains(' '));
    }

    #[test]
    fn test_mailto_rejects_invalid() {
        let form = ContactForm {
            name: String::new(),
            ..valid()
        };
        assert_eq!(form.mailto(), Err(vec![ContactError::MissingName]));
    }
}
