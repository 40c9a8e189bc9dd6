//! Input-layer checks run before a submission is handed to the relay.
//!
//! The relay itself never validates: these only decide whether Enter on the
//! message field emits a submit or a hint.

use crate::relay::ContactFields;

use super::Field;

/// Why the form refused to submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invalid {
    pub field: Field,
    pub reason: &'static str,
}

pub fn validate(fields: &ContactFields) -> Result<(), Invalid> {
    if fields.name.trim().is_empty() {
        return Err(Invalid {
            field: Field::Name,
            reason: "Please fill in your name.",
        });
    }
    if fields.email.trim().is_empty() {
        return Err(Invalid {
            field: Field::Email,
            reason: "Please fill in your email.",
        });
    }
    if !is_valid_email(fields.email.trim()) {
        return Err(Invalid {
            field: Field::Email,
            reason: "Please enter a valid email address.",
        });
    }
    if fields.message.trim().is_empty() {
        return Err(Invalid {
            field: Field::Message,
            reason: "Please write a message.",
        });
    }
    Ok(())
}

/// `local@domain.tld` with no whitespace and non-empty labels.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}
