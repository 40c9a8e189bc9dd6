use serde::{Deserialize, Serialize};

/// Hidden `_subject` field sent with every submission.
pub const FORM_SUBJECT: &str = "New message from portfolio website";

/// The three user-editable fields of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    /// Empties every field (form reset after a successful send).
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

/// The form-encoded body posted to the endpoint.
///
/// Field order matches the form: `name`, `email`, `message`, `_subject`.
/// The email is sent trimmed, the same value validation checked.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(rename = "_subject")]
    pub subject: String,
}

impl From<ContactFields> for ContactSubmission {
    fn from(fields: ContactFields) -> Self {
        Self {
            name: fields.name,
            email: fields.email.trim().to_string(),
            message: fields.message,
            subject: FORM_SUBJECT.to_string(),
        }
    }
}

/// JSON acknowledgment returned by Formspree on acceptance (`{"ok": true, "next": "..."}`).
#[derive(Deserialize, Debug, Default)]
pub struct Acknowledgment {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub next: Option<String>,
}

/// JSON error payload returned on rejection.
///
/// ```text
/// {"error": "Validation errors", "errors": [{"field": "email", "message": "should be an email"}]}
/// ```
#[derive(Deserialize, Debug, Default)]
pub struct RejectionBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub errors: Vec<FieldRejection>,
}

#[derive(Deserialize, Debug)]
pub struct FieldRejection {
    #[serde(default)]
    pub field: Option<String>,
    pub message: String,
}

impl RejectionBody {
    /// One-line summary for logs: the top-level error followed by per-field messages.
    pub fn summary(&self) -> Option<String> {
        let details: Vec<String> = self
            .errors
            .iter()
            .map(|e| match &e.field {
                Some(field) => format!("{field}: {}", e.message),
                None => e.message.clone(),
            })
            .collect();

        match (&self.error, details.is_empty()) {
            (Some(error), true) => Some(error.clone()),
            (Some(error), false) => Some(format!("{error} ({})", details.join("; "))),
            (None, false) => Some(details.join("; ")),
            (None, true) => None,
        }
    }
}
