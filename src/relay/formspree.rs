//! Formspree endpoint: form-encoded POST, JSON acknowledgment.
//!
//! Formspree answers `Accept: application/json` requests with a small JSON
//! body instead of redirecting to its thank-you page. Any 2xx status is
//! treated as acceptance whether or not that body parses.

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::header::ACCEPT;

use super::endpoint::{FormEndpoint, RelayError};
use super::types::{Acknowledgment, ContactSubmission, RejectionBody};

pub struct FormspreeEndpoint {
    url: String,
    client: reqwest::Client,
}

impl FormspreeEndpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl FormEndpoint for FormspreeEndpoint {
    fn name(&self) -> &str {
        "formspree"
    }

    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), RelayError> {
        info!(
            "Relaying contact submission to {} (message_len={})",
            self.url,
            submission.message.len()
        );

        let response = self
            .client
            .post(&self.url)
            .header(ACCEPT, "application/json")
            .form(submission)
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        let status = response.status();
        debug!("Form endpoint response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<RejectionBody>(&body)
                .ok()
                .and_then(|b| b.summary())
                .unwrap_or_else(|| {
                    if body.trim().is_empty() {
                        status.canonical_reason().unwrap_or("unknown error").to_string()
                    } else {
                        body
                    }
                });
            warn!("Form endpoint rejected submission: {} - {}", status, message);
            return Err(RelayError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        match response.json::<Acknowledgment>().await {
            Ok(ack) => debug!("Acknowledgment: ok={}, next={:?}", ack.ok, ack.next),
            Err(e) => debug!("Acknowledgment body was not JSON: {}", e),
        }
        info!("Contact submission accepted");
        Ok(())
    }
}
