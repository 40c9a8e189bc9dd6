//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::core::scroll::DEFAULT_SCROLL_THRESHOLD;
use crate::core::state::Page;
use crate::relay::{ContactSubmission, FormEndpoint, RelayError};

/// An endpoint that accepts everything and counts deliveries.
#[derive(Default)]
pub struct NoopEndpoint {
    pub deliveries: AtomicUsize,
}

#[async_trait]
impl FormEndpoint for NoopEndpoint {
    fn name(&self) -> &str {
        "noop"
    }

    async fn deliver(&self, _submission: &ContactSubmission) -> Result<(), RelayError> {
        self.deliveries.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Creates a test Page with a NoopEndpoint and the default threshold.
pub fn test_page() -> Page {
    Page::new(Arc::new(NoopEndpoint::default()), DEFAULT_SCROLL_THRESHOLD)
}
