//! # Page State
//!
//! Core state for one page view. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! Page
//! ├── endpoint: Arc<dyn FormEndpoint>  // where contact submissions go
//! ├── menu: MenuState                  // collapsible navigation panel
//! ├── scroll: ScrollTracker            // "scroll to top" visibility
//! ├── submission: SubmissionPhase      // Idle / Submitting / Succeeded / Failed
//! ├── form: ContactFields              // current form values
//! ├── resume: Option<String>           // downloadable resume (path or URL)
//! └── notice: Option<String>           // transient status line text
//! ```
//!
//! The three behaviours share nothing: menu, scroll and submission each
//! change only through their own actions in `update()` (action.rs).

use std::sync::Arc;

use crate::core::config::ResolvedConfig;
use crate::core::nav::MenuState;
use crate::core::scroll::ScrollTracker;
use crate::core::submission::{SubmissionPhase, SubmissionStatus};
use crate::relay::{ContactFields, FormEndpoint};

pub struct Page {
    pub endpoint: Arc<dyn FormEndpoint>,
    pub menu: MenuState,
    pub scroll: ScrollTracker,
    pub submission: SubmissionPhase,
    pub form: ContactFields,
    pub resume: Option<String>,
    pub notice: Option<String>,
}

impl Page {
    pub fn new(endpoint: Arc<dyn FormEndpoint>, scroll_threshold: u32) -> Self {
        Self {
            endpoint,
            menu: MenuState::new(),
            scroll: ScrollTracker::new(scroll_threshold),
            submission: SubmissionPhase::Idle,
            form: ContactFields::default(),
            resume: None,
            notice: None,
        }
    }

    pub fn from_config(endpoint: Arc<dyn FormEndpoint>, config: &ResolvedConfig) -> Self {
        let mut page = Self::new(endpoint, config.scroll_threshold);
        page.resume = config.resume.clone();
        page
    }

    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn show_scroll_top(&self) -> bool {
        self.scroll.past_threshold()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.submission.status()
    }

    pub fn in_flight(&self) -> bool {
        self.submission.in_flight()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_page;

    #[test]
    fn test_page_new_defaults() {
        let page = test_page();
        assert!(!page.menu_open());
        assert!(!page.show_scroll_top());
        assert_eq!(page.status(), SubmissionStatus::None);
        assert!(!page.in_flight());
        assert!(page.form.is_empty());
        assert!(page.notice.is_none());
    }

    #[test]
    fn test_from_config_carries_threshold_and_resume() {
        let config = ResolvedConfig {
            scroll_threshold: 32,
            resume: Some("resume.pdf".to_string()),
            ..Default::default()
        };
        let page = Page::from_config(test_page().endpoint, &config);
        assert_eq!(page.scroll.threshold(), 32);
        assert_eq!(page.resume.as_deref(), Some("resume.pdf"));
    }
}
