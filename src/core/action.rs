//! # Actions
//!
//! Everything that can happen on the page becomes an `Action`.
//! User presses `m`? That's `Action::ToggleMenu`.
//! The form endpoint answers? That's `Action::SubmissionResolved(result)`.
//!
//! The `update()` function applies an action to the page state and returns
//! an `Effect` describing any I/O the adapter must perform. No side effects
//! here. I/O happens elsewhere.
//!
//! ```text
//! Page + Action  →  update()  →  Page' + Effect
//! ```

use log::{debug, info, warn};

use crate::core::nav::Section;
use crate::core::profile::PROFILE;
use crate::core::state::Page;
use crate::relay::{ContactFields, ContactSubmission, RelayError};

/// Links that leave the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalLink {
    Resume,
    GitHub,
    LinkedIn,
    Email,
}

#[derive(Debug)]
pub enum Action {
    ToggleMenu,
    /// A navigation target was chosen (menu entry, nav bar, or shortcut).
    SelectLink(Section),
    /// The viewport reported a new vertical offset.
    Scrolled(u32),
    ScrollToTop,
    /// The form fields were edited.
    EditForm(ContactFields),
    Submit,
    SubmissionResolved(Result<(), RelayError>),
    OpenLink(ExternalLink),
    /// Opening an external link failed in the adapter.
    LinkFailed(String),
    Quit,
}

/// I/O requested by `update()`, carried out by the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    JumpTo(Section),
    ScrollToTop,
    /// Send exactly one request to the form endpoint.
    Deliver(ContactSubmission),
    Open(String),
}

pub fn update(page: &mut Page, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::ToggleMenu => {
            page.notice = None;
            page.menu.toggle();
            Effect::None
        }
        Action::SelectLink(section) => {
            page.notice = None;
            page.menu.select_link();
            Effect::JumpTo(section)
        }
        Action::Scrolled(offset) => {
            page.scroll.observe(offset);
            Effect::None
        }
        Action::ScrollToTop => Effect::ScrollToTop,
        Action::EditForm(fields) => {
            page.form = fields;
            Effect::None
        }
        Action::Submit => {
            if !page.submission.begin() {
                debug!("Submit ignored: a submission is already in flight");
                return Effect::None;
            }
            info!("Contact submission started");
            Effect::Deliver(ContactSubmission::from(page.form.clone()))
        }
        Action::SubmissionResolved(result) => {
            if !page.in_flight() {
                warn!("Submission outcome arrived with nothing in flight; ignoring");
                return Effect::None;
            }
            match result {
                Ok(()) => {
                    info!("Contact submission succeeded; clearing form");
                    page.form.clear();
                    page.submission.resolve(true);
                }
                Err(e) => {
                    warn!("Contact submission failed: {}", e);
                    page.submission.resolve(false);
                }
            }
            Effect::None
        }
        Action::OpenLink(link) => {
            page.notice = None;
            let target = match link {
                ExternalLink::Resume => match &page.resume {
                    Some(resume) => resume.clone(),
                    None => {
                        page.notice = Some(
                            "No resume configured: pass --resume or set [assets] resume in config.toml"
                                .to_string(),
                        );
                        return Effect::None;
                    }
                },
                ExternalLink::GitHub => PROFILE.github.to_string(),
                ExternalLink::LinkedIn => PROFILE.linkedin.to_string(),
                ExternalLink::Email => PROFILE.mailto(),
            };
            Effect::Open(target)
        }
        Action::LinkFailed(message) => {
            page.notice = Some(message);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
