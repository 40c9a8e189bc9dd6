//! # Core Page Logic
//!
//! This module contains the page's interaction controller.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Page (state)         │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │   Relay    │
//!             │  Adapter   │          │ (reqwest)  │
//!             │ (ratatui)  │          │            │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `Page` struct, all controller state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`nav`]: Navigation targets and the menu flag
//! - [`scroll`]: Scroll tracker and the scoped scroll subscription
//! - [`submission`]: Contact form submission state machine
//! - [`profile`]: Page content
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod nav;
pub mod profile;
pub mod scroll;
pub mod state;
pub mod submission;
