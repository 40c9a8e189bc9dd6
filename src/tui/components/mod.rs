//! # TUI Components
//!
//! Every piece of the page that draws something.
//!
//! ## Component Architecture
//!
//! Components follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `NavBar`: top row with the brand, inline links and the menu toggle
//! - `SectionCard`: one bordered block of the page
//! - `ScrollTop`: the floating "back to top" control
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components whose state persists in `TuiState` and are wrapped per frame:
//! - `MenuPanel` / `MenuPanelState`: the collapsible navigation overlay
//! - `PageBody` / `PageBodyState`: the scrollable document
//! - `ContactFormEditor` / `ContactFormState`: focus and editing of the form
//!
//! ### Props-Based Data Flow
//!
//! Components receive page data as props, never by reaching into `Page`
//! themselves:
//!
//! ```rust,ignore
//! // Dependencies are explicit
//! PageBody::new(&mut tui.body, &page.form, page.submission, focus, hint).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── nav_bar.rs        (brand, inline links, menu toggle)
//! ├── menu_panel.rs     (navigation overlay)
//! ├── section_card.rs   (card widget + page content)
//! ├── page_body.rs      (scroll canvas, jump targets, hit testing)
//! ├── scroll_top.rs     (back-to-top control)
//! └── contact_form/     (fields, validation, submit button, feedback)
//! ```

pub mod contact_form;
pub mod menu_panel;
pub mod nav_bar;
pub mod page_body;
pub mod scroll_top;
pub mod section_card;

pub use contact_form::{ContactFormEditor, ContactFormState, Field, FormEvent};
pub use menu_panel::{MenuEntry, MenuEvent, MenuPanel, MenuPanelState};
pub use nav_bar::NavBar;
pub use page_body::{BodyHit, PageBody, PageBodyState};
pub use scroll_top::ScrollTop;
