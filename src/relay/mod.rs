pub mod endpoint;
pub mod formspree;
pub mod types;

pub use endpoint::{FormEndpoint, RelayError};
pub use formspree::FormspreeEndpoint;
pub use types::{ContactFields, ContactSubmission, FORM_SUBJECT};
