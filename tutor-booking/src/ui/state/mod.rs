pub mod contact_form_state;

pub use contact_form_state::{ContactField, ContactFormState, InputKind};
