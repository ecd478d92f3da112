//! Email notification of a saved design through an HTTP form relay.

pub mod client;
pub mod error;
pub mod form;

pub use client::NotifyClient;
pub use error::NotifyError;
pub use form::{build_form_fields, FormField, Submission};
