//! Contact rules shared by the FortiSecure site and its API server.
//!
//! Both sides validate with the same schema so a submission accepted in the
//! browser is never rejected by the server for a rule the visitor was not shown.

pub mod contact;
pub mod whatsapp;

pub use contact::{
    trim_input, validate, ContactInput, ContactSubmission, Field, FieldError, FieldErrorKind,
    ValidationErrors, ValidationFailure,
};
pub use whatsapp::{DeepLink, WhatsAppChannel};

pub const COMPANY_NAME: &str = "FortiSecure";

/// How long the API waits on its relay before answering 502.
pub const DEFAULT_RELAY_TIMEOUT_SECS: u64 = 10;
