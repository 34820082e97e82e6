//! Form validation and submission flow for the Alphaseam corporate site
//!
//! Owns the contact and job application forms: field-by-field validation,
//! per-field error state, the submit lifecycle, and transient notifications,
//! backed by a pluggable mail-relay client.

pub mod config;
pub mod content;
pub mod error;
pub mod notify;
pub mod relay;
pub mod state;
pub mod validate;
