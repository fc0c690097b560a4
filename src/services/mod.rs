//! External Services
//!
//! - api: submission worker that talks to the verification service

pub mod api;

pub use api::{spawn_submit_service, SubmitRequest, SubmitResponse};
