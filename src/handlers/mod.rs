//! Event Handlers
//!
//! - api: Submission responses from the background worker
//! - keyboard: User keyboard input

pub mod api;
pub mod keyboard;

pub use api::handle_submit_response;
pub use keyboard::handle_key;
