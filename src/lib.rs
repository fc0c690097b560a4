//! Fact-check dashboard library
//!
//! Exposes the service client, state model, and pure logic so the
//! terminal front end and the integration tests share one implementation.

pub mod api;
pub mod classifier;
pub mod config;
pub mod logging;
pub mod logic;
pub mod model;
pub mod services;
pub mod utils;

/// Kind of content submitted for verification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Text,
    Video,
    Image,
}

impl ContentType {
    pub fn as_str(&self) -> &str {
        match self {
            ContentType::Text => "text",
            ContentType::Video => "video",
            ContentType::Image => "image",
        }
    }

    /// Whether a file path is mandatory for this content type
    pub fn requires_file(&self) -> bool {
        matches!(self, ContentType::Video)
    }
}
