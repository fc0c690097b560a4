//! Shared model types

use chrono::{DateTime, Local};
use std::path::PathBuf;

use crate::ContentType;

/// Unified, normalized outcome of one fact-check
#[derive(Clone, Debug, PartialEq)]
pub struct FactCheckResult {
    pub query: String,
    /// Verdict: true means the claim (or video) checked out
    pub result: bool,
    /// Nominal range 0-100
    pub confidence: f64,
    pub content_type: ContentType,
    pub source: Option<String>,
    pub reason_to_trust: Option<String>,
    /// Image path only
    pub content_verification: Option<bool>,
    /// Image path only
    pub deepfake_detection: Option<bool>,
    pub checked_at: DateTime<Local>,
}

/// One bar of the tag distribution chart
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagCount {
    pub tag: String,
    pub count: u64,
}

/// A submission as collected from the input panel
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub query: String,
    pub content_type: ContentType,
    pub file: Option<PathBuf>,
}

impl Submission {
    pub fn text(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            content_type: ContentType::Text,
            file: None,
        }
    }

    pub fn video(query: impl Into<String>, file: Option<PathBuf>) -> Self {
        Self {
            query: query.into(),
            content_type: ContentType::Video,
            file,
        }
    }

    pub fn image(query: impl Into<String>, file: Option<PathBuf>) -> Self {
        Self {
            query: query.into(),
            content_type: ContentType::Image,
            file,
        }
    }
}

/// Successful submission payload: the record plus the tag to count, if any
#[derive(Clone, Debug, PartialEq)]
pub struct Verified {
    pub result: FactCheckResult,
    pub tag: Option<String>,
}

/// Which input field has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Query,
    FilePath,
}
