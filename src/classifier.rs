//! Image classification capability
//!
//! Image checks have no backing service yet. The dashboard depends on this
//! trait so a real classifier can be plugged in without touching the
//! submission path, and tests can supply a deterministic one.

use async_trait::async_trait;
use std::path::Path;

use crate::logic::errors::SubmitError;

/// Outcome of classifying an image submission
#[derive(Debug, Clone, PartialEq)]
pub struct ImageVerdict {
    pub result: bool,
    pub confidence: f64,
    pub content_verification: bool,
    pub deepfake_detection: bool,
}

#[async_trait]
pub trait ImageClassifier: Send + Sync {
    async fn classify(&self, query: &str, file: Option<&Path>) -> Result<ImageVerdict, SubmitError>;
}

/// Default classifier: reports the capability as missing
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableImageClassifier;

#[async_trait]
impl ImageClassifier for UnavailableImageClassifier {
    async fn classify(&self, _query: &str, _file: Option<&Path>) -> Result<ImageVerdict, SubmitError> {
        Err(SubmitError::NotImplemented("image verification".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unavailable_classifier_reports_not_implemented() {
        let result = UnavailableImageClassifier.classify("a cat", None).await;
        assert_eq!(
            result,
            Err(SubmitError::NotImplemented("image verification".to_string()))
        );
    }
}
