//! Response normalization
//!
//! Maps the heterogeneous service answers onto one `FactCheckResult`.

use chrono::Local;

use crate::api::{DeepfakeVerdict, TextVerdict};
use crate::classifier::ImageVerdict;
use crate::model::types::{FactCheckResult, Verified};
use crate::ContentType;

/// Reason string that marks an answer as sourced from the knowledge graph
pub const KNOWLEDGE_GRAPH_REASON: &str = "Retrieved from knowledge graph";

/// Attribution attached to every text result
pub const TEXT_SOURCE: &str = "https://example.com/fact-check";

pub const VIDEO_SOURCE: &str = "Deepfake Model";
pub const VIDEO_REASON: &str = "Deepfake detection";

/// Label the deepfake model uses for authentic footage (case-sensitive)
pub const REAL_LABEL: &str = "Real";

/// Knowledge-graph answers are trusted outright
pub fn apply_trust_override(confidence: f64, reason_to_trust: &str) -> f64 {
    if reason_to_trust == KNOWLEDGE_GRAPH_REASON {
        100.0
    } else {
        confidence
    }
}

/// Normalize a text answer; the tag is the first classification label, if any
pub fn text_result(query: &str, verdict: TextVerdict) -> Verified {
    let confidence = apply_trust_override(verdict.confidence, &verdict.reason_to_trust);
    let tag = verdict.tags.into_iter().next();

    Verified {
        result: FactCheckResult {
            query: query.to_string(),
            result: verdict.verdict,
            confidence,
            content_type: ContentType::Text,
            source: Some(TEXT_SOURCE.to_string()),
            reason_to_trust: Some(verdict.reason_to_trust),
            content_verification: None,
            deepfake_detection: None,
            checked_at: Local::now(),
        },
        tag,
    }
}

pub fn video_result(query: &str, verdict: DeepfakeVerdict) -> Verified {
    Verified {
        result: FactCheckResult {
            query: query.to_string(),
            result: verdict.label == REAL_LABEL,
            confidence: verdict.probability * 100.0,
            content_type: ContentType::Video,
            source: Some(VIDEO_SOURCE.to_string()),
            reason_to_trust: Some(VIDEO_REASON.to_string()),
            content_verification: None,
            deepfake_detection: None,
            checked_at: Local::now(),
        },
        tag: None,
    }
}

pub fn image_result(query: &str, verdict: ImageVerdict) -> Verified {
    Verified {
        result: FactCheckResult {
            query: query.to_string(),
            result: verdict.result,
            confidence: verdict.confidence,
            content_type: ContentType::Image,
            source: None,
            reason_to_trust: None,
            content_verification: Some(verdict.content_verification),
            deepfake_detection: Some(verdict.deepfake_detection),
            checked_at: Local::now(),
        },
        tag: None,
    }
}
