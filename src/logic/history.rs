//! History ledger
//!
//! Most-recent-first list of results with a fixed cap.

use crate::model::types::FactCheckResult;

/// Default number of results kept
pub const HISTORY_LIMIT: usize = 5;

/// Prepend `result` and evict the oldest entries beyond `limit`
pub fn push_capped(history: &mut Vec<FactCheckResult>, result: FactCheckResult, limit: usize) {
    history.insert(0, result);
    history.truncate(limit);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ContentType;
    use chrono::Local;

    fn result(query: &str) -> FactCheckResult {
        FactCheckResult {
            query: query.to_string(),
            result: true,
            confidence: 50.0,
            content_type: ContentType::Text,
            source: None,
            reason_to_trust: None,
            content_verification: None,
            deepfake_detection: None,
            checked_at: Local::now(),
        }
    }

    #[test]
    fn test_push_prepends() {
        let mut history = Vec::new();
        push_capped(&mut history, result("first"), HISTORY_LIMIT);
        push_capped(&mut history, result("second"), HISTORY_LIMIT);
        assert_eq!(history[0].query, "second");
        assert_eq!(history[1].query, "first");
    }

    #[test]
    fn test_sixth_insert_evicts_oldest() {
        let mut history = Vec::new();
        for i in 0..6 {
            push_capped(&mut history, result(&format!("q{}", i)), HISTORY_LIMIT);
        }
        assert_eq!(history.len(), 5);
        assert_eq!(history[0].query, "q5");
        assert_eq!(history[4].query, "q1");
        assert!(history.iter().all(|r| r.query != "q0"));
    }

    #[test]
    fn test_custom_limit() {
        let mut history = Vec::new();
        for i in 0..4 {
            push_capped(&mut history, result(&format!("q{}", i)), 2);
        }
        let queries: Vec<&str> = history.iter().map(|r| r.query.as_str()).collect();
        assert_eq!(queries, vec!["q3", "q2"]);
    }
}
