//! Tag frequency aggregation
//!
//! Counts only grow; entries keep first-seen order so chart bars stay put.

use crate::model::types::TagCount;

/// Increment the count for `tag`, adding a new entry when unseen
pub fn record_tag(tags: &mut Vec<TagCount>, tag: &str) {
    if let Some(existing) = tags.iter_mut().find(|entry| entry.tag == tag) {
        existing.count += 1;
    } else {
        tags.push(TagCount {
            tag: tag.to_string(),
            count: 1,
        });
    }
}

/// Largest count across all tags (0 when empty)
pub fn max_count(tags: &[TagCount]) -> u64 {
    tags.iter().map(|entry| entry.count).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_tag_increments_single_entry() {
        let mut tags = Vec::new();
        record_tag(&mut tags, "misinformation");
        record_tag(&mut tags, "misinformation");
        assert_eq!(
            tags,
            vec![TagCount {
                tag: "misinformation".to_string(),
                count: 2
            }]
        );
    }

    #[test]
    fn test_new_tags_append_in_order() {
        let mut tags = Vec::new();
        record_tag(&mut tags, "health");
        record_tag(&mut tags, "politics");
        record_tag(&mut tags, "health");
        let names: Vec<&str> = tags.iter().map(|t| t.tag.as_str()).collect();
        assert_eq!(names, vec!["health", "politics"]);
        assert_eq!(tags[0].count, 2);
        assert_eq!(tags[1].count, 1);
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        let mut tags = Vec::new();
        record_tag(&mut tags, "Health");
        record_tag(&mut tags, "health");
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn test_max_count() {
        let mut tags = Vec::new();
        assert_eq!(max_count(&tags), 0);
        record_tag(&mut tags, "a");
        record_tag(&mut tags, "b");
        record_tag(&mut tags, "b");
        assert_eq!(max_count(&tags), 2);
    }
}
