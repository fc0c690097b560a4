//! Display formatting helpers

use crate::ContentType;

/// Confidence as a whole percentage, clamped for display
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.0}%", confidence.clamp(0.0, 100.0))
}

/// Gauge ratio in 0.0..=1.0
pub fn confidence_ratio(confidence: f64) -> f64 {
    if confidence.is_nan() {
        return 0.0;
    }
    (confidence / 100.0).clamp(0.0, 1.0)
}

/// Verdict label, worded per content type
pub fn verdict_label(result: bool, content_type: ContentType) -> &'static str {
    match (content_type, result) {
        (ContentType::Video, true) => "Authentic",
        (ContentType::Video, false) => "Deepfake",
        (_, true) => "True",
        (_, false) => "False",
    }
}

/// "Yes"/"No" for the optional image checks, "-" when absent
pub fn format_check(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "Yes",
        Some(false) => "No",
        None => "-",
    }
}

/// Braille spinner frame for the processing indicator
pub fn spinner_frame(elapsed_ms: u128) -> char {
    const FRAMES: [char; 8] = ['⣾', '⣽', '⣻', '⢿', '⡿', '⣟', '⣯', '⣷'];
    FRAMES[((elapsed_ms / 100) % FRAMES.len() as u128) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_confidence_rounds() {
        assert_eq!(format_confidence(87.00000000000001), "87%");
        assert_eq!(format_confidence(66.6), "67%");
    }

    #[test]
    fn test_format_confidence_clamps() {
        assert_eq!(format_confidence(140.0), "100%");
        assert_eq!(format_confidence(-3.0), "0%");
    }

    #[test]
    fn test_confidence_ratio() {
        assert_eq!(confidence_ratio(50.0), 0.5);
        assert_eq!(confidence_ratio(250.0), 1.0);
        assert_eq!(confidence_ratio(f64::NAN), 0.0);
    }

    #[test]
    fn test_verdict_labels() {
        assert_eq!(verdict_label(true, ContentType::Text), "True");
        assert_eq!(verdict_label(false, ContentType::Text), "False");
        assert_eq!(verdict_label(true, ContentType::Video), "Authentic");
        assert_eq!(verdict_label(false, ContentType::Video), "Deepfake");
    }

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(spinner_frame(0), spinner_frame(800));
        assert_ne!(spinner_frame(0), spinner_frame(100));
    }

    #[test]
    fn test_format_check() {
        assert_eq!(format_check(Some(true)), "Yes");
        assert_eq!(format_check(None), "-");
    }
}
