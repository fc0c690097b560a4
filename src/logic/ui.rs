//! UI state transition logic
//!
//! Pure functions for UI state cycling and transitions.

use crate::model::types::InputField;
use crate::ContentType;

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u128 = 2500;

/// Cycle the content type selector: Text → Video → Image → Text
///
/// # Examples
/// ```
/// use factdash::ContentType;
/// use factdash::logic::ui::cycle_content_type;
///
/// assert_eq!(cycle_content_type(ContentType::Text), ContentType::Video);
/// assert_eq!(cycle_content_type(ContentType::Image), ContentType::Text);
/// ```
pub fn cycle_content_type(current: ContentType) -> ContentType {
    match current {
        ContentType::Text => ContentType::Video,
        ContentType::Video => ContentType::Image,
        ContentType::Image => ContentType::Text,
    }
}

/// Next focused input field; the file field is skipped for text submissions
pub fn next_input_field(current: InputField, content_type: ContentType) -> InputField {
    match (current, content_type) {
        (_, ContentType::Text) => InputField::Query,
        (InputField::Query, _) => InputField::FilePath,
        (InputField::FilePath, _) => InputField::Query,
    }
}

pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}
