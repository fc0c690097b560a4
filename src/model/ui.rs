//! UI Model
//!
//! Input panel buffers, selector state, and transient notifications.

use std::path::PathBuf;
use std::time::Instant;

use super::types::{InputField, Submission};
use crate::ContentType;

#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // INPUT PANEL
    // ============================================
    /// Claim text (or a label for video/image submissions)
    pub query: String,

    /// Path of the file to upload, as typed
    pub file_path: String,

    /// Field receiving keystrokes
    pub focus: InputField,

    /// Content type selector
    pub content_type: ContentType,

    // ============================================
    // NOTIFICATIONS
    // ============================================
    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            file_path: String::new(),
            focus: InputField::Query,
            content_type: ContentType::Text,
            toast_message: None,
            should_quit: false,
        }
    }

    /// Buffer of the focused field
    pub fn focused_buffer_mut(&mut self) -> &mut String {
        match self.focus {
            InputField::Query => &mut self.query,
            InputField::FilePath => &mut self.file_path,
        }
    }

    /// Build a submission from the current input buffers
    ///
    /// The file path is ignored for text; a blank path means no file.
    pub fn submission(&self) -> Submission {
        let file = match self.content_type {
            ContentType::Text => None,
            _ => {
                let trimmed = self.file_path.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(trimmed))
                }
            }
        };

        Submission {
            query: self.query.trim().to_string(),
            content_type: self.content_type,
            file,
        }
    }

    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    pub fn should_dismiss_toast(&self) -> bool {
        if let Some((_, timestamp)) = &self.toast_message {
            crate::logic::ui::should_dismiss_toast(timestamp.elapsed().as_millis())
        } else {
            false
        }
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}

impl Default for UiModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_submission_ignores_file() {
        let mut ui = UiModel::new();
        ui.query = "  the earth is round ".to_string();
        ui.file_path = "/tmp/clip.mp4".to_string();
        let submission = ui.submission();
        assert_eq!(submission.query, "the earth is round");
        assert!(submission.file.is_none());
    }

    #[test]
    fn test_video_submission_blank_path_is_none() {
        let mut ui = UiModel::new();
        ui.content_type = ContentType::Video;
        ui.file_path = "   ".to_string();
        assert!(ui.submission().file.is_none());
    }

    #[test]
    fn test_video_submission_with_path() {
        let mut ui = UiModel::new();
        ui.content_type = ContentType::Video;
        ui.file_path = "/tmp/clip.mp4".to_string();
        assert_eq!(ui.submission().file, Some(PathBuf::from("/tmp/clip.mp4")));
    }

    #[test]
    fn test_focused_buffer() {
        let mut ui = UiModel::new();
        ui.focused_buffer_mut().push('a');
        ui.focus = InputField::FilePath;
        ui.focused_buffer_mut().push('b');
        assert_eq!(ui.query, "a");
        assert_eq!(ui.file_path, "b");
    }
}
