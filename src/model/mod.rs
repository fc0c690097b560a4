//! Application Model
//!
//! Plain, cloneable state for the dashboard, split into:
//!
//! - **DashboardModel**: results, history, tags, processing/expanded flags
//! - **UiModel**: input buffers, selectors, toast
//!
//! No I/O happens here; the runtime feeds service responses in through the
//! dashboard's transition methods.

pub mod dashboard;
pub mod types;
pub mod ui;

pub use dashboard::{Completion, DashboardModel};
pub use types::*;
pub use ui::UiModel;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    pub dashboard: DashboardModel,
    pub ui: UiModel,
}

impl Model {
    pub fn new(history_limit: usize) -> Self {
        Self {
            dashboard: DashboardModel::new(history_limit),
            ui: UiModel::new(),
        }
    }

    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }

    pub fn should_dismiss_toast(&self) -> bool {
        self.ui.should_dismiss_toast()
    }

    pub fn dismiss_toast(&mut self) {
        self.ui.dismiss_toast();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_creation() {
        let model = Model::new(5);
        assert!(model.dashboard.history.is_empty());
        assert!(model.dashboard.tags.is_empty());
        assert!(model.ui.query.is_empty());
        assert!(!model.ui.should_quit);
    }

    #[test]
    fn test_model_is_cloneable() {
        let model = Model::new(5);
        let _cloned = model.clone();
    }

    #[test]
    fn test_toast() {
        let mut model = Model::new(5);
        assert!(model.ui.toast_message.is_none());

        model.show_toast("Test".to_string());
        assert!(model.ui.toast_message.is_some());
        assert!(!model.should_dismiss_toast());

        model.dismiss_toast();
        assert!(model.ui.toast_message.is_none());
    }
}
