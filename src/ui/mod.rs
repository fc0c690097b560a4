// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Splits the screen into panels (expand-aware)
// - render: Main orchestration function that coordinates all rendering
// - title_bar: Top bar with endpoint and processing indicator
// - input: Query/file input panel with content type selector
// - result: Verdict and confidence panel
// - stats: Detailed fields of the current result
// - chart: Tag distribution bar chart
// - history: Previous outputs list
// - legend: Hotkey legend
// - toast: Toast notifications (brief pop-up messages)

pub mod chart;
pub mod history;
pub mod input;
pub mod layout;
pub mod legend;
pub mod render;
pub mod result;
pub mod stats;
pub mod title_bar;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
