use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the input/result row
const TOP_ROW_HEIGHT: u16 = 10;
/// Height of the stats panel
const STATS_HEIGHT: u16 = 7;

/// Layout information for rendering
pub struct LayoutInfo {
    pub title_area: Rect,
    pub input_area: Rect,
    /// Right of the input panel once expanded
    pub result_area: Option<Rect>,
    /// Only while a current result exists
    pub stats_area: Option<Rect>,
    pub chart_area: Option<Rect>,
    pub history_area: Option<Rect>,
    pub legend_area: Rect,
}

/// Calculate the screen layout for all UI components
///
/// `input_percent` is the input panel's share of the top row (100 when
/// collapsed, easing to 50 after the first submission).
pub fn calculate_layout(
    terminal_size: Rect,
    input_percent: u16,
    show_panels: bool,
    show_stats: bool,
) -> LayoutInfo {
    let stats_height = if show_stats { STATS_HEIGHT } else { 0 };
    let top_constraint = if show_panels {
        Constraint::Length(TOP_ROW_HEIGHT)
    } else {
        Constraint::Min(TOP_ROW_HEIGHT)
    };

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title bar
            top_constraint,                   // Input (+ result)
            Constraint::Length(stats_height), // Stats
            Constraint::Min(0),               // Chart + history
            Constraint::Length(1),            // Legend
        ])
        .split(terminal_size);

    let title_area = main_chunks[0];
    let top_area = main_chunks[1];
    let legend_area = main_chunks[4];

    let input_percent = input_percent.clamp(1, 100);
    let (input_area, result_area) = if show_panels && input_percent < 100 {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(input_percent),
                Constraint::Percentage(100 - input_percent),
            ])
            .split(top_area);
        (chunks[0], Some(chunks[1]))
    } else {
        (top_area, None)
    };

    let stats_area = show_stats.then_some(main_chunks[2]);

    let (chart_area, history_area) = if show_panels && main_chunks[3].height > 0 {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(main_chunks[3]);
        (Some(chunks[0]), Some(chunks[1]))
    } else {
        (None, None)
    };

    LayoutInfo {
        title_area,
        input_area,
        result_area,
        stats_area,
        chart_area,
        history_area,
        legend_area,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Rect {
        Rect::new(0, 0, 120, 40)
    }

    #[test]
    fn test_collapsed_layout_only_input() {
        let info = calculate_layout(screen(), 100, false, false);
        assert_eq!(info.input_area.width, 120);
        assert!(info.result_area.is_none());
        assert!(info.stats_area.is_none());
        assert!(info.chart_area.is_none());
        assert!(info.history_area.is_none());
    }

    #[test]
    fn test_expanded_layout_splits_top_row() {
        let info = calculate_layout(screen(), 50, true, false);
        let result = info.result_area.unwrap();
        assert_eq!(info.input_area.width, 60);
        assert_eq!(result.width, 60);
        assert!(info.chart_area.is_some());
        assert!(info.history_area.is_some());
        assert!(info.stats_area.is_none());
    }

    #[test]
    fn test_stats_visible_with_result() {
        let info = calculate_layout(screen(), 50, true, true);
        assert_eq!(info.stats_area.unwrap().height, STATS_HEIGHT);
    }

    #[test]
    fn test_expanded_at_animation_start_has_no_result_area() {
        let info = calculate_layout(screen(), 100, true, false);
        assert!(info.result_area.is_none());
        assert!(info.chart_area.is_some());
    }
}
