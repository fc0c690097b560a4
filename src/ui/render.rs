use crate::App;
use ratatui::Frame;

use super::{chart, history, input, layout, legend, result, stats, title_bar, toast};
use factdash::logic;

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &App) {
    let size = f.area();
    let dashboard = &app.model.dashboard;

    let since_expanded = dashboard.since_expanded();
    let spinner_ms = since_expanded.map(|d| d.as_millis()).unwrap_or(0);

    let layout_info = layout::calculate_layout(
        size,
        logic::layout::input_panel_percent(since_expanded),
        dashboard.show_panels(),
        dashboard.show_stats(),
    );

    title_bar::render_title_bar(
        f,
        layout_info.title_area,
        app.endpoint_url(),
        dashboard.processing,
        spinner_ms,
    );

    input::render_input_panel(f, layout_info.input_area, &app.model.ui);

    if let Some(area) = layout_info.result_area {
        result::render_result_panel(
            f,
            area,
            dashboard.current.as_ref(),
            dashboard.processing,
            dashboard.last_error.as_ref(),
            spinner_ms,
        );
    }

    if let (Some(area), Some(current)) = (layout_info.stats_area, dashboard.current.as_ref()) {
        stats::render_stats_panel(f, area, current);
    }

    if let Some(area) = layout_info.chart_area {
        chart::render_tag_chart(f, area, &dashboard.tags);
    }

    if let Some(area) = layout_info.history_area {
        history::render_history(f, area, &dashboard.history, dashboard.history_limit);
    }

    legend::render_legend(f, layout_info.legend_area, dashboard.processing);

    // Render toast notification if active
    if let Some((message, _timestamp)) = &app.model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}
