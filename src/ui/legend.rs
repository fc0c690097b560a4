use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(processing: bool) -> Vec<Span<'static>> {
    let key = Style::default().fg(Color::Yellow);

    let mut spans = vec![
        Span::styled("Enter", key),
        Span::raw(if processing { ":Check again  " } else { ":Check  " }),
        Span::styled("^T", key),
        Span::raw(":Type  "),
        Span::styled("Tab", key),
        Span::raw(":Field  "),
        Span::styled("^U", key),
        Span::raw(":Clear  "),
    ];

    spans.extend(vec![Span::styled("Esc", key), Span::raw(":Quit")]);
    spans
}

pub fn render_legend(f: &mut Frame, area: Rect, processing: bool) {
    let legend = Paragraph::new(Line::from(build_hotkey_spans(processing)));
    f.render_widget(legend, area);
}
