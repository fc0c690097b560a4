use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use factdash::logic::formatting::spinner_frame;

/// Render the top bar: app name, service endpoint, processing indicator
pub fn render_title_bar(
    f: &mut Frame,
    area: Rect,
    endpoint_url: &str,
    processing: bool,
    spinner_ms: u128,
) {
    let mut spans = vec![
        Span::styled(
            "Fact Check Dashboard",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled(endpoint_url, Style::default().fg(Color::Gray)),
    ];

    if processing {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{} Processing", spinner_frame(spinner_ms)),
            Style::default().fg(Color::Yellow),
        ));
    }

    let bar = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    f.render_widget(bar, area);
}
