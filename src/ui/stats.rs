use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use factdash::logic::formatting::{format_check, format_confidence, verdict_label};
use factdash::model::FactCheckResult;
use factdash::ContentType;

fn field<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<22}", label), Style::default().fg(Color::Gray)),
        Span::raw(value),
    ])
}

/// Lines shown for a result; image checks only appear for image results
fn stat_lines(result: &FactCheckResult) -> Vec<Line<'static>> {
    let mut lines = vec![
        field(
            "Verdict",
            format!(
                "{} ({})",
                verdict_label(result.result, result.content_type),
                format_confidence(result.confidence)
            ),
        ),
        field("Type", result.content_type.as_str().to_string()),
        field(
            "Source",
            result.source.clone().unwrap_or_else(|| "-".to_string()),
        ),
        field(
            "Reason to trust",
            result.reason_to_trust.clone().unwrap_or_else(|| "-".to_string()),
        ),
    ];

    if result.content_type == ContentType::Image {
        lines.push(field(
            "Content verification",
            format_check(result.content_verification).to_string(),
        ));
        lines.push(field(
            "Deepfake detection",
            format_check(result.deepfake_detection).to_string(),
        ));
    }

    lines
}

pub fn render_stats_panel(f: &mut Frame, area: Rect, result: &FactCheckResult) {
    let stats = Paragraph::new(stat_lines(result))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Details ")
                .title_style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(stats, area);
}
