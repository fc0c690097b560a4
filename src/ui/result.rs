use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use factdash::logic::errors::{format_error_message, SubmitError};
use factdash::logic::formatting::{confidence_ratio, format_confidence, spinner_frame, verdict_label};
use factdash::model::FactCheckResult;

fn verdict_color(result: bool) -> Color {
    if result {
        Color::Green
    } else {
        Color::Red
    }
}

/// Render the result panel: verdict, confidence gauge, checked claim
pub fn render_result_panel(
    f: &mut Frame,
    area: Rect,
    current: Option<&FactCheckResult>,
    processing: bool,
    last_error: Option<&SubmitError>,
    spinner_ms: u128,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Result ")
        .title_style(Style::default().add_modifier(Modifier::BOLD));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status line
            Constraint::Length(1), // Verdict
            Constraint::Length(1), // Gauge
            Constraint::Min(0),    // Query
        ])
        .split(inner);

    let status = if processing {
        Line::from(Span::styled(
            format!("{} Verifying...", spinner_frame(spinner_ms)),
            Style::default().fg(Color::Yellow),
        ))
    } else if let Some(error) = last_error {
        Line::from(Span::styled(
            format_error_message(error),
            Style::default().fg(Color::Red),
        ))
    } else {
        Line::default()
    };
    f.render_widget(Paragraph::new(status), chunks[0]);

    let Some(result) = current else {
        if !processing {
            f.render_widget(
                Paragraph::new(Span::styled(
                    "No result yet",
                    Style::default().fg(Color::DarkGray),
                )),
                chunks[1],
            );
        }
        return;
    };

    let color = verdict_color(result.result);
    let verdict = Line::from(vec![
        Span::raw("Verdict: "),
        Span::styled(
            verdict_label(result.result, result.content_type),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(verdict), chunks[1]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .ratio(confidence_ratio(result.confidence))
        .label(format!("Confidence {}", format_confidence(result.confidence)));
    f.render_widget(gauge, chunks[2]);

    let query = Paragraph::new(Line::from(vec![
        Span::styled("Claim: ", Style::default().fg(Color::Gray)),
        Span::raw(result.query.as_str()),
    ]))
    .wrap(Wrap { trim: true });
    f.render_widget(query, chunks[3]);
}
