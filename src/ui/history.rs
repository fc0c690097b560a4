//! Previous outputs list

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use factdash::logic::formatting::{format_confidence, verdict_label};
use factdash::model::FactCheckResult;
use factdash::utils::truncate_to_width;

/// One history row: time, type, claim, then verdict right-aligned
fn history_line(result: &FactCheckResult, item_width: usize) -> Line<'static> {
    let time = result.checked_at.format("%H:%M:%S").to_string();
    let kind = format!("{:<5}", result.content_type.as_str());
    let verdict = format!(
        "{} {}",
        verdict_label(result.result, result.content_type),
        format_confidence(result.confidence)
    );

    let fixed = time.width() + 1 + kind.width() + 1 + verdict.width() + 2;
    let query = truncate_to_width(&result.query, item_width.saturating_sub(fixed));
    let padding = item_width.saturating_sub(fixed - 2 + query.width()).max(2);

    let verdict_color = if result.result { Color::Green } else { Color::Red };

    Line::from(vec![
        Span::styled(time, Style::default().fg(Color::Rgb(120, 120, 120))),
        Span::raw(" "),
        Span::styled(kind, Style::default().fg(Color::Cyan)),
        Span::raw(" "),
        Span::raw(query),
        Span::raw(" ".repeat(padding)),
        Span::styled(verdict, Style::default().fg(verdict_color)),
    ])
}

pub fn render_history(f: &mut Frame, area: Rect, history: &[FactCheckResult], limit: usize) {
    let item_width = area.width.saturating_sub(2) as usize;

    let items: Vec<ListItem> = history
        .iter()
        .map(|result| ListItem::new(history_line(result, item_width)))
        .collect();

    let title = format!(" Previous Outputs ({}/{}) ", history.len(), limit);
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_style(Style::default().add_modifier(Modifier::BOLD)),
    );

    f.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;
    use factdash::ContentType;

    fn result(query: &str) -> FactCheckResult {
        FactCheckResult {
            query: query.to_string(),
            result: false,
            confidence: 20.0,
            content_type: ContentType::Video,
            source: None,
            reason_to_trust: None,
            content_verification: None,
            deepfake_detection: None,
            checked_at: Local::now(),
        }
    }

    #[test]
    fn test_history_line_fits_width() {
        let line = history_line(&result("a very long claim that will not fit in the row"), 50);
        assert!(line.width() <= 50, "width {}", line.width());
    }

    #[test]
    fn test_history_line_shows_verdict() {
        let line = history_line(&result("clip"), 60);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.ends_with("Deepfake 20%"));
        assert!(text.contains("video"));
    }
}
