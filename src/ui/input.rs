use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use factdash::model::{InputField, UiModel};
use factdash::ContentType;

const CONTENT_TYPES: [ContentType; 3] = [ContentType::Text, ContentType::Video, ContentType::Image];

fn selector_line(selected: ContentType) -> Line<'static> {
    let mut spans = vec![Span::raw("Type: ")];
    for content_type in CONTENT_TYPES {
        let label = format!(" {} ", content_type.as_str());
        if content_type == selected {
            spans.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(label, Style::default().fg(Color::Gray)));
        }
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// Longest suffix of `value` that fits in `max` columns
fn tail_to_width(value: &str, max: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut width = 0;
    let mut start = value.len();
    for (idx, ch) in value.char_indices().rev() {
        width += ch.width().unwrap_or(0);
        if width > max {
            break;
        }
        start = idx;
    }
    value[start..].to_string()
}

/// Render one text field; returns the cursor position when focused
fn render_field(
    f: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
    enabled: bool,
) -> Option<(u16, u16)> {
    let border = if !enabled {
        Style::default().fg(Color::DarkGray)
    } else if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let line = if value.is_empty() {
        Line::from(Span::styled(
            placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        // Keep the tail visible while typing past the edge
        let visible = tail_to_width(value, inner_width.saturating_sub(1));
        Line::from(visible)
    };

    let cursor_offset = if value.is_empty() {
        0
    } else {
        line.width().min(inner_width.saturating_sub(1)) as u16
    };

    let field = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(title.to_string()),
    );
    f.render_widget(field, area);

    (focused && enabled && area.height > 2).then(|| (area.x + 1 + cursor_offset, area.y + 1))
}

/// Render the input panel: type selector, claim field, file field
pub fn render_input_panel(f: &mut Frame, area: Rect, ui: &UiModel) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Fact Check ")
        .title_style(Style::default().add_modifier(Modifier::BOLD));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Selector
            Constraint::Length(3), // Claim
            Constraint::Length(3), // File
            Constraint::Min(0),
        ])
        .split(inner);

    f.render_widget(Paragraph::new(selector_line(ui.content_type)), chunks[0]);

    let query_placeholder = match ui.content_type {
        ContentType::Text => "Enter a claim to verify",
        ContentType::Video => "Optional label for this video",
        ContentType::Image => "Optional label for this image",
    };
    let file_enabled = ui.content_type != ContentType::Text;
    let file_placeholder = match ui.content_type {
        ContentType::Text => "Not used for text",
        ContentType::Video => "Path to a video file (required)",
        ContentType::Image => "Path to an image file",
    };

    let query_cursor = render_field(
        f,
        chunks[1],
        " Claim ",
        &ui.query,
        query_placeholder,
        ui.focus == InputField::Query,
        true,
    );
    let file_cursor = render_field(
        f,
        chunks[2],
        " File ",
        &ui.file_path,
        file_placeholder,
        ui.focus == InputField::FilePath,
        file_enabled,
    );

    if let Some(position) = query_cursor.or(file_cursor) {
        f.set_cursor_position(position);
    }
}
