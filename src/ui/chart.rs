use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use factdash::logic::layout::bar_width;
use factdash::model::TagCount;
use factdash::utils::truncate_to_width;

/// Palette cycled across bars
const BAR_COLORS: [Color; 6] = [
    Color::Cyan,
    Color::LightGreen,
    Color::LightMagenta,
    Color::Yellow,
    Color::LightBlue,
    Color::LightRed,
];

/// Render the tag distribution bar chart
pub fn render_tag_chart(f: &mut Frame, area: Rect, tags: &[TagCount]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Tag Distribution ")
        .title_style(Style::default().add_modifier(Modifier::BOLD));

    if tags.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No tags yet - text checks add to this chart",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let width = bar_width(area.width.saturating_sub(2), tags.len());
    let bars: Vec<Bar> = tags
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            Bar::default()
                .value(entry.count)
                .label(Line::from(truncate_to_width(&entry.tag, width as usize)))
                .style(Style::default().fg(BAR_COLORS[idx % BAR_COLORS.len()]))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(width)
        .bar_gap(1)
        .value_style(Style::default().fg(Color::Black).add_modifier(Modifier::BOLD));

    f.render_widget(chart, area);
}
