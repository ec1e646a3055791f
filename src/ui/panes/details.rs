//! Details pane: metadata and per-shape summaries of the current snapshot

use crate::snapshot::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Build the text lines shown for `snapshot`
pub fn detail_lines(snapshot: &Snapshot) -> Vec<Line<'static>> {
    let label = Style::default().fg(DEFAULT_THEME.comment);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("ID: ", label),
            Span::styled(
                snapshot.id().to_string(),
                Style::default().fg(DEFAULT_THEME.heading),
            ),
        ]),
        Line::from(vec![
            Span::styled("Taken: ", label),
            Span::raw(snapshot.timestamp().to_string()),
        ]),
        Line::from(vec![
            Span::styled("Description: ", label),
            Span::raw(snapshot.description().to_string()),
        ]),
        Line::raw(""),
    ];

    if snapshot.shapes().is_empty() {
        lines.push(Line::styled("(no shapes)", label));
    }

    for shape in snapshot.shapes() {
        let (r, g, b) = shape.color().to_rgb8();
        let swatch = Style::default().fg(ratatui::style::Color::Rgb(r, g, b));
        for (i, text) in shape.describe().lines().enumerate() {
            if i == 0 {
                lines.push(Line::from(vec![
                    Span::styled("■ ", swatch),
                    Span::styled(
                        text.to_string(),
                        Style::default()
                            .fg(DEFAULT_THEME.shape_name)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]));
            } else {
                lines.push(Line::from(format!("  {}", text)));
            }
        }
    }
    lines
}

/// Render the details pane
pub fn render_details_pane(
    frame: &mut Frame,
    area: Rect,
    snapshot: Option<&Snapshot>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 0, 0, 0));

    let Some(snapshot) = snapshot else {
        *scroll_offset = 0;
        let paragraph = Paragraph::new("(nothing selected)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let lines = detail_lines(snapshot);
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    // Clamp scroll offset only if content exceeds visible area
    if lines.len() > visible_height {
        *scroll_offset = (*scroll_offset).min(lines.len() - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().fg(DEFAULT_THEME.fg))
        .scroll((scroll_rows(*scroll_offset), 0));
    frame.render_widget(paragraph, area);
}

/// Paragraph scroll offset, saturating at what ratatui can address
fn scroll_rows(offset: usize) -> u16 {
    u16::try_from(offset).unwrap_or(u16::MAX)
}
