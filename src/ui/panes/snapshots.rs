//! Snapshot list pane: every id with its description, cursor highlighted

use crate::snapshot::SnapshotArchive;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the snapshot list, scrolling so the cursor row stays visible
pub fn render_snapshot_list(
    frame: &mut Frame,
    area: Rect,
    archive: &SnapshotArchive,
    cursor: usize,
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
        .title(" Snapshots ")
        .borders(Borders::ALL)
        .border_style(border_style);

    if archive.is_empty() {
        let paragraph = Paragraph::new("(none)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // Keep the cursor inside the window
    if cursor < *scroll_offset {
        *scroll_offset = cursor;
    } else if cursor >= *scroll_offset + visible_height {
        *scroll_offset = cursor + 1 - visible_height;
    }

    let items: Vec<ListItem> = archive
        .snapshots()
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(index, snapshot)| {
            let is_current = index == cursor;
            let marker = if is_current { "▶ " } else { "  " };
            let mut spans = vec![
                Span::styled(marker, Style::default().fg(DEFAULT_THEME.secondary)),
                Span::styled(
                    format!("{:>3} ", index + 1),
                    Style::default().fg(DEFAULT_THEME.number),
                ),
                Span::styled(
                    snapshot.description().to_string(),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
            ];
            if snapshot.description().is_empty() {
                spans.push(Span::styled(
                    "(no description)",
                    Style::default().fg(DEFAULT_THEME.comment),
                ));
            }
            let item = ListItem::new(Line::from(spans));
            if is_current {
                item.style(
                    Style::default()
                        .bg(DEFAULT_THEME.current_line_bg)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                item
            }
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
