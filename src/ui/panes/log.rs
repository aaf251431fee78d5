//! Execution log pane rendering
//!
//! Renders one line per recorded snapshot up to the viewed position,
//! error lines in red, the viewed line emphasised.  Also used to show
//! tutor explanations when requested.

use super::{clamp_scroll, pane_block};
use crate::snapshot::History;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

/// Render the log pane: every log line from the ready snapshot up to
/// and including the viewed one.
pub fn render_log_pane(
    frame: &mut Frame,
    area: Rect,
    history: &History,
    view_position: usize,
    tutor_note: Option<&str>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block("Terminal Output", is_focused);

    let mut all_items: Vec<ListItem> = Vec::new();
    for idx in 0..=view_position {
        let Some(snapshot) = history.get(idx) else {
            break;
        };
        let color = if snapshot.log.is_error {
            DEFAULT_THEME.error
        } else {
            DEFAULT_THEME.success
        };
        let mut style = Style::default().fg(color);
        if idx == view_position {
            style = style.add_modifier(Modifier::BOLD);
        }
        all_items.push(ListItem::new(Line::from(vec![
            Span::styled("> ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(snapshot.log.message.clone(), style),
        ])));
    }

    if let Some(note) = tutor_note {
        all_items.push(ListItem::new(Line::from(vec![
            Span::styled("? ", Style::default().fg(DEFAULT_THEME.primary)),
            Span::styled(
                note.to_string(),
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::ITALIC),
            ),
        ])));
    }

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    clamp_scroll(scroll_offset, total_items, visible_height);

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
