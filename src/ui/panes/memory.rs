//! Memory pane rendering with variable cards and pointer arrows
//!
//! Renders the synthetic stack of the viewed snapshot: one card per
//! variable showing its address, kind tag, name, and display value.
//! Pointers whose value matches a live variable's address get a
//! `──▶ target` arrow taken from the snapshot's derived edges.

use super::{clamp_scroll, pane_block};
use crate::snapshot::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

/// Render the memory pane from the viewed snapshot.
pub fn render_memory_pane(
    frame: &mut Frame,
    area: Rect,
    snapshot: &Snapshot,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block("RAM (Stack Memory)", is_focused);

    let cards = snapshot.cards();

    if cards.is_empty() {
        let empty = vec![
            ListItem::new("Memory Empty").style(Style::default().fg(DEFAULT_THEME.comment)),
            ListItem::new("Run code to allocate memory")
                .style(Style::default().fg(DEFAULT_THEME.comment)),
        ];
        frame.render_widget(List::new(empty).block(block), area);
        return;
    }

    let widest_name = cards.iter().map(|c| c.name.len()).max().unwrap_or(0);

    let mut all_items: Vec<ListItem> = Vec::new();
    for card in &cards {
        let accent = if card.is_pointer {
            DEFAULT_THEME.pointer_accent
        } else {
            DEFAULT_THEME.int_accent
        };

        let mut spans = vec![
            Span::styled(
                format!("{:>7} ", card.address),
                Style::default().fg(DEFAULT_THEME.address),
            ),
            Span::styled("│ ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(format!("{:<5}", card.kind), Style::default().fg(accent)),
            Span::styled(
                format!("{:>width$} ", card.name, width = widest_name),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled("= ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                card.value.clone(),
                Style::default()
                    .fg(if card.value == "?" {
                        DEFAULT_THEME.comment
                    } else {
                        DEFAULT_THEME.fg
                    })
                    .add_modifier(Modifier::BOLD),
            ),
        ];

        if let Some(edge) = snapshot.edges.iter().find(|e| e.from == card.name) {
            spans.push(Span::styled(
                format!("  ──▶ {}", edge.to),
                Style::default()
                    .fg(DEFAULT_THEME.pointer_accent)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        all_items.push(ListItem::new(Line::from(spans)));
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
