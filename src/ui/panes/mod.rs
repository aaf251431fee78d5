//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visual panes,
//! organised by responsibility:
//!
//! - [`source`]: source code display with current-line highlighting
//!   and the edit-mode cursor
//! - [`memory`]: variable cards with addresses, kind tags, values, and
//!   pointer arrows derived from the current snapshot
//! - [`log`]: the execution log, error lines styled distinctly
//! - [`status`]: status bar with mode, step counter, and keybindings
//!
//! Each pane module exports a primary `render_*` function taking the
//! frame, its area, the data it displays, and its focus/scroll state.

pub mod log;
pub mod memory;
pub mod source;
pub mod status;

pub use log::render_log_pane;
pub use memory::render_memory_pane;
pub use source::render_source_pane;
pub use status::render_status_bar;

use super::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders};

/// Bordered block shared by all panes, with focus styling.
pub(crate) fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Clamp a scroll offset so `total` items fit a viewport of
/// `visible` rows; offsets beyond the end pin to the bottom.
pub(crate) fn clamp_scroll(offset: &mut usize, total: usize, visible: usize) {
    if total > visible {
        *offset = (*offset).min(total - visible);
    } else {
        *offset = 0;
    }
}
