//! Source pane rendering with current-line highlighting
//!
//! Renders the snippet being stepped through, one line per row with
//! line numbers.  In run mode the line that produced the viewed
//! snapshot is highlighted (red if it faulted); in edit mode a block
//! cursor marks the insertion point instead.

use super::{clamp_scroll, pane_block};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Minimal syntax highlighting for the supported subset.
fn highlight_line(line: &str) -> Vec<Span<'static>> {
    if line.trim_start().starts_with("//") {
        return vec![Span::styled(
            line.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.comment)
                .add_modifier(Modifier::ITALIC),
        )];
    }

    let mut spans = Vec::new();
    let mut word = String::new();

    let flush = |word: &mut String, spans: &mut Vec<Span<'static>>| {
        if word.is_empty() {
            return;
        }
        let style = if word == "int" {
            Style::default()
                .fg(DEFAULT_THEME.keyword)
                .add_modifier(Modifier::BOLD)
        } else if word.chars().all(|c| c.is_ascii_digit()) {
            Style::default().fg(DEFAULT_THEME.number)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };
        spans.push(Span::styled(std::mem::take(word), style));
    };

    for c in line.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            word.push(c);
        } else {
            flush(&mut word, &mut spans);
            let style = match c {
                '*' | '&' => Style::default().fg(DEFAULT_THEME.pointer_accent),
                '=' | '+' | '-' | ';' => Style::default().fg(DEFAULT_THEME.fg),
                _ => Style::default(),
            };
            spans.push(Span::styled(c.to_string(), style));
        }
    }
    flush(&mut word, &mut spans);
    spans
}

/// Data needed to render the source pane.
pub struct SourceRenderData<'a> {
    pub lines: &'a [String],
    /// Line that produced the viewed snapshot (run mode).
    pub current_line: Option<usize>,
    /// Whether that line faulted.
    pub is_error: bool,
    /// Edit-mode cursor as (row, column), None in run mode.
    pub edit_cursor: Option<(usize, usize)>,
}

/// Render the source pane.
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    data: SourceRenderData,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = if data.edit_cursor.is_some() {
        "Source (editing)"
    } else {
        "Source"
    };
    let block = pane_block(title, is_focused);

    let total_lines = data.lines.len().max(1);
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    // Keep the interesting row (current line or edit cursor) in view.
    let follow_row = data
        .edit_cursor
        .map(|(row, _)| row)
        .or(data.current_line)
        .unwrap_or(0);
    if follow_row < *scroll_offset {
        *scroll_offset = follow_row;
    } else if follow_row >= *scroll_offset + visible_height {
        *scroll_offset = follow_row + 1 - visible_height;
    }
    clamp_scroll(scroll_offset, total_lines, visible_height);

    let mut rows: Vec<Line> = Vec::new();
    for (idx, line) in data
        .lines
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
    {
        let is_current = data.current_line == Some(idx);

        let num_style = if is_current {
            Style::default()
                .fg(if data.is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.secondary
                })
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.comment)
        };

        let mut spans = vec![Span::styled(format!("{:3} ", idx + 1), num_style)];

        if let Some((cursor_row, cursor_col)) = data.edit_cursor {
            if idx == cursor_row {
                // Split the line around the cursor column and invert
                // the character under it.
                let col = cursor_col.min(line.chars().count());
                let before: String = line.chars().take(col).collect();
                let at: String = line.chars().nth(col).map(|c| c.to_string()).unwrap_or_else(|| " ".to_string());
                let after: String = line.chars().skip(col + 1).collect();
                spans.push(Span::raw(before));
                spans.push(Span::styled(
                    at,
                    Style::default().add_modifier(Modifier::REVERSED),
                ));
                spans.push(Span::raw(after));
                rows.push(Line::from(spans));
                continue;
            }
            spans.push(Span::raw(line.clone()));
            rows.push(Line::from(spans));
            continue;
        }

        let mut content = highlight_line(line);
        if is_current {
            let overlay = if data.is_error {
                Style::default()
                    .bg(DEFAULT_THEME.error)
                    .fg(ratatui::style::Color::Black)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().bg(DEFAULT_THEME.current_line_bg)
            };
            for span in &mut content {
                span.style = span.style.patch(overlay);
            }
        }
        spans.extend(content);
        rows.push(Line::from(spans));
    }

    if data.lines.is_empty() {
        rows.push(Line::from(Span::styled(
            "// Type your C code here...",
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    }

    let paragraph = Paragraph::new(rows).block(block);
    frame.render_widget(paragraph, area);
}
