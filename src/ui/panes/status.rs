//! Status bar rendering with keybindings and state indicators

use crate::interpreter::stepper::Mode;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    mode: Mode,
    current_step: usize,
    total_steps: usize,
    is_playing: bool,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    // Left side: step counter and status message.
    let step_bg = match mode {
        Mode::Editing => DEFAULT_THEME.secondary,
        Mode::Finished => DEFAULT_THEME.success,
        Mode::Ready | Mode::Stepping => DEFAULT_THEME.primary,
    };
    let step_text = if mode == Mode::Editing {
        " EDIT ".to_string()
    } else {
        format!(" Step {}/{} ", current_step, total_steps)
    };

    let left_spans = vec![
        Span::styled(
            step_text,
            Style::default()
                .bg(step_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybindings for the current mode.
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = if mode == Mode::Editing {
        vec![
            Span::styled(" type ", key_style),
            Span::styled(" edit ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" Esc ", key_style),
            Span::styled(" run ", desc_style),
        ]
    } else {
        vec![
            Span::styled(" →/⎵ ", key_style),
            Span::styled(" step ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ← ", key_style),
            Span::styled(" rewind ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" p ", key_style),
            Span::styled(" play ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ? ", key_style),
            Span::styled(" explain ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" e ", key_style),
            Span::styled(" edit ", desc_style),
        ]
    };
    right_spans.push(Span::styled("│", sep_style));
    right_spans.push(Span::styled(" q ", key_style));
    right_spans.push(Span::styled(" quit ", desc_style));

    if is_playing {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " ▶ PLAYING ",
            Style::default()
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    } else if mode == Mode::Finished {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " END ",
            Style::default()
                .bg(DEFAULT_THEME.error)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
