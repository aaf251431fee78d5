//! Main TUI application state and logic

use crate::interpreter::statement::classify;
use crate::interpreter::stepper::{Mode, StepError, Stepper};
use crate::tutor::{explain_or_fallback, topic_for, CannedTutor, TutorService};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Memory,
    Log,
}

impl FocusedPane {
    /// Move focus to the next pane (source -> memory -> log)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Memory,
            FocusedPane::Memory => FocusedPane::Log,
            FocusedPane::Log => FocusedPane::Source,
        }
    }
}

/// The main application state
pub struct App {
    /// The stepper driving execution
    pub stepper: Stepper,

    /// Editable source buffer, one entry per line
    pub buffer: Vec<String>,

    /// Edit-mode cursor
    pub cursor_row: usize,
    pub cursor_col: usize,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub source_scroll: usize,
    pub memory_scroll: usize,
    pub log_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Explanation backend behind the tutor seam
    tutor: Box<dyn TutorService>,

    /// Latest tutor explanation, shown in the log pane
    pub tutor_note: Option<String>,
}

impl App {
    /// Create a new app and immediately start a run over `source`.
    pub fn new(source: String) -> Self {
        let buffer: Vec<String> = source.lines().map(|l| l.to_string()).collect();
        let mut stepper = Stepper::new();
        stepper.start_run(&source);

        App {
            stepper,
            buffer,
            cursor_row: 0,
            cursor_col: 0,
            focused_pane: FocusedPane::Source,
            source_scroll: 0,
            memory_scroll: 0,
            log_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: Instant::now(),
            tutor: Box::new(CannedTutor::new()),
            tutor_note: None,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Auto-play: at most one step per tick; the timer lives and
            // dies with this loop.
            if self.is_playing && self.last_play_time.elapsed() >= Duration::from_secs(1) {
                match self.stepper.step() {
                    Ok(()) => {
                        self.status_message = "Playing...".to_string();
                        self.log_scroll = usize::MAX;
                    }
                    Err(_) => {
                        self.is_playing = false;
                        self.status_message = "Playback complete".to_string();
                    }
                }
                self.last_play_time = Instant::now();
            }

            // Poll with timeout so auto-play keeps ticking.
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Left column: source over log; right column: memory.
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(pane_area);

        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(columns[0]);

        let editing = self.stepper.mode() == Mode::Editing;
        let snapshot = self.stepper.current();

        super::panes::render_source_pane(
            frame,
            left_rows[0],
            super::panes::source::SourceRenderData {
                lines: if editing {
                    self.buffer.as_slice()
                } else {
                    self.stepper.lines()
                },
                current_line: snapshot.line,
                is_error: snapshot.log.is_error,
                edit_cursor: editing.then_some((self.cursor_row, self.cursor_col)),
            },
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        super::panes::render_log_pane(
            frame,
            left_rows[1],
            self.stepper.history(),
            self.stepper.view_position(),
            self.tutor_note.as_deref(),
            self.focused_pane == FocusedPane::Log,
            &mut self.log_scroll,
        );

        super::panes::render_memory_pane(
            frame,
            columns[1],
            snapshot,
            self.focused_pane == FocusedPane::Memory,
            &mut self.memory_scroll,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.stepper.mode(),
            self.stepper.view_position(),
            self.stepper.lines().len(),
            self.is_playing,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.stepper.mode() == Mode::Editing {
            self.handle_edit_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('e') => {
                self.is_playing = false;
                self.stepper.edit_source();
                self.cursor_row = self.cursor_row.min(self.buffer.len().saturating_sub(1));
                self.cursor_col = 0;
                self.tutor_note = None;
                self.status_message = "Editing — Esc to run".to_string();
            }
            KeyCode::Char('r') => {
                self.is_playing = false;
                self.start_run();
            }
            KeyCode::Char('p') => {
                self.is_playing = !self.is_playing;
                self.status_message = if self.is_playing {
                    // Fire the first auto-step immediately.
                    self.last_play_time = Instant::now()
                        .checked_sub(Duration::from_secs(1))
                        .unwrap_or_else(Instant::now);
                    "Playing...".to_string()
                } else {
                    "Paused".to_string()
                };
            }
            KeyCode::Char('?') => {
                self.explain_current_line();
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Right | KeyCode::Char(' ') => {
                self.is_playing = false;
                self.advance();
            }
            KeyCode::Left => {
                self.is_playing = false;
                if self.stepper.view_back() {
                    self.status_message = "Rewound one step".to_string();
                } else {
                    self.status_message = "At the start".to_string();
                }
            }
            KeyCode::Enter => {
                // Jump to end of execution.
                self.is_playing = false;
                while self.stepper.step().is_ok() {}
                self.stepper.view_to_end();
                self.status_message = "Jumped to end".to_string();
                self.log_scroll = usize::MAX;
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                self.stepper.view_to_start();
                self.status_message = "Jumped to start".to_string();
                self.log_scroll = 0;
            }
            KeyCode::Up => self.scroll_focused(false),
            KeyCode::Down => self.scroll_focused(true),
            _ => {}
        }
    }

    /// Keystrokes while the source buffer is editable
    fn handle_edit_key(&mut self, key: KeyEvent) {
        if self.buffer.is_empty() {
            self.buffer.push(String::new());
        }

        match key.code {
            KeyCode::Esc => {
                self.start_run();
            }
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char(c) => {
                let line = &mut self.buffer[self.cursor_row];
                let byte = char_to_byte(line, self.cursor_col);
                line.insert(byte, c);
                self.cursor_col += 1;
            }
            KeyCode::Enter => {
                let line = &mut self.buffer[self.cursor_row];
                let byte = char_to_byte(line, self.cursor_col);
                let rest = line.split_off(byte);
                self.buffer.insert(self.cursor_row + 1, rest);
                self.cursor_row += 1;
                self.cursor_col = 0;
            }
            KeyCode::Backspace => {
                if self.cursor_col > 0 {
                    self.cursor_col -= 1;
                    let line = &mut self.buffer[self.cursor_row];
                    let byte = char_to_byte(line, self.cursor_col);
                    line.remove(byte);
                } else if self.cursor_row > 0 {
                    let removed = self.buffer.remove(self.cursor_row);
                    self.cursor_row -= 1;
                    self.cursor_col = self.buffer[self.cursor_row].chars().count();
                    self.buffer[self.cursor_row].push_str(&removed);
                }
            }
            KeyCode::Up => {
                if self.cursor_row > 0 {
                    self.cursor_row -= 1;
                    self.clamp_cursor_col();
                }
            }
            KeyCode::Down => {
                if self.cursor_row + 1 < self.buffer.len() {
                    self.cursor_row += 1;
                    self.clamp_cursor_col();
                }
            }
            KeyCode::Left => {
                self.cursor_col = self.cursor_col.saturating_sub(1);
            }
            KeyCode::Right => {
                let len = self.buffer[self.cursor_row].chars().count();
                self.cursor_col = (self.cursor_col + 1).min(len);
            }
            _ => {}
        }
    }

    fn clamp_cursor_col(&mut self) {
        let len = self.buffer[self.cursor_row].chars().count();
        self.cursor_col = self.cursor_col.min(len);
    }

    /// Start (or restart) a run over the current buffer
    fn start_run(&mut self) {
        let source = self.buffer.join("\n");
        self.stepper.start_run(&source);
        self.tutor_note = None;
        self.log_scroll = 0;
        self.status_message = "Simulation started.".to_string();
    }

    /// Step forward: replay recorded history first, then execute
    fn advance(&mut self) {
        if !self.stepper.view_at_end() {
            self.stepper.view_forward();
            self.status_message = "Stepped forward".to_string();
            return;
        }
        match self.stepper.step() {
            Ok(()) => {
                self.status_message = "Stepped forward".to_string();
                self.log_scroll = usize::MAX;
            }
            Err(StepError::RunFinished) => {
                self.status_message = "End of program".to_string();
            }
            Err(StepError::NotRunning) => {
                self.status_message = "No run in progress".to_string();
            }
        }
    }

    /// Ask the tutor about the line at the view position
    fn explain_current_line(&mut self) {
        let lines = self.stepper.lines();
        // Before any step, explain the first line about to run.
        let idx = self.stepper.current().line.unwrap_or(0);
        let Some(line) = lines.get(idx) else {
            return;
        };

        let note = match classify(line) {
            Ok(statement) => {
                explain_or_fallback(self.tutor.as_ref(), topic_for(&statement), Some(line))
            }
            Err(_) => explain_or_fallback(self.tutor.as_ref(), "syntax", Some(line)),
        };
        self.tutor_note = Some(note);
        self.log_scroll = usize::MAX;
    }

    fn scroll_focused(&mut self, down: bool) {
        let offset = match self.focused_pane {
            FocusedPane::Source => &mut self.source_scroll,
            FocusedPane::Memory => &mut self.memory_scroll,
            FocusedPane::Log => &mut self.log_scroll,
        };
        if down {
            *offset = offset.saturating_add(1);
        } else {
            *offset = offset.saturating_sub(1);
        }
    }
}

/// Translate a char-based cursor column into a byte index.
fn char_to_byte(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(i, _)| i)
        .unwrap_or(line.len())
}
