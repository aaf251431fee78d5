//! Run/edit state machine and history driver
//!
//! The [`Stepper`] owns the source lines, the execution cursor, and
//! the append-only [`History`].  Execution is forward-only: `step()`
//! runs the interpreter on the next line and appends the resulting
//! snapshot.  A separate *view* position lets the UI rewind over the
//! recorded history without re-executing anything.
//!
//! # State machine
//!
//! ```text
//! Editing ──start_run──▶ Ready ──step──▶ Stepping ──step──▶ Finished
//!    ▲                                                         │
//!    └───────────────────── edit_source ──────────────────────-┘
//! ```
//!
//! `edit_source` is valid in any state and discards the run entirely.

use super::exec::run_line;
use crate::snapshot::{History, Snapshot};
use std::fmt;

/// Where the simulator is in its run/edit lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Source is mutable, no run in progress.
    Editing,
    /// Run started, nothing executed yet.
    Ready,
    /// At least one line executed, more remain.
    Stepping,
    /// Cursor reached the end of the source.
    Finished,
}

/// Errors returned when a step is requested in the wrong state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepError {
    /// `step()` while in `Editing` — no run has been started.
    NotRunning,
    /// `step()` after the cursor reached the line count.
    RunFinished,
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepError::NotRunning => write!(f, "no run in progress"),
            StepError::RunFinished => write!(f, "end of program"),
        }
    }
}

impl std::error::Error for StepError {}

/// Drives line-by-line execution and owns the snapshot history.
#[derive(Debug)]
pub struct Stepper {
    lines: Vec<String>,
    cursor: usize,
    history: History,
    /// Index into history of the snapshot currently shown by the UI.
    view: usize,
    mode: Mode,
}

impl Stepper {
    /// A stepper in `Editing` mode with no run in progress.
    pub fn new() -> Self {
        Stepper {
            lines: Vec::new(),
            cursor: 0,
            history: History::new(),
            view: 0,
            mode: Mode::Editing,
        }
    }

    /// Start a run over `source`: resets cursor and history and moves
    /// to `Ready` (or straight to `Finished` for an empty source).
    pub fn start_run(&mut self, source: &str) {
        self.lines = source.lines().map(|l| l.to_string()).collect();
        self.cursor = 0;
        self.history = History::new();
        self.view = 0;
        self.mode = if self.lines.is_empty() {
            Mode::Finished
        } else {
            Mode::Ready
        };
    }

    /// Discard the run and return to `Editing`.  Safe in any state; no
    /// partial state survives.
    pub fn edit_source(&mut self) {
        self.lines.clear();
        self.cursor = 0;
        self.history = History::new();
        self.view = 0;
        self.mode = Mode::Editing;
    }

    /// Execute the line under the cursor against the latest snapshot,
    /// append the result, and advance.  The cursor advances whether or
    /// not the line faulted.
    pub fn step(&mut self) -> Result<(), StepError> {
        match self.mode {
            Mode::Editing => return Err(StepError::NotRunning),
            Mode::Finished => return Err(StepError::RunFinished),
            Mode::Ready | Mode::Stepping => {}
        }

        let line = &self.lines[self.cursor];
        let (memory, log) = run_line(line, &self.history.latest().memory);
        self.history
            .push(Snapshot::after_line(memory, log, self.cursor));

        self.cursor += 1;
        self.mode = if self.cursor >= self.lines.len() {
            Mode::Finished
        } else {
            Mode::Stepping
        };

        // Stepping snaps the view to the newest snapshot.
        self.view = self.history.len() - 1;
        Ok(())
    }

    /// Current lifecycle state.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Lines of the running source.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Execution cursor: index of the next line to execute.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The recorded history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The snapshot at the view position.
    pub fn current(&self) -> &Snapshot {
        self.history
            .get(self.view)
            .unwrap_or_else(|| self.history.latest())
    }

    /// Index of the viewed snapshot within history.
    pub fn view_position(&self) -> usize {
        self.view
    }

    /// Move the view one snapshot back.  Returns false at the start.
    pub fn view_back(&mut self) -> bool {
        if self.view > 0 {
            self.view -= 1;
            true
        } else {
            false
        }
    }

    /// Move the view one snapshot forward over already-recorded
    /// history.  Returns false at the newest snapshot.
    pub fn view_forward(&mut self) -> bool {
        if self.view + 1 < self.history.len() {
            self.view += 1;
            true
        } else {
            false
        }
    }

    /// Jump the view to the ready snapshot.
    pub fn view_to_start(&mut self) {
        self.view = 0;
    }

    /// Jump the view to the newest snapshot.
    pub fn view_to_end(&mut self) {
        self.view = self.history.len() - 1;
    }

    /// Whether the view is pinned to the newest snapshot.
    pub fn view_at_end(&self) -> bool {
        self.view + 1 == self.history.len()
    }
}

impl Default for Stepper {
    fn default() -> Self {
        Self::new()
    }
}
