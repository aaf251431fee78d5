//! # Introduction
//!
//! ptrsim steps through a tiny pointer-only subset of C one line at a
//! time, maintaining a synthetic stack memory (named variables with
//! assigned addresses) and an append-only history of snapshots.  The
//! history is rendered and navigated through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! Source line → Classifier → Statement → Executor → Snapshot → History → TUI
//! ```
//!
//! 1. [`interpreter::statement`] — tokenises one line and classifies it
//!    against the statement grammar.
//! 2. [`interpreter::exec`] — applies the statement's effect to a fresh
//!    copy of the memory, producing a log line (or an error log).
//! 3. [`memory`] — the flat memory model: [`memory::Variable`] slots
//!    with monotonically assigned addresses.
//! 4. [`snapshot`] — per-step [`snapshot::Snapshot`]s, derived pointer
//!    edges, and the append-only [`snapshot::History`].
//! 5. [`interpreter::stepper`] — the run/edit state machine driving
//!    execution forward and the rewindable view over history.
//! 6. [`tutor`] — seam for the external explanation service, with an
//!    offline canned implementation.
//! 7. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported C subset
//!
//! Declarations: `int x;`, `int x = 5;`, `int *p;`, `int y = *p;`.
//! Pointer operations: `p = &x;`, `*p = 5;`, `*p = *p + 5;` /
//! `*p = *p - 5;`.  Blank lines and `//` comments are skipped.
//! Everything else is a reported (non-fatal) syntax error.

pub mod interpreter;
pub mod memory;
pub mod snapshot;
pub mod tutor;
pub mod ui;
