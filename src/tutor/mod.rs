#![allow(dead_code)] // Complete service seam, the chat half is not wired into the TUI
//! Tutor service seam: multi-backend explanation abstraction
//!
//! The simulator treats its explanation/chat tutor as an external
//! collaborator: an opaque function from a topic (or a chat history)
//! to a text reply that may be slow or fail.  This module defines the
//! [`TutorService`] trait at that seam, fixed fallback strings the UI
//! degrades to on any failure, and [`CannedTutor`], an offline backend
//! with short built-in explanations for every statement kind the
//! simulator supports.
//!
//! A hosted-model backend would implement [`TutorService`] behind this
//! same trait; none ships here.

use crate::interpreter::statement::Statement;
use rustc_hash::FxHashMap;
use std::fmt;

/// Shown when an explanation request fails.
pub const EXPLAIN_FALLBACK: &str = "An error occurred while contacting the tutor.";

/// Shown when a chat request fails.
pub const CHAT_FALLBACK: &str = "I seem to be having trouble connecting to my knowledge base.";

/// Who said a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Tutor,
}

/// One turn of a tutor conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

/// Failure of the external tutor backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorError {
    pub message: String,
}

impl fmt::Display for TutorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tutor backend failed: {}", self.message)
    }
}

impl std::error::Error for TutorError {}

/// The external explanation collaborator.
pub trait TutorService {
    fn name(&self) -> &'static str;

    /// Explain one topic, optionally with extra context.
    fn explain(&self, topic: &str, context: Option<&str>) -> Result<String, TutorError>;

    /// Reply to `message` given the prior conversation.
    fn chat(&self, history: &[Message], message: &str) -> Result<String, TutorError>;
}

/// Ask for an explanation, degrading any failure to the fixed
/// fallback string.  Failures never propagate into the UI.
pub fn explain_or_fallback(
    service: &dyn TutorService,
    topic: &str,
    context: Option<&str>,
) -> String {
    service
        .explain(topic, context)
        .unwrap_or_else(|_| EXPLAIN_FALLBACK.to_string())
}

/// Send a chat message, degrading any failure to the fixed fallback
/// string.
pub fn chat_or_fallback(service: &dyn TutorService, history: &[Message], message: &str) -> String {
    service
        .chat(history, message)
        .unwrap_or_else(|_| CHAT_FALLBACK.to_string())
}

/// The topic key the tutor is asked about for a classified statement.
pub fn topic_for(statement: &Statement) -> &'static str {
    match statement {
        Statement::Skip => "comments",
        Statement::DeclareInt { .. } => "int declaration",
        Statement::DeclarePointer { .. } => "pointer declaration",
        Statement::AssignAddress { .. } => "address-of operator",
        Statement::WriteDeref { .. } => "dereference write",
        Statement::DeclareFromDeref { .. } => "dereference read",
        Statement::PointerArith { .. } => "pointer arithmetic",
    }
}

/// Offline tutor with canned explanations, keyed by topic.
pub struct CannedTutor {
    topics: FxHashMap<&'static str, &'static str>,
}

impl CannedTutor {
    pub fn new() -> Self {
        let mut topics = FxHashMap::default();
        topics.insert(
            "comments",
            "Blank lines and // comments are skipped: they change nothing in memory.",
        );
        topics.insert(
            "int declaration",
            "int x = 5; reserves a 4-byte slot on the stack and stores 5 in it. \
             Without an initialiser the simulator stores 0 (real C leaves it unspecified).",
        );
        topics.insert(
            "pointer declaration",
            "int *p; reserves a slot that will hold an address rather than a number. \
             Until assigned, the pointer is unset and dereferencing it is a fault.",
        );
        topics.insert(
            "address-of operator",
            "p = &x; stores the address of x in p. The arrow in the memory view shows \
             p pointing at x's slot.",
        );
        topics.insert(
            "dereference write",
            "*p = 7; follows the address stored in p and writes 7 into that slot. \
             If p is unset this is a segmentation fault.",
        );
        topics.insert(
            "dereference read",
            "int y = *p; follows p and copies the pointed-at value into a fresh \
             variable y. y does not track later changes to the original.",
        );
        topics.insert(
            "syntax",
            "That line is outside the supported subset: only simple int/pointer \
             declarations, &, and * statements are recognised, one per line.",
        );
        topics.insert(
            "pointer arithmetic",
            "*p = *p + 5; reads through p, adds 5, and writes the result back \
             through the same pointer. Only this matching-operand form is supported.",
        );
        CannedTutor { topics }
    }
}

impl Default for CannedTutor {
    fn default() -> Self {
        Self::new()
    }
}

impl TutorService for CannedTutor {
    fn name(&self) -> &'static str {
        "canned"
    }

    fn explain(&self, topic: &str, _context: Option<&str>) -> Result<String, TutorError> {
        self.topics
            .get(topic)
            .map(|text| text.to_string())
            .ok_or_else(|| TutorError {
                message: format!("no canned explanation for '{}'", topic),
            })
    }

    fn chat(&self, _history: &[Message], message: &str) -> Result<String, TutorError> {
        // Canned backend answers chat by topic lookup on the raw message.
        self.explain(message.trim(), None)
    }
}
