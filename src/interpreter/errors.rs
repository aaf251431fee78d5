//! Execution error types for the statement interpreter
//!
//! This module defines [`ExecError`], which represents everything that
//! can go wrong while classifying or executing one source line.
//!
//! Unlike a real C runtime, no error here is fatal: every variant is
//! converted into an error-flavoured log line on an unchanged snapshot
//! at the classification boundary, and stepping continues past the
//! faulted line.

use std::fmt;

/// Errors produced by statement classification and execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecError {
    /// Redeclaration of an existing name.
    DuplicateName { name: String },

    /// Reference to a name with no allocated variable.
    UnknownVariable { name: String },

    /// Address-of assignment into a variable that is not pointer-typed.
    NotAPointer { name: String },

    /// Dereference of a pointer whose value is unset (the toy
    /// segmentation fault).
    NullDereference { name: String },

    /// Dereference through a pointer whose value matches no live
    /// variable's address.
    InvalidAddress { address: u64 },

    /// Compound pointer arithmetic with distinct pointer operands on
    /// the two sides.
    UnsupportedOperands { lhs: String, rhs: String },

    /// The line matches no known statement pattern; carries the line
    /// verbatim.
    Syntax { line: String },
}

impl fmt::Display for ExecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecError::DuplicateName { name } => {
                write!(f, "Variable '{}' already exists", name)
            }
            ExecError::UnknownVariable { name } => {
                write!(f, "Variable '{}' not found", name)
            }
            ExecError::NotAPointer { name } => {
                write!(f, "'{}' is not a valid pointer", name)
            }
            ExecError::NullDereference { name } => {
                write!(f, "Segmentation fault (*{} is NULL)", name)
            }
            ExecError::InvalidAddress { address } => {
                write!(f, "Memory access violation at 0x{:X}", address)
            }
            ExecError::UnsupportedOperands { lhs, rhs } => {
                write!(
                    f,
                    "Only `*p = *p + n` with matching operands is supported (got *{} and *{})",
                    lhs, rhs
                )
            }
            ExecError::Syntax { line } => {
                write!(f, "Syntax error or unsupported statement: {}", line)
            }
        }
    }
}

impl std::error::Error for ExecError {}
