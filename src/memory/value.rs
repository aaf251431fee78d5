//! Runtime value representation
//!
//! This module defines [`Value`], the tagged runtime value stored in a
//! variable slot, and [`VarKind`], the two declarable kinds.  Unlike
//! C's raw memory model, values are tagged and type-safe: a pointer
//! slot holds either a concrete address or [`Value::Null`], never
//! garbage bits.
//!
//! Integers are always set.  `int x;` default-initialises to 0, a
//! deliberate simplification of real C's unspecified value.

use std::fmt;

/// The two kinds a variable can be declared as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    Int,
    IntPointer,
}

impl fmt::Display for VarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VarKind::Int => write!(f, "int"),
            VarKind::IntPointer => write!(f, "int*"),
        }
    }
}

/// Runtime values stored in variable slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Value {
    /// A signed integer held by an `int` variable.
    Int(i64),
    /// A concrete address held by a set pointer.
    Addr(u64),
    /// An unset pointer.
    #[default]
    Null,
}

impl Value {
    /// Get the integer value, returns None if not an Int.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the held address, returns None if not a set pointer.
    pub fn as_addr(&self) -> Option<u64> {
        match self {
            Value::Addr(addr) => Some(*addr),
            _ => None,
        }
    }

    /// Check if this value is an unset pointer.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Display form used by the variable cards: decimal for ints, hex
    /// for set pointers, `?` for an unset pointer.
    pub fn display(&self) -> String {
        match self {
            Value::Int(n) => n.to_string(),
            Value::Addr(addr) => format!("0x{:X}", addr),
            Value::Null => "?".to_string(),
        }
    }
}
