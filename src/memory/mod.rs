//! Synthetic stack memory model
//!
//! This module provides the flat memory model backing the simulator:
//! - [`value::Value`]: tagged runtime values (`Int`, `Addr`, `Null`)
//! - [`value::VarKind`]: the two declarable kinds, `int` and `int*`
//! - [`vars::Variable`]: one allocated slot (name, kind, value, address)
//! - [`vars::Memory`]: the ordered variable collection with allocation
//!
//! # Address Assignment
//!
//! Addresses are synthetic: the first declaration lands at
//! [`BASE_ADDRESS`] and every further declaration is placed
//! [`ADDRESS_STRIDE`] bytes after the previous one, regardless of the
//! declared kind.  There is no deallocation, so addresses are never
//! reused within a run.

pub mod value;
pub mod vars;

pub use value::{Value, VarKind};
pub use vars::{Memory, Variable};

/// Address handed to the first declaration of a run.
pub const BASE_ADDRESS: u64 = 0x100;

/// Distance between consecutively declared variables.
pub const ADDRESS_STRIDE: u64 = 4;
