//! Statement interpreter and stepper
//!
//! This module provides the execution logic of the simulator:
//! - [`statement`]: line tokeniser and the tagged statement grammar
//! - [`exec`]: pure statement execution against a memory snapshot
//! - [`stepper`]: the run/edit state machine and history driver
//! - [`errors`]: the non-fatal execution error taxonomy
//!
//! # Execution Model
//!
//! Each source line is classified and executed independently against
//! the latest snapshot's memory; there is no cross-line lookahead.
//! Every error is caught at the classification boundary
//! ([`exec::run_line`]) and converted into an error-flavoured log line
//! on an otherwise-unchanged snapshot, so stepping always continues
//! past a faulted line.

pub mod errors;
pub mod exec;
pub mod statement;
pub mod stepper;
