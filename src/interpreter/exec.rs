//! Pure statement execution
//!
//! [`execute`] applies one classified [`Statement`] to a copy of the
//! current memory and returns the new memory plus a human-readable log
//! line.  The input memory is never mutated, so history entries never
//! alias each other.
//!
//! [`run_line`] is the classification boundary: it classifies and
//! executes one raw source line and converts any [`ExecError`] into an
//! error-flagged [`StepLog`] on unchanged memory.  No fault escapes
//! past it.

use super::errors::ExecError;
use super::statement::{classify, Statement};
use crate::memory::{Memory, Value, VarKind};

/// One log line of the execution terminal, flagged for styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepLog {
    pub message: String,
    pub is_error: bool,
}

impl StepLog {
    pub fn success(message: impl Into<String>) -> Self {
        StepLog {
            message: message.into(),
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        StepLog {
            message: message.into(),
            is_error: true,
        }
    }
}

/// Resolve `name` as a set pointer and return its held address.
fn pointer_address(memory: &Memory, name: &str) -> Result<u64, ExecError> {
    let var = memory.get(name).ok_or_else(|| ExecError::UnknownVariable {
        name: name.to_string(),
    })?;
    match var.value.as_addr() {
        Some(addr) => Ok(addr),
        None => Err(ExecError::NullDereference {
            name: name.to_string(),
        }),
    }
}

/// Apply one statement to a copy of `memory`.
///
/// Returns the updated memory and the success log line; any failure
/// leaves the caller's memory untouched.
pub fn execute(statement: &Statement, memory: &Memory) -> Result<(Memory, String), ExecError> {
    let mut mem = memory.clone();

    let log = match statement {
        Statement::Skip => "Skipped comment/empty line.".to_string(),

        Statement::DeclareInt { name, init } => {
            let value = init.unwrap_or(0);
            let address = mem.allocate(name, VarKind::Int, Value::Int(value))?;
            match init {
                Some(n) => format!("Allocated int '{}' = {} at 0x{:X}", name, n, address),
                None => format!("Allocated int '{}' at 0x{:X}", name, address),
            }
        }

        Statement::DeclarePointer { name } => {
            let address = mem.allocate(name, VarKind::IntPointer, Value::Null)?;
            format!("Allocated ptr '{}' at 0x{:X}", name, address)
        }

        Statement::AssignAddress { pointer, target } => {
            match mem.get(pointer) {
                Some(var) if var.is_pointer() => {}
                _ => {
                    return Err(ExecError::NotAPointer {
                        name: pointer.to_string(),
                    })
                }
            }
            let target_address = mem
                .get(target)
                .ok_or_else(|| ExecError::UnknownVariable {
                    name: target.to_string(),
                })?
                .address;

            // Both lookups succeeded above.
            if let Some(var) = mem.get_mut(pointer) {
                var.value = Value::Addr(target_address);
            }
            format!(
                "Assigned &{} (0x{:X}) to {}",
                target, target_address, pointer
            )
        }

        Statement::WriteDeref { pointer, literal } => {
            let address = pointer_address(&mem, pointer)?;
            let target = mem
                .at_address_mut(address)
                .ok_or(ExecError::InvalidAddress { address })?;
            target.value = Value::Int(*literal);
            format!("Wrote {} to address 0x{:X}", literal, address)
        }

        Statement::DeclareFromDeref { name, pointer } => {
            let address = pointer_address(&mem, pointer)?;
            // Tolerant default: a dangling (but non-null) pointer reads 0.
            let value = mem
                .at_address(address)
                .and_then(|target| target.value.as_int())
                .unwrap_or(0);
            mem.allocate(name, VarKind::Int, Value::Int(value))?;
            format!("Allocated '{}' = {} (read from *{})", name, value, pointer)
        }

        Statement::PointerArith {
            lhs,
            rhs,
            op,
            amount,
        } => {
            if lhs != rhs {
                return Err(ExecError::UnsupportedOperands {
                    lhs: lhs.to_string(),
                    rhs: rhs.to_string(),
                });
            }
            let address = pointer_address(&mem, lhs)?;
            let target = mem
                .at_address_mut(address)
                .ok_or(ExecError::InvalidAddress { address })?;
            let old = target.value.as_int().unwrap_or(0);
            let new = op.apply(old, *amount);
            target.value = Value::Int(new);
            format!(
                "Calculated {} {} {}. Wrote {} to 0x{:X}.",
                old,
                op.symbol(),
                amount,
                new,
                address
            )
        }
    };

    Ok((mem, log))
}

/// Classify and execute one raw source line against `memory`.
///
/// This is where the propagation policy lives: every [`ExecError`] is
/// converted into an error-flagged log on an unchanged memory, so the
/// stepper can always continue.
pub fn run_line(line: &str, memory: &Memory) -> (Memory, StepLog) {
    match classify(line).and_then(|statement| execute(&statement, memory)) {
        Ok((mem, log)) => (mem, StepLog::success(log)),
        Err(e) => (memory.clone(), StepLog::error(format!("Error: {}", e))),
    }
}
