//! Variable slots and the flat memory store
//!
//! [`Memory`] is an ordered collection of [`Variable`]s in declaration
//! order.  Lookups are linear: the collection stays small (one slot
//! per declared variable) and nothing depends on faster resolution.

use super::{Value, VarKind, ADDRESS_STRIDE, BASE_ADDRESS};
use crate::interpreter::errors::ExecError;

/// One allocated slot of the synthetic stack.
///
/// The name doubles as the slot's stable id: names are unique within a
/// run and redeclaration is a reported error, so no separate id field
/// is carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub kind: VarKind,
    pub value: Value,
    /// Synthetic address assigned at allocation time.
    pub address: u64,
}

impl Variable {
    /// Check if this slot is a pointer (set or not).
    pub fn is_pointer(&self) -> bool {
        self.kind == VarKind::IntPointer
    }
}

/// The flat, ordered variable store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Memory {
    slots: Vec<Variable>,
}

impl Memory {
    pub fn new() -> Self {
        Memory { slots: Vec::new() }
    }

    /// Allocate a new slot at the next address.
    ///
    /// The first slot lands at [`BASE_ADDRESS`]; every further slot is
    /// placed [`ADDRESS_STRIDE`] past the previous one, regardless of
    /// kind.  Fails without mutating anything if `name` is already
    /// taken.  Returns the assigned address.
    pub fn allocate(&mut self, name: &str, kind: VarKind, value: Value) -> Result<u64, ExecError> {
        if self.get(name).is_some() {
            return Err(ExecError::DuplicateName {
                name: name.to_string(),
            });
        }

        let address = match self.slots.last() {
            Some(last) => last.address + ADDRESS_STRIDE,
            None => BASE_ADDRESS,
        };

        self.slots.push(Variable {
            name: name.to_string(),
            kind,
            value,
            address,
        });

        Ok(address)
    }

    /// Resolve a slot by name.
    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.slots.iter().find(|v| v.name == name)
    }

    /// Resolve a slot by name, mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Variable> {
        self.slots.iter_mut().find(|v| v.name == name)
    }

    /// Resolve a slot by address.
    pub fn at_address(&self, address: u64) -> Option<&Variable> {
        self.slots.iter().find(|v| v.address == address)
    }

    /// Resolve a slot by address, mutably.
    pub fn at_address_mut(&mut self, address: u64) -> Option<&mut Variable> {
        self.slots.iter_mut().find(|v| v.address == address)
    }

    /// All slots in declaration order.
    pub fn slots(&self) -> &[Variable] {
        &self.slots
    }

    /// Number of allocated slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if nothing has been allocated yet.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
