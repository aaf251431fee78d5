//! Snapshots and execution history
//!
//! A [`Snapshot`] is the full simulator state after executing zero or
//! one source line: the memory, one log line, the source line that
//! produced it, and the derived pointer edges.  [`History`] is the
//! append-only sequence of snapshots from run start onward; prior
//! entries are never rewritten, which is what makes the rewind view
//! safe.

use crate::interpreter::exec::StepLog;
use crate::memory::{Memory, Value};
use rustc_hash::FxHashMap;

/// A derived pointer arrow: drawn when a pointer's value equals a live
/// variable's address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerEdge {
    /// Name of the pointer variable.
    pub from: String,
    /// Name of the pointee variable.
    pub to: String,
}

/// One variable "card" of the rendering contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarCard {
    pub name: String,
    /// Hex-formatted address, e.g. `0x100`.
    pub address: String,
    /// Kind tag, `int` or `int*`.
    pub kind: String,
    /// Display value: decimal for ints, hex for set pointers, `?` for
    /// an unset pointer.
    pub value: String,
    pub is_pointer: bool,
}

/// Simulator state after executing zero or one source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub memory: Memory,
    pub log: StepLog,
    /// Index of the source line that produced this snapshot; `None`
    /// for the synthetic ready snapshot.
    pub line: Option<usize>,
    pub edges: Vec<PointerEdge>,
}

impl Snapshot {
    /// The synthetic state before any line has executed.
    pub fn ready() -> Self {
        Snapshot {
            memory: Memory::new(),
            log: StepLog::success("Ready to run."),
            line: None,
            edges: Vec::new(),
        }
    }

    /// Build a snapshot for `line`, deriving the pointer edges from
    /// the resulting memory.
    pub fn after_line(memory: Memory, log: StepLog, line: usize) -> Self {
        let edges = derive_edges(&memory);
        Snapshot {
            memory,
            log,
            line: Some(line),
            edges,
        }
    }

    /// The variable-card view consumed by the presentation layer.
    pub fn cards(&self) -> Vec<VarCard> {
        self.memory
            .slots()
            .iter()
            .map(|v| VarCard {
                name: v.name.clone(),
                address: format!("0x{:X}", v.address),
                kind: v.kind.to_string(),
                value: v.value.display(),
                is_pointer: v.is_pointer(),
            })
            .collect()
    }
}

/// Derive one edge per pointer whose value matches a live variable's
/// address.
pub fn derive_edges(memory: &Memory) -> Vec<PointerEdge> {
    let by_address: FxHashMap<u64, &str> = memory
        .slots()
        .iter()
        .map(|v| (v.address, v.name.as_str()))
        .collect();

    memory
        .slots()
        .iter()
        .filter(|v| v.is_pointer())
        .filter_map(|v| match v.value {
            Value::Addr(addr) => by_address.get(&addr).map(|target| PointerEdge {
                from: v.name.clone(),
                to: target.to_string(),
            }),
            _ => None,
        })
        .collect()
}

/// Append-only execution history.
///
/// Created anew on every (re)start; seeded with the ready snapshot;
/// each step appends and never rewrites prior entries.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    /// A fresh history holding only the ready snapshot.
    pub fn new() -> Self {
        History {
            snapshots: vec![Snapshot::ready()],
        }
    }

    /// Append a snapshot.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    /// Get a snapshot by index.
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// The most recent snapshot.  The ready snapshot guarantees one
    /// always exists.
    pub fn latest(&self) -> &Snapshot {
        self.snapshots
            .last()
            .expect("history always holds the ready snapshot")
    }

    /// Number of snapshots, including the ready snapshot.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
