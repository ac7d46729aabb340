//! Two-tier Jack symbol table.
//!
//! Jack has exactly two static scopes in play at once: a class table (static
//! + field) that lives for one class compilation, and a subroutine table
//! (argument + local) that is reset at the start of every subroutine. There
//! is no general scope stack — `reset` replaces push/pop.

use std::collections::HashMap;

/// Storage kind of a declared variable; doubles as the VM segment it reads
/// and writes through (`None` only appears as the `kind_of` miss value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarKind {
    Static,
    Field,
    Argument,
    Local,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    pub name: String,
    pub ty: String,
    pub kind: VarKind,
    pub index: usize,
}

/// A single scope's worth of declarations, with one dense running index per
/// `VarKind`.
#[derive(Debug, Default)]
pub struct SymbolTable {
    entries: HashMap<String, SymbolEntry>,
    counters: [usize; 4],
}

fn counter_slot(kind: VarKind) -> Option<usize> {
    match kind {
        VarKind::Static => Some(0),
        VarKind::Field => Some(1),
        VarKind::Argument => Some(2),
        VarKind::Local => Some(3),
        VarKind::None => None,
    }
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new entry; the assigned index is the current running count
    /// for `kind`, which is then incremented. Defining the same name twice
    /// in one table is a caller error (the source compiler does not guard
    /// against it either — see spec.md §4.2) and simply overwrites.
    pub fn define(&mut self, name: &str, ty: &str, kind: VarKind) {
        let slot = counter_slot(kind).expect("define called with VarKind::None");
        let index = self.counters[slot];
        self.counters[slot] += 1;
        self.entries.insert(
            name.to_string(),
            SymbolEntry {
                name: name.to_string(),
                ty: ty.to_string(),
                kind,
                index,
            },
        );
    }

    pub fn var_count(&self, kind: VarKind) -> usize {
        let slot = match counter_slot(kind) {
            Some(s) => s,
            None => return 0,
        };
        self.counters[slot]
    }

    pub fn kind_of(&self, name: &str) -> VarKind {
        self.entries.get(name).map(|e| e.kind).unwrap_or(VarKind::None)
    }

    pub fn type_of(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(|e| e.ty.as_str())
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.entries.get(name).map(|e| e.index)
    }

    /// Clear all entries and zero every counter; used between subroutines.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.counters = [0; 4];
    }
}
