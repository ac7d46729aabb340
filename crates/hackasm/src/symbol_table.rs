//! Hack assembler symbol table: predefined registers plus the labels and
//! variables a program defines as it's assembled.
//!
//! Variables are allocated RAM addresses starting at 16, in first-use
//! order — the same convention `original_source/Project 6/assembler.cpp`'s
//! `symbolTableInit`/`VAR_ADDRESS` constant follows.

use std::collections::HashMap;

const FIRST_VARIABLE_ADDRESS: u16 = 16;

pub struct SymbolTable {
    map: HashMap<String, u16>,
    next_variable: u16,
}

impl SymbolTable {
    pub fn new() -> Self {
        let mut map = HashMap::new();
        map.insert("SP".to_string(), 0);
        map.insert("LCL".to_string(), 1);
        map.insert("ARG".to_string(), 2);
        map.insert("THIS".to_string(), 3);
        map.insert("THAT".to_string(), 4);
        map.insert("SCREEN".to_string(), 16384);
        map.insert("KBD".to_string(), 24576);
        for i in 0..16u16 {
            map.insert(format!("R{i}"), i);
        }
        SymbolTable {
            map,
            next_variable: FIRST_VARIABLE_ADDRESS,
        }
    }

    /// Record a `(LABEL)` pseudo-instruction's resolved address (the
    /// address of the instruction immediately following it).
    pub fn define_label(&mut self, name: &str, address: u16) {
        self.map.insert(name.to_string(), address);
    }

    pub fn get(&self, name: &str) -> Option<u16> {
        self.map.get(name).copied()
    }

    /// Assign the next free RAM address to a variable seen for the first
    /// time in an `@symbol` instruction.
    pub fn allocate_variable(&mut self, name: &str) -> u16 {
        let address = self.next_variable;
        self.next_variable += 1;
        self.map.insert(name.to_string(), address);
        address
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predefined_symbols_match_spec() {
        let t = SymbolTable::new();
        assert_eq!(t.get("SP"), Some(0));
        assert_eq!(t.get("LCL"), Some(1));
        assert_eq!(t.get("SCREEN"), Some(16384));
        assert_eq!(t.get("KBD"), Some(24576));
        assert_eq!(t.get("R15"), Some(15));
    }

    #[test]
    fn variables_allocate_from_sixteen_in_first_use_order() {
        let mut t = SymbolTable::new();
        assert_eq!(t.allocate_variable("i"), 16);
        assert_eq!(t.allocate_variable("sum"), 17);
        assert_eq!(t.get("i"), Some(16));
    }

    #[test]
    fn labels_can_shadow_nothing_already_predefined_in_practice() {
        let mut t = SymbolTable::new();
        t.define_label("LOOP", 4);
        assert_eq!(t.get("LOOP"), Some(4));
    }
}
