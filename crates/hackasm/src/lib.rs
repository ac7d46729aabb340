//! Two-pass Hack assembler.
//!
//! - [`parser`] — classifies `.asm` source lines into A/C/L instructions.
//! - [`symbol_table`] — predefined symbols, labels, and variables.
//! - [`coder`] — `comp`/`dest`/`jump` mnemonic encoding.

pub mod coder;
pub mod parser;
pub mod symbol_table;

pub use parser::Instruction;
pub use symbol_table::SymbolTable;

use std::fs;
use std::path::{Path, PathBuf};

use toolchain_core::ToolError;

/// Assemble parsed instructions into newline-separated 16-bit binary lines.
///
/// Pass 1 walks the instruction list tracking the address each *real*
/// (A/C) instruction would occupy, recording each label's address without
/// itself advancing the address counter. Pass 2 re-walks the same list,
/// this time emitting a line per A/C instruction and resolving each
/// A-instruction's symbol: numeric literals encode directly; non-numeric
/// symbols resolve against the symbol table (predefined, then label),
/// falling back to allocating the next free variable address starting at
/// 16 when seen for the first time.
pub fn assemble(instructions: &[Instruction]) -> Result<String, ToolError> {
    let mut symbols = SymbolTable::new();

    let mut address = 0u16;
    for instr in instructions {
        match instr {
            Instruction::Label(name) => symbols.define_label(name, address),
            _ => address += 1,
        }
    }

    let mut out = String::new();
    for instr in instructions {
        match instr {
            Instruction::Label(_) => {}
            Instruction::A(symbol) => {
                let value = if let Ok(n) = symbol.parse::<u16>() {
                    n
                } else if let Some(n) = symbols.get(symbol) {
                    n
                } else {
                    symbols.allocate_variable(symbol)
                };
                out.push_str(&format!("0{value:015b}\n"));
            }
            Instruction::C { dest, comp, jump } => {
                out.push_str(&coder::encode_c_instruction(comp, dest, jump)?);
                out.push('\n');
            }
        }
    }
    Ok(out)
}

/// Assemble a single `.asm` file to its sibling `.hack` file.
pub fn assemble_file(path: &Path) -> Result<PathBuf, ToolError> {
    let source = fs::read_to_string(path)?;
    let instructions = parser::parse(&source)
        .map_err(|e| ToolError::Malformed(format!("{}: {e}", path.display())))?;
    let binary = assemble(&instructions)?;
    let out_path = path.with_extension("hack");
    fs::write(&out_path, binary)?;
    Ok(out_path)
}

/// Assemble every `.asm` file directly inside `dir` (non-recursive), each to
/// its own sibling `.hack` file, in directory-iteration order.
pub fn assemble_dir(dir: &Path) -> Result<Vec<PathBuf>, ToolError> {
    let mut entries: Vec<_> = fs::read_dir(dir)?.collect::<Result<_, _>>()?;
    entries.sort_by_key(|e| e.path());

    let mut assembled = Vec::new();
    for entry in entries {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) == Some("asm") {
            tracing::debug!(file = %path.display(), "assembling");
            assembled.push(assemble_file(&path)?);
        }
    }
    if assembled.is_empty() {
        return Err(ToolError::Usage(format!(
            "no .asm files found in {}",
            dir.display()
        )));
    }
    Ok(assembled)
}
