//! Jack-to-VM compiler: tokenizer, two-tier symbol table, `VMWriter`, and
//! the recursive-descent `CompileEngine`.
//!
//! - [`tokenizer`] — lexes a `.jack` source string into [`toolchain_core::Token`]s.
//! - [`vmwriter`] — appends VM bytecode mnemonics to a sink.
//! - [`compile_engine`] — drives the two against a two-tier
//!   [`toolchain_core::SymbolTable`] to lower one class to VM code.

pub mod compile_engine;
pub mod tokenizer;
pub mod vmwriter;

pub use compile_engine::CompileEngine;
pub use tokenizer::Tokenizer;
pub use vmwriter::VmWriter;

use std::fs;
use std::path::Path;

use toolchain_core::ToolError;

/// Compile a single `.jack` file to its sibling `.vm` file.
pub fn compile_file(path: &Path) -> Result<(), ToolError> {
    let source = fs::read_to_string(path)?;
    let out_path = path.with_extension("vm");
    let out_file = fs::File::create(&out_path)?;
    let mut engine = CompileEngine::new(&source, out_file);
    engine
        .compile_class()
        .map_err(|e| ToolError::Malformed(format!("{}: {e}", path.display())))
}

/// Compile every `.jack` file directly inside `dir` (non-recursive, matching
/// the reference analyzer's directory handling).
pub fn compile_dir(dir: &Path) -> Result<Vec<std::path::PathBuf>, ToolError> {
    let mut compiled = Vec::new();
    let mut entries: Vec<_> = fs::read_dir(dir)?.collect::<Result<_, _>>()?;
    entries.sort_by_key(|e| e.path());
    for entry in entries {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) == Some("jack") {
            tracing::debug!(file = %path.display(), "compiling");
            compile_file(&path)?;
            compiled.push(path.with_extension("vm"));
        }
    }
    if compiled.is_empty() {
        return Err(ToolError::Usage(format!(
            "no .jack files found in {}",
            dir.display()
        )));
    }
    Ok(compiled)
}
