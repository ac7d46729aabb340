//! VM-to-Hack-assembly translator.
//!
//! - [`parser`] — parses `.vm` source text into [`toolchain_core::VmInstruction`]s.
//! - [`codewriter`] — lowers instructions to Hack assembly, including the
//!   full `call`/`function`/`return` calling convention.

pub mod codewriter;
pub mod parser;

pub use codewriter::CodeWriter;

use std::fs;
use std::path::{Path, PathBuf};

use toolchain_core::ToolError;

fn file_base(path: &Path) -> Result<String, ToolError> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .ok_or_else(|| ToolError::Usage(format!("{}: not a valid file name", path.display())))
}

/// Translate a single `.vm` file to its sibling `.asm` file. No bootstrap is
/// emitted (spec.md §6: single-file invocation assumes no `Sys.init`
/// convention).
pub fn translate_file(path: &Path) -> Result<PathBuf, ToolError> {
    let source = fs::read_to_string(path)?;
    let instructions = parser::parse(&source)
        .map_err(|e| ToolError::Malformed(format!("{}: {e}", path.display())))?;

    let out_path = path.with_extension("asm");
    let out_file = fs::File::create(&out_path)?;
    let mut writer = CodeWriter::new(out_file);
    writer.set_file_base(&file_base(path)?);
    for instr in &instructions {
        writer.write_instruction(instr)?;
    }
    writer.flush()?;
    Ok(out_path)
}

/// Translate every `.vm` file directly inside `dir` into one `.asm` file
/// named after the directory, always prepending the bootstrap sequence
/// (spec.md §6's directory-invocation contract for the standalone
/// `vmtranslate` binary).
pub fn translate_dir(dir: &Path) -> Result<PathBuf, ToolError> {
    translate_dir_with_options(dir, true)
}

/// Same as [`translate_dir`] but with explicit control over whether the
/// bootstrap sequence is prepended — used by `ntc`, which lets a project's
/// config file or `--no-bootstrap` flag opt out even for a directory.
pub fn translate_dir_with_options(dir: &Path, bootstrap: bool) -> Result<PathBuf, ToolError> {
    let mut vm_files: Vec<PathBuf> = fs::read_dir(dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|e| e.path())
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("vm"))
        .collect();
    vm_files.sort();

    if vm_files.is_empty() {
        return Err(ToolError::Usage(format!(
            "no .vm files found in {}",
            dir.display()
        )));
    }

    let dir_name = dir
        .file_name()
        .and_then(|s| s.to_str())
        .ok_or_else(|| ToolError::Usage(format!("{}: not a valid directory name", dir.display())))?;
    let out_path = dir.join(format!("{dir_name}.asm"));
    let out_file = fs::File::create(&out_path)?;
    let mut writer = CodeWriter::new(out_file);
    if bootstrap {
        writer.write_bootstrap()?;
    }

    for path in &vm_files {
        tracing::debug!(file = %path.display(), "translating");
        let source = fs::read_to_string(path)?;
        let instructions = parser::parse(&source)
            .map_err(|e| ToolError::Malformed(format!("{}: {e}", path.display())))?;
        writer.set_file_base(&file_base(path)?);
        for instr in &instructions {
            writer.write_instruction(instr)?;
        }
    }
    writer.flush()?;
    Ok(out_path)
}
