//! Chains `jackc` → `vmtranslate` → `hackasm` over one directory of `.jack`
//! sources, the three-command dance spec.md §6 otherwise requires.

use std::path::{Path, PathBuf};

use toolchain_core::ToolError;

pub struct PipelineResult {
    pub vm_files: Vec<PathBuf>,
    pub asm_file: PathBuf,
    pub hack_file: PathBuf,
}

pub fn run(dir: &Path, bootstrap: bool) -> Result<PipelineResult, ToolError> {
    tracing::info!(dir = %dir.display(), "compiling Jack sources");
    let vm_files = jackc::compile_dir(dir)?;

    tracing::info!(count = vm_files.len(), "translating VM bytecode");
    let asm_file = vmtranslate::translate_dir_with_options(dir, bootstrap)?;

    tracing::info!(file = %asm_file.display(), "assembling");
    let hack_file = hackasm::assemble_file(&asm_file)?;

    Ok(PipelineResult {
        vm_files,
        asm_file,
        hack_file,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn pipeline_produces_a_hack_file_for_a_minimal_program() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("Main.jack"),
            "class Main { function void main() { do Sys.halt(); return; } }",
        )
        .unwrap();
        fs::write(
            dir.path().join("Sys.jack"),
            "class Sys { function void halt() { return; } \
             function void init() { do Main.main(); return; } }",
        )
        .unwrap();

        let result = run(dir.path(), true).unwrap();
        assert_eq!(result.vm_files.len(), 2);
        assert!(result.hack_file.exists());
        let hack = fs::read_to_string(&result.hack_file).unwrap();
        assert!(!hack.is_empty());
        for line in hack.lines() {
            assert_eq!(line.len(), 16);
            assert!(line.chars().all(|c| c == '0' || c == '1'));
        }
    }

    #[test]
    fn pipeline_rejects_an_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(dir.path(), true).is_err());
    }
}
