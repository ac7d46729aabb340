use std::path::PathBuf;
use std::process;

use clap::Parser;

/// Assemble Hack assembly (.asm) to 16-bit binary (.hack).
///
/// `path` may name a single `.asm` file or a directory containing one or
/// more `.asm` files; each input produces a sibling `.hack` file.
#[derive(Parser)]
#[command(name = "hackasm", version)]
struct Cli {
    path: PathBuf,
}

fn main() {
    toolchain_core::logging::init();
    let cli = Cli::parse();
    if let Err(e) = run(&cli.path) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(path: &PathBuf) -> Result<(), toolchain_core::ToolError> {
    if path.is_dir() {
        let assembled = hackasm::assemble_dir(path)?;
        tracing::info!(count = assembled.len(), "assembled");
    } else if path.extension().and_then(|e| e.to_str()) == Some("asm") {
        let out_path = hackasm::assemble_file(path)?;
        tracing::info!(file = %out_path.display(), "assembled");
    } else {
        return Err(toolchain_core::ToolError::Usage(format!(
            "{}: not a .asm file or a directory",
            path.display()
        )));
    }
    Ok(())
}
