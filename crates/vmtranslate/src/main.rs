use std::path::PathBuf;
use std::process;

use clap::Parser;

/// Translate VM bytecode to Hack assembly.
///
/// `path` may name a single `.vm` file (no bootstrap emitted) or a
/// directory of `.vm` files (bootstrap sequence prepended, output named
/// after the directory).
#[derive(Parser)]
#[command(name = "vmtranslate", version)]
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
    let out_path = if path.is_dir() {
        vmtranslate::translate_dir(path)?
    } else if path.extension().and_then(|e| e.to_str()) == Some("vm") {
        vmtranslate::translate_file(path)?
    } else {
        return Err(toolchain_core::ToolError::Usage(format!(
            "{}: not a .vm file or a directory",
            path.display()
        )));
    };
    tracing::info!(file = %out_path.display(), "translated");
    Ok(())
}
