use std::path::PathBuf;
use std::process;

use clap::Parser;

/// Compile Jack source to VM bytecode.
///
/// `path` may name a single `.jack` file or a directory containing one or
/// more `.jack` files; each input produces a sibling `.vm` file.
#[derive(Parser)]
#[command(name = "jackc", version)]
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
        let compiled = jackc::compile_dir(path)?;
        tracing::info!(count = compiled.len(), "compiled");
    } else if path.extension().and_then(|e| e.to_str()) == Some("jack") {
        jackc::compile_file(path)?;
        tracing::info!(file = %path.display(), "compiled");
    } else {
        return Err(toolchain_core::ToolError::Usage(format!(
            "{}: not a .jack file or a directory",
            path.display()
        )));
    }
    Ok(())
}
