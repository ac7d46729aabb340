//! `ntc` — run the full Jack-to-Hack pipeline over a directory in one shot.

use clap::{CommandFactory, Parser as ClapParser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use std::process;

use ntc::{NtcConfig, PipelineResult};

#[derive(ClapParser)]
#[command(name = "ntc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compile a directory of Jack sources straight to a Hack binary", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile, translate, and assemble a directory of .jack sources
    Build {
        /// Directory containing .jack source files
        dir: PathBuf,

        /// Project configuration file (TOML)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Prepend the bootstrap sequence (default: on)
        #[arg(long, conflicts_with = "no_bootstrap")]
        bootstrap: bool,

        /// Omit the bootstrap sequence
        #[arg(long)]
        no_bootstrap: bool,
    },

    /// Generate shell completion scripts
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            dir,
            config,
            bootstrap,
            no_bootstrap,
        } => {
            let cli_override = if bootstrap {
                Some(true)
            } else if no_bootstrap {
                Some(false)
            } else {
                None
            };
            run_build(&dir, config.as_deref(), cli_override);
        }
        Commands::Completions { shell } => run_completions(shell),
    }
}

fn run_build(dir: &PathBuf, config_path: Option<&std::path::Path>, cli_override: Option<bool>) {
    toolchain_core::logging::init();

    let mut config = match config_path {
        Some(path) => match NtcConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        },
        None => NtcConfig::default(),
    };
    config.merge_cli_override(cli_override);

    // A lone directory of sources defaults to bootstrapped; an explicit
    // `false` from the file or CLI is honored either way.
    let bootstrap = config.bootstrap.unwrap_or(true);

    match ntc::run(dir, bootstrap) {
        Ok(PipelineResult {
            vm_files,
            asm_file,
            hack_file,
        }) => {
            eprintln!(
                "compiled {} file(s) -> {} -> {}",
                vm_files.len(),
                asm_file.display(),
                hack_file.display()
            );
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

fn run_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "ntc", &mut io::stdout());
}
