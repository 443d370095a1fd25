//! # streamgen-cli
//!
//! Command-line tool for checking and expanding `#[create_async_stream]`
//! annotation sites without running a full build.
//!
//! ## Installation
//!
//! ```bash
//! cargo install streamgen-cli
//! ```
//!
//! ## Commands
//!
//! - `streamgen check <FILES>...` - Report every annotation site as valid or failed
//! - `streamgen expand <FILE>` - Print the generated code of every site
//! - `streamgen config validate` - Validate streamgen.toml
//! - `streamgen config show` - Print the effective configuration
//!
//! See `streamgen --help` for the full command reference.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use std::io;
use std::path::PathBuf;
use std::process;

mod commands;
mod config;
mod sites;
mod telemetry;
mod ui;

#[derive(Parser)]
#[command(name = "streamgen")]
#[command(about = "Streamgen CLI - Check and expand #[create_async_stream] sites", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to streamgen.toml (defaults to ./streamgen.toml when present)
    #[arg(short, long, global = true, env = "STREAMGEN_CONFIG")]
    config: Option<PathBuf>,

    /// Output as JSON (machine-readable format)
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose output
    #[arg(long, global = true)]
    verbose: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand every annotation site and report the ones that fail
    Check {
        /// Rust source files to scan
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Print the code generated for every annotation site in a file
    Expand {
        /// Rust source file to expand
        file: PathBuf,
    },

    /// Configuration management commands
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Validate the configuration file
    Validate,

    /// Print the effective configuration as TOML
    Show,
}

fn main() {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "streamgen", &mut io::stdout());
        return;
    }

    telemetry::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config_path = cli.config.as_deref();

    match command {
        Commands::Check { files } => commands::check::check(config_path, &files, cli.json),
        Commands::Expand { file } => commands::expand::expand(config_path, &file),
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Validate => commands::config::validate(config_path),
            ConfigCommands::Show => commands::config::show(config_path),
        },
    }
}
