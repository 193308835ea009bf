use std::io::IsTerminal;

use anyhow::Result;
use clap::{Parser, Subcommand};
use modeldb::commands::{inspect_command, plan_command};

/// Inspect database manifests and migration plans.
///
/// This CLI is a thin wrapper around `modeldb-core` (exposed in code as
/// `modeldb_core`).
#[derive(Parser, Debug)]
#[command(
    name = "modeldb",
    version,
    about = "Database manifest and migration tooling",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the declaration and migrations carried by a manifest.
    Inspect {
        /// Path to the manifest (`.json`, otherwise parsed as YAML).
        #[arg(long)]
        manifest: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show how a database stored at `--from` reaches the target version.
    Plan {
        /// Path to the manifest (`.json`, otherwise parsed as YAML).
        #[arg(long)]
        manifest: String,

        /// Schema version currently on disk.
        #[arg(long, allow_negative_numbers = true)]
        from: i32,

        /// Target version. Defaults to the manifest version.
        #[arg(long, allow_negative_numbers = true)]
        to: Option<i32>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Inspect { manifest, json } => inspect_command(&manifest, json)?,
        Command::Plan { manifest, from, to, json } => plan_command(&manifest, from, to, json)?,
    }

    Ok(())
}
