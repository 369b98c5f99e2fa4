// crates/wfp-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "wfp-cli")]
#[command(about = "Winnowing fingerprints for source files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fingerprint one or more files (wfp or jsonl output)
    Fingerprint(cmd::fingerprint::FingerprintArgs),

    /// Report per-stage counters for a file (normalize/gram/window/emit)
    Inspect(cmd::inspect::InspectArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Fingerprint(args) => cmd::fingerprint::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
    }
}
