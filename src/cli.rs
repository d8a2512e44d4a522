use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};

use ctrlname::Convention;

use crate::commands;
use crate::logging;

#[derive(Parser, Debug)]
#[command(
    name = "ctrlname",
    version,
    about = "Derive metric and logger names for controllers"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the metrics (snake_case) and logger (kebab-case) names
    Derive(DeriveArgs),
    /// Check a name against a naming convention
    Check(CheckArgs),
}

#[derive(Args, Debug)]
pub(crate) struct DeriveArgs {
    /// Name fragments, in order (e.g. `Some Controller Name`)
    #[arg(required_unless_present = "manifest", conflicts_with = "manifest")]
    pub(crate) fragments: Vec<String>,
    /// TOML manifest with one `[[controller]]` table per controller
    #[arg(long)]
    pub(crate) manifest: Option<PathBuf>,
    /// Print a JSON array instead of plain text
    #[arg(long)]
    pub(crate) json: bool,
    /// Fail on blank or non-conforming names instead of printing them
    #[arg(long)]
    pub(crate) strict: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Candidate name
    pub(crate) name: String,
    /// Convention to check against: snake (metrics) or kebab (logger)
    #[arg(long, value_parser = Convention::from_str)]
    pub(crate) convention: Convention,
    /// Print a JSON report instead of plain text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;
    match cli.command {
        Commands::Derive(args) => commands::derive::cmd_derive(args),
        Commands::Check(args) => commands::check::cmd_check(args),
    }
}
