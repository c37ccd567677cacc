//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all
//! deplens commands, using clap's derive API.
//!
//! ## Commands
//!
//! - `scan`: Extract module dependencies from source files
//! - `offline-count`: Print the number of records pending in the offline queue
//! - `init`: Initialize a deplens configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Scan(cmd)) => cmd.args.common.verbose,
            Some(Command::OfflineCount(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct ScanArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Emit the report as JSON instead of the human-readable listing
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    #[command(flatten)]
    pub args: ScanArgs,
}

#[derive(Debug, Parser)]
pub struct OfflineCountArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Path to the offline queue file (overrides config file)
    #[arg(long)]
    pub queue_file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct OfflineCountCommand {
    #[command(flatten)]
    pub args: OfflineCountArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract module dependencies from source files
    Scan(ScanCommand),
    /// Print the number of records pending in the offline queue
    OfflineCount(OfflineCountCommand),
    /// Initialize a new .deplensrc.json configuration file
    Init,
}
