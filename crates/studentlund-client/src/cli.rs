//! Command-line interface definition.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

/// studentlund - Student nation events in Lund
#[derive(Debug, Parser)]
#[command(name = "studentlund")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "STUDENTLUND_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v', global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show events for one day
    Day(FeedArgs),

    /// Show events for the week around a date
    Week(FeedArgs),

    /// Show events for the month around a date
    Month(FeedArgs),

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Options shared by the event commands.
#[derive(Debug, Clone, Default, Args)]
pub struct FeedArgs {
    /// Date to fetch (YYYY-MM-DD), defaults to today
    #[arg(long, short)]
    pub date: Option<NaiveDate>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Sort events by start and end time
    #[arg(long)]
    pub sort: bool,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Dump current configuration
    Dump,

    /// Show configuration file path
    Path,
}
