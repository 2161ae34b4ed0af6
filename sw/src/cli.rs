//! CLI argument parsing for streakwidget

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Layout, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "sw")]
#[command(author, version, about = "Habit streak widget state derivation", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Derive the render plan for a snapshot
    Derive {
        #[command(flatten)]
        input: InputArgs,

        /// Output format: text, json or yaml (default: from config)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Show the derived widget in the terminal
    Preview {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print the effective configuration
    Config,
}

/// Where the snapshot comes from and how to look at it
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Snapshot file (JSON, or YAML by extension); defaults to a fresh install
    #[arg(short, long)]
    pub snapshot: Option<PathBuf>,

    /// Treat the snapshot file as the host app's preference dictionary
    #[arg(short, long)]
    pub prefs: bool,

    /// Calendar date to derive for, YYYY-MM-DD (default: today)
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Layout preset: compact or hero (default: from config)
    #[arg(long)]
    pub layout: Option<Layout>,
}
