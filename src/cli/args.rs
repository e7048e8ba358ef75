//! Command line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Watch Organizer - Sort your viewing history into movies and series
#[derive(Parser, Debug)]
#[command(name = "watch-organizer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the HTML report from a viewing-history CSV
    Organize {
        /// Viewing-history CSV (default: NetflixViewingHistory.csv)
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// Output path for the HTML report
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Export the organized history as JSON
    Export {
        /// Viewing-history CSV
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// Output path for the JSON file (default: stdout)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Show collection statistics
    Stats {
        /// Viewing-history CSV
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// Number of shows to list
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
}
