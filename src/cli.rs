//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "freightcalc")]
#[command(version)]
#[command(about = "Road freight cost estimator with geocoded distances and calculation history")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Language override (en, pt). Uses config value if not specified.
    #[arg(long, global = true)]
    pub lang: Option<String>,

    /// History file override (defaults to the per-user data directory)
    #[arg(long, global = true)]
    pub history_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate the freight cost for a trip and record it
    Estimate {
        /// Origin place name
        #[arg(long, short = 'o')]
        origin: String,

        /// Final destination place name
        #[arg(long, short = 'd')]
        dest: String,

        /// Intermediate stops, in order (each adds a leg)
        #[arg(long)]
        via: Vec<String>,

        /// Number of axles on the vehicle (2-7 or 9)
        #[arg(long, short = 'a')]
        axles: u8,

        /// Price the return journey as well
        #[arg(long)]
        round_trip: bool,

        /// Skip the geocoding lookup and use this one-way distance instead
        #[arg(long)]
        distance_km: Option<f64>,

        /// Print the estimate without appending it to the history
        #[arg(long)]
        no_save: bool,
    },

    /// Show recorded calculations, most recent window by default
    History {
        /// Show at most this many records
        #[arg(long, short = 'n')]
        limit: Option<usize>,

        /// Show the entire history
        #[arg(long)]
        all: bool,
    },

    /// Aggregate statistics over the recorded amounts
    Stats {
        /// Consider the entire history instead of the recent window
        #[arg(long)]
        all: bool,
    },

    /// Delete every recorded calculation
    Clear {
        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Export the history as a CSV table
    Export {
        /// Output file (defaults to freight-history.csv in the current directory)
        #[arg(long, short = 'O')]
        output: Option<PathBuf>,

        /// Open the exported file with the system viewer
        #[arg(long)]
        open: bool,
    },
}
