use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "paddock")]
#[command(about = "Resolve noisy voice queries against motorsport data", long_about = None)]
pub struct Cli {
    /// Path to a thresholds file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a driver from a championship standings payload
    Driver {
        /// Path to a drivers' standings JSON payload
        file: PathBuf,

        /// The transcribed driver name or car number
        query: String,

        /// Override the driver threshold
        #[arg(long)]
        threshold: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a team from a championship standings payload
    Team {
        /// Path to a constructors' standings JSON payload
        file: PathBuf,

        /// The transcribed team name
        query: String,

        /// Override the constructor threshold
        #[arg(long)]
        threshold: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a race from a calendar payload
    Race {
        /// Path to a calendar JSON payload
        file: PathBuf,

        /// The transcribed race, circuit, location, or country name
        query: String,

        /// Override the race threshold
        #[arg(long)]
        threshold: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a driver's finish from a race results payload
    Result {
        /// Path to a race results JSON payload
        file: PathBuf,

        /// The transcribed driver name or car number
        query: String,

        /// Override the driver threshold
        #[arg(long)]
        threshold: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a driver's qualifying lap from a qualifying results payload
    Quali {
        /// Path to a qualifying results JSON payload
        file: PathBuf,

        /// The transcribed driver name or car number
        query: String,

        /// Override the driver threshold
        #[arg(long)]
        threshold: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a year slot value
    Year {
        /// The transcribed year
        query: String,
    },

    /// Show the next race from a calendar payload
    Next {
        /// Path to a calendar JSON payload
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the races still to run from a calendar payload
    Remaining {
        /// Path to a calendar JSON payload
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
