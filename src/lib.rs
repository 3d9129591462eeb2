#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod calendar;
pub mod cli;
pub mod config;
pub mod error;
pub mod matcher;
pub mod models;
pub mod output;
pub mod speech;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

pub use error::Error;
pub use matcher::{Match, Numbered, Scoreable, find_by_number, find_entrant, find_unique, parse_year};

use cli::{Cli, Commands};
use config::Thresholds;
use models::{Calendar, ConstructorStandings, DriverStandings, QualifyingResults, RaceResults};
use output::Output;

fn load_payload<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

fn load_thresholds(path: Option<&Path>) -> Result<Thresholds> {
    match path {
        Some(path) => Thresholds::load(path),
        None => Ok(Thresholds::default()),
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let thresholds = load_thresholds(cli.config.as_deref())?;

    match cli.command {
        Commands::Driver {
            file,
            query,
            threshold,
            json,
        } => {
            let payload: DriverStandings = load_payload(&file)?;
            let matched = find_entrant(
                &payload.standings,
                &query,
                threshold.unwrap_or(thresholds.driver),
            )?;
            let output = Output::new(json);
            match matched {
                Some(matched) => output.driver(&matched),
                None => output.no_match("driver"),
            }
        }
        Commands::Team {
            file,
            query,
            threshold,
            json,
        } => {
            let payload: ConstructorStandings = load_payload(&file)?;
            let matched = find_unique(
                &payload.standings,
                &query,
                threshold.unwrap_or(thresholds.constructor),
            )?;
            let output = Output::new(json);
            match matched {
                Some(matched) => output.team(&matched),
                None => output.no_match("team"),
            }
        }
        Commands::Race {
            file,
            query,
            threshold,
            json,
        } => {
            let payload: Calendar = load_payload(&file)?;
            let matched = find_unique(
                &payload.races,
                &query,
                threshold.unwrap_or(thresholds.race),
            )?;
            let output = Output::new(json);
            match matched {
                Some(matched) => output.race(&matched),
                None => output.no_match("race"),
            }
        }
        Commands::Result {
            file,
            query,
            threshold,
            json,
        } => {
            let payload: RaceResults = load_payload(&file)?;
            let matched = find_entrant(
                &payload.results,
                &query,
                threshold.unwrap_or(thresholds.driver),
            )?;
            let output = Output::new(json);
            match matched {
                Some(matched) => output.race_result(&matched),
                None => output.no_match("driver"),
            }
        }
        Commands::Quali {
            file,
            query,
            threshold,
            json,
        } => {
            let payload: QualifyingResults = load_payload(&file)?;
            let matched = find_entrant(
                &payload.results,
                &query,
                threshold.unwrap_or(thresholds.driver),
            )?;
            let output = Output::new(json);
            match matched {
                Some(matched) => output.qualifying(&matched),
                None => output.no_match("driver"),
            }
        }
        Commands::Year { query } => Output::new(false).year(parse_year(&query)),
        Commands::Next { file, json } => {
            let payload: Calendar = load_payload(&file)?;
            let race = calendar::next_race(&payload)?;
            Output::new(json).next_race(race)
        }
        Commands::Remaining { file, json } => {
            let payload: Calendar = load_payload(&file)?;
            let races = calendar::remaining_races(&payload)?;
            Output::new(json).remaining(&races)
        }
    }
}
