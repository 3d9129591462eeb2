use anyhow::Result;
use console::{Term, style};
use serde::Serialize;

use crate::matcher::Match;
use crate::models::{Constructor, Driver, QualifyingResult, Race, RaceResult};
use crate::speech;

pub struct Output {
    term: Term,
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self {
            term: Term::stdout(),
            json,
        }
    }

    fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let output = serde_json::to_string_pretty(value)?;
        self.term.write_line(&output)?;
        Ok(())
    }

    fn print_match_meta<R>(&self, matched: &Match<R>) -> Result<()> {
        match matched.distance {
            Some(distance) => self
                .term
                .write_line(&format!("  Distance: {distance}"))?,
            None => self.term.write_line("  Matched by car number")?,
        }
        Ok(())
    }

    pub fn no_match(&self, what: &str) -> Result<()> {
        if self.json {
            return self.print_json(&serde_json::json!({ "match": null }));
        }

        self.term.write_line(&format!(
            "{}",
            style(format!("No unambiguous {what} match.")).yellow()
        ))?;
        Ok(())
    }

    pub fn driver(&self, matched: &Match<Driver>) -> Result<()> {
        if self.json {
            return self.print_json(matched);
        }

        let driver = &matched.record;
        self.term.write_line(&format!(
            "{} {} {}",
            style("Matched driver:").green(),
            style(&driver.forename).cyan().bold(),
            style(&driver.surname).cyan().bold()
        ))?;
        self.term
            .write_line(&format!("  Championship position: {}", matched.position))?;
        if let Some(points) = driver.points {
            self.term.write_line(&format!("  Points: {points}"))?;
        }
        self.print_match_meta(matched)
    }

    pub fn team(&self, matched: &Match<Constructor>) -> Result<()> {
        if self.json {
            return self.print_json(matched);
        }

        let team = &matched.record;
        self.term.write_line(&format!(
            "{} {}",
            style("Matched team:").green(),
            style(&team.name).cyan().bold()
        ))?;
        self.term
            .write_line(&format!("  Championship position: {}", matched.position))?;
        if let Some(points) = team.points {
            self.term.write_line(&format!("  Points: {points}"))?;
        }
        self.print_match_meta(matched)
    }

    pub fn race(&self, matched: &Match<Race>) -> Result<()> {
        if self.json {
            return self.print_json(matched);
        }

        let race = &matched.record;
        self.term.write_line(&format!(
            "{} {}",
            style("Matched race:").green(),
            style(&race.name).cyan().bold()
        ))?;
        self.term
            .write_line(&format!("  Round {} on {}", race.round, race.date))?;
        if let Some(circuit) = &race.circuit_name {
            self.term.write_line(&format!(
                "  Circuit: {circuit}, {}, {}",
                race.circuit_location, race.circuit_country
            ))?;
        }
        self.print_match_meta(matched)
    }

    pub fn race_result(&self, matched: &Match<RaceResult>) -> Result<()> {
        if self.json {
            return self.print_json(matched);
        }

        let result = &matched.record;
        self.term.write_line(&format!(
            "{} {} {}",
            style("Matched finisher:").green(),
            style(&result.forename).cyan().bold(),
            style(&result.surname).cyan().bold()
        ))?;
        self.term
            .write_line(&format!("  Finished: P{}", matched.position))?;
        if let Some(grid) = result.grid {
            self.term.write_line(&format!("  Started: P{grid}"))?;
        }
        if let Some(points) = result.points {
            self.term.write_line(&format!("  Points: {points}"))?;
        }
        self.print_match_meta(matched)
    }

    pub fn qualifying(&self, matched: &Match<QualifyingResult>) -> Result<()> {
        if self.json {
            return self.print_json(matched);
        }

        let result = &matched.record;
        self.term.write_line(&format!(
            "{} {} {}",
            style("Matched qualifier:").green(),
            style(&result.forename).cyan().bold(),
            style(&result.surname).cyan().bold()
        ))?;
        self.term
            .write_line(&format!("  Qualified: P{}", matched.position))?;
        match speech::spoken_qualifying_lap(result) {
            Some(lap) => self.term.write_line(&format!("  Best lap: {lap}"))?,
            None => self
                .term
                .write_line(&format!("  Best lap: {}", style("no time set").dim()))?,
        }
        self.print_match_meta(matched)
    }

    pub fn year(&self, year: Option<i32>) -> Result<()> {
        match year {
            Some(year) => self.term.write_line(&format!(
                "{} {}",
                style("Valid year:").green(),
                style(year).cyan().bold()
            ))?,
            None => self
                .term
                .write_line(&format!("{}", style("Not a usable year.").yellow()))?,
        }
        Ok(())
    }

    pub fn next_race(&self, race: &Race) -> Result<()> {
        if self.json {
            return self.print_json(race);
        }

        self.term.write_line(&format!(
            "{} {}",
            style("Next race:").green(),
            style(&race.name).cyan().bold()
        ))?;
        self.term.write_line(&format!(
            "  Round {} on {} (spoken: {})",
            race.round,
            race.date,
            speech::spoken_race_date(race.date)
        ))?;
        Ok(())
    }

    pub fn remaining(&self, races: &[&Race]) -> Result<()> {
        if self.json {
            return self.print_json(races);
        }

        self.term.write_line(&format!(
            "{} {}",
            style(races.len()).cyan().bold(),
            style("races remaining:").green()
        ))?;
        for race in races {
            self.term
                .write_line(&format!("  Round {}: {} ({})", race.round, race.name, race.date))?;
        }
        Ok(())
    }
}
