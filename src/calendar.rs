//! Season calendar selection.

use tracing::debug;

use crate::error::Error;
use crate::models::{Calendar, Race};

/// The race flagged by the backend as the next one to run.
pub fn next_race(calendar: &Calendar) -> Result<&Race, Error> {
    if calendar.races.is_empty() {
        return Err(Error::EmptyInput);
    }

    calendar
        .races
        .iter()
        .find(|race| race.is_next_race)
        .ok_or(Error::NoUpcomingRace)
}

/// Every race still to run, in calendar order. The backend omits
/// `next_race_round` once the season is over.
pub fn remaining_races(calendar: &Calendar) -> Result<Vec<&Race>, Error> {
    if calendar.races.is_empty() {
        return Err(Error::EmptyInput);
    }

    let next_round = calendar.next_race_round.ok_or(Error::NoUpcomingRace)?;

    let remaining: Vec<&Race> = calendar
        .races
        .iter()
        .filter(|race| race.round >= next_round)
        .collect();

    if remaining.is_empty() {
        return Err(Error::NoUpcomingRace);
    }

    debug!(count = remaining.len(), "remaining races selected");
    Ok(remaining)
}
