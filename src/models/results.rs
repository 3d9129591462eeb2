use serde::{Deserialize, Serialize};

use super::driver::name_distance;
use crate::matcher::{EntityKind, Numbered, Scoreable};

/// One classified finisher from the last-race results payload. Looked up
/// with the same driver semantics as championship standings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceResult {
    #[serde(rename = "driver_forename")]
    pub forename: String,
    #[serde(rename = "driver_surname")]
    pub surname: String,
    #[serde(
        rename = "driver_number",
        alias = "driver_num",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub number: Option<i64>,
    #[serde(rename = "race_grid", default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<i64>,
    #[serde(
        rename = "race_points",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub points: Option<f64>,
}

/// The last-race results payload envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceResults {
    pub results: Vec<RaceResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_race_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_race_year: Option<i32>,
}

/// One row of the last qualifying session's results. Lap strings arrive as
/// `M:SS.mmm` and are absent for sessions the driver did not reach.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualifyingResult {
    #[serde(rename = "driver_forename")]
    pub forename: String,
    #[serde(rename = "driver_surname")]
    pub surname: String,
    #[serde(
        rename = "driver_number",
        alias = "driver_num",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub number: Option<i64>,
    #[serde(
        rename = "qualifying_q1",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub q1: Option<String>,
    #[serde(
        rename = "qualifying_q2",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub q2: Option<String>,
    #[serde(
        rename = "qualifying_q3",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub q3: Option<String>,
}

/// The last-qualifying results payload envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualifyingResults {
    pub results: Vec<QualifyingResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_race_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_race_year: Option<i32>,
}

impl Scoreable for RaceResult {
    const KIND: EntityKind = EntityKind::Driver;

    fn blank_field(&self) -> Option<&'static str> {
        if self.forename.trim().is_empty() {
            Some("driver_forename")
        } else if self.surname.trim().is_empty() {
            Some("driver_surname")
        } else {
            None
        }
    }

    fn distance(&self, query: &str) -> Option<usize> {
        name_distance(&self.forename, &self.surname, query)
    }
}

impl Numbered for RaceResult {
    fn number(&self) -> Option<i64> {
        self.number
    }
}

impl Scoreable for QualifyingResult {
    const KIND: EntityKind = EntityKind::Driver;

    fn blank_field(&self) -> Option<&'static str> {
        if self.forename.trim().is_empty() {
            Some("driver_forename")
        } else if self.surname.trim().is_empty() {
            Some("driver_surname")
        } else {
            None
        }
    }

    fn distance(&self, query: &str) -> Option<usize> {
        name_distance(&self.forename, &self.surname, query)
    }
}

impl Numbered for QualifyingResult {
    fn number(&self) -> Option<i64> {
        self.number
    }
}
