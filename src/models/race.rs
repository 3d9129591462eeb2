use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use strsim::levenshtein;

use crate::matcher::{EntityKind, Scoreable};

/// One race calendar entry from the info endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Race {
    #[serde(rename = "race_name")]
    pub name: String,
    #[serde(rename = "race_date")]
    pub date: Date,
    #[serde(rename = "race_round")]
    pub round: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub circuit_name: Option<String>,
    pub circuit_ref: String,
    pub circuit_location: String,
    pub circuit_country: String,
    #[serde(default)]
    pub is_next_race: bool,
}

/// The full calendar payload: the season's races plus next-race bookkeeping.
/// `next_race_round` is absent once the season is over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calendar {
    #[serde(rename = "calendar")]
    pub races: Vec<Race>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_race_round: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_race_date: Option<Date>,
}

impl Race {
    /// Race name with its trailing two words dropped — conventionally
    /// "Grand Prix", leaving the part people actually say.
    fn short_name(&self) -> String {
        let words: Vec<&str> = self.name.split_whitespace().collect();
        let keep = words.len().saturating_sub(2);
        words[..keep].join(" ").to_lowercase()
    }

    /// The four normalized strings a query is compared against.
    fn comparison_keys(&self) -> [String; 4] {
        [
            self.short_name(),
            self.circuit_location.to_lowercase(),
            self.circuit_country.to_lowercase(),
            self.circuit_ref.replace('_', " ").to_lowercase(),
        ]
    }
}

impl Scoreable for Race {
    const KIND: EntityKind = EntityKind::Race;

    fn blank_field(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            Some("race_name")
        } else if self.circuit_ref.trim().is_empty() {
            Some("circuit_ref")
        } else if self.circuit_location.trim().is_empty() {
            Some("circuit_location")
        } else if self.circuit_country.trim().is_empty() {
            Some("circuit_country")
        } else {
            None
        }
    }

    /// A race is a candidate if ANY of its keys is close to the query, so
    /// "Spielberg", "Austria", and "red bull ring" all reach the same race.
    fn distance(&self, query: &str) -> Option<usize> {
        self.comparison_keys()
            .iter()
            .map(|key| levenshtein(key, query))
            .min()
    }
}
