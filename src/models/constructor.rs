use serde::{Deserialize, Serialize};
use strsim::levenshtein;

use crate::matcher::{EntityKind, Scoreable};

/// One row of the constructors' championship standings payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constructor {
    #[serde(rename = "constructor_name")]
    pub name: String,
    #[serde(
        rename = "constructor_points",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub points: Option<f64>,
}

/// The constructors' championship payload envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructorStandings {
    pub standings: Vec<Constructor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_race_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_race_year: Option<i32>,
}

impl Scoreable for Constructor {
    const KIND: EntityKind = EntityKind::Constructor;

    fn blank_field(&self) -> Option<&'static str> {
        self.name.trim().is_empty().then_some("constructor_name")
    }

    fn distance(&self, query: &str) -> Option<usize> {
        Some(levenshtein(&self.name.to_lowercase(), query))
    }
}
