use serde::{Deserialize, Serialize};
use strsim::levenshtein;

use crate::matcher::{EntityKind, Numbered, Scoreable};

/// One row of the drivers' championship standings payload.
///
/// Field names map to the prediction backend's wire names; rows carry more
/// fields than these, which deserialization ignores. Car numbers are absent
/// for some historical entries, hence the `Option`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
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
        rename = "driver_points",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub points: Option<f64>,
}

/// The drivers' championship payload envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverStandings {
    pub standings: Vec<Driver>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_race_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_race_year: Option<i32>,
}

/// Distance from a forename/surname pair to an already-lowercased query.
///
/// A two-token query pairs token 0 with the forename and token 1 with the
/// surname, taking the closer of the two; a one-token query tries both
/// fields. Any other token count has no computable distance: the record is
/// filtered out rather than scored.
pub(crate) fn name_distance(forename: &str, surname: &str, query: &str) -> Option<usize> {
    let forename = forename.to_lowercase();
    let surname = surname.to_lowercase();

    let tokens: Vec<&str> = query.split_whitespace().collect();
    match tokens.as_slice() {
        [first, last] => Some(levenshtein(&forename, first).min(levenshtein(&surname, last))),
        [only] => Some(levenshtein(&forename, only).min(levenshtein(&surname, only))),
        _ => None,
    }
}

impl Scoreable for Driver {
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

impl Numbered for Driver {
    fn number(&self) -> Option<i64> {
        self.number
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn hamilton() -> Driver {
        Driver {
            forename: "Lewis".to_string(),
            surname: "Hamilton".to_string(),
            number: Some(44),
            points: None,
        }
    }

    // Two-token queries pair up positionally: forename against the first
    // token, surname against the second.
    #[rstest]
    #[case::full_name("lewis hamilton", Some(0))]
    #[case::misheard_surname("lewis hamiltoon", Some(0))]
    #[case::surname_only("hamilton", Some(0))]
    #[case::forename_only("lewis", Some(0))]
    #[case::misheard_forename("lewiis", Some(1))]
    #[case::three_tokens("sir lewis hamilton", None)]
    #[case::empty_query("", None)]
    fn name_distance_follows_token_count(#[case] query: &str, #[case] expected: Option<usize>) {
        assert_eq!(hamilton().distance(query), expected);
    }

    // A reversed name pairs forename with surname and scores poorly; the
    // matcher's threshold is what rejects it, not the adapter.
    #[rstest]
    fn reversed_name_scores_far() {
        let distance = hamilton().distance("hamilton lewis").unwrap();
        assert!(distance > 4);
    }

    // Standings rows deserialize from the backend wire names, tolerating
    // the older `driver_num` key and extra fields.
    #[rstest]
    fn deserializes_from_wire_names() {
        let row = r#"{
            "driver_forename": "Lewis",
            "driver_surname": "Hamilton",
            "driver_num": 44,
            "driver_points": 225.0,
            "driver_nationality": "British"
        }"#;
        let driver: Driver = serde_json::from_str(row).unwrap();
        assert_eq!(driver.number, Some(44));
        assert_eq!(driver.points, Some(225.0));
    }

    // A row with no car number still deserializes; it just can never match
    // on the numeric path.
    #[rstest]
    fn missing_number_is_allowed() {
        let row = r#"{"driver_forename": "Juan Manuel", "driver_surname": "Fangio"}"#;
        let driver: Driver = serde_json::from_str(row).unwrap();
        assert_eq!(Numbered::number(&driver), None);
    }
}
