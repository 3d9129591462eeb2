//! Edit-distance resolution of noisy voice queries against candidate records.
//!
//! Speech recognition mangles names, so every lookup scores candidates by
//! Levenshtein distance and only accepts a winner that is unambiguously
//! better than the runner-up. Guessing between two equally-close candidates
//! is worse than asking the user again.

use serde::Serialize;
use strum::Display;
use tracing::debug;

use crate::error::Error;

/// The kind of entity a record represents, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum EntityKind {
    Driver,
    Constructor,
    Race,
}

/// Field selection for one entity type.
///
/// `distance` receives the query already lowercased and returns the record's
/// edit distance against its comparison keys, or `None` when the record has
/// no computable distance for that query shape (a `None` record is filtered
/// out, not scored zero).
pub trait Scoreable {
    const KIND: EntityKind;

    /// Name of the first blank match-relevant field, if any.
    fn blank_field(&self) -> Option<&'static str>;

    fn distance(&self, query: &str) -> Option<usize>;
}

/// Records addressable by car number. A query that parses as an integer
/// takes an exact numeric path that bypasses text scoring entirely.
pub trait Numbered {
    fn number(&self) -> Option<i64>;
}

/// A resolved record, with its 1-based position in the input list and the
/// edit distance that selected it (`None` on the numeric path).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match<R> {
    #[serde(flatten)]
    pub record: R,
    pub position: usize,
    pub distance: Option<usize>,
}

fn validate<R: Scoreable>(records: &[R]) -> Result<(), Error> {
    if records.is_empty() {
        return Err(Error::EmptyInput);
    }

    for (index, record) in records.iter().enumerate() {
        if let Some(field) = record.blank_field() {
            return Err(Error::InvalidRecord {
                entity: R::KIND,
                position: index + 1,
                field,
            });
        }
    }

    Ok(())
}

/// Resolves `query` against `records` by edit distance.
///
/// Candidates within `threshold` are ranked by ascending distance. The top
/// candidate wins only when it is the sole survivor or strictly closer than
/// the runner-up; a tie for best place, like an empty shortlist, is
/// `Ok(None)`.
pub fn find_unique<R>(
    records: &[R],
    query: &str,
    threshold: usize,
) -> Result<Option<Match<R>>, Error>
where
    R: Scoreable + Clone,
{
    validate(records)?;

    let query = query.to_lowercase();

    let mut scored: Vec<Match<R>> = records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let distance = record.distance(&query)?;
            (distance <= threshold).then(|| Match {
                record: record.clone(),
                position: index + 1,
                distance: Some(distance),
            })
        })
        .collect();

    // Stable sort: equal distances keep their standing order, so a tie is
    // decided by the ambiguity rule below rather than by sort order.
    scored.sort_by_key(|candidate| candidate.distance);

    debug!(
        kind = %R::KIND,
        query = %query,
        shortlisted = scored.len(),
        "scored candidates"
    );

    let unambiguous = match scored.as_slice() {
        [] => false,
        [_] => true,
        [best, runner_up, ..] => best.distance < runner_up.distance,
    };

    if unambiguous {
        Ok(Some(scored.swap_remove(0)))
    } else {
        Ok(None)
    }
}

/// Resolves a record by exact car number.
///
/// Exactly one record must carry the number; zero or several matches both
/// yield `Ok(None)`. Duplicate numbers are a data defect upstream, and
/// failing closed beats picking one at random.
pub fn find_by_number<R>(records: &[R], number: i64) -> Result<Option<Match<R>>, Error>
where
    R: Scoreable + Numbered + Clone,
{
    validate(records)?;

    let mut matches: Vec<Match<R>> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.number() == Some(number))
        .map(|(index, record)| Match {
            record: record.clone(),
            position: index + 1,
            distance: None,
        })
        .collect();

    debug!(kind = %R::KIND, number, matched = matches.len(), "numeric lookup");

    if matches.len() == 1 {
        Ok(Some(matches.swap_remove(0)))
    } else {
        Ok(None)
    }
}

/// Driver-style resolution: numeric queries go by car number, everything
/// else by name. Shared by championship standings, race results, and
/// qualifying results.
pub fn find_entrant<R>(
    records: &[R],
    query: &str,
    threshold: usize,
) -> Result<Option<Match<R>>, Error>
where
    R: Scoreable + Numbered + Clone,
{
    debug!(kind = %R::KIND, query, "resolving entrant");

    match query.trim().parse::<i64>() {
        Ok(number) => find_by_number(records, number),
        Err(_) => find_unique(records, query, threshold),
    }
}

/// Exact-parse year validation. There is nothing to fuzz here: either the
/// slot holds a whole base-10 integer or the year is absent.
pub fn parse_year(query: &str) -> Option<i32> {
    query.trim().parse().ok()
}
