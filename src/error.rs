use thiserror::Error;

use crate::matcher::EntityKind;

/// Failures a lookup can surface. "No unambiguous match" is not among them:
/// lookups report that outcome as `Ok(None)`, and callers turn it into a
/// spoken fallback rather than an error path.
#[derive(Debug, Error)]
pub enum Error {
    /// The candidate list was empty. The upstream fetch returned no usable
    /// rows, so the whole request is unanswerable.
    #[error("no candidate records to search")]
    EmptyInput,

    /// A record is missing a field the matcher scores against. Scoring a
    /// blank field would produce a misleading distance, so this fails fast.
    #[error("{entity} record {position} has a blank {field} field")]
    InvalidRecord {
        entity: EntityKind,
        position: usize,
        field: &'static str,
    },

    /// The calendar has no race left to run.
    #[error("no upcoming race in the calendar")]
    NoUpcomingRace,
}
