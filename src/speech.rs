//! Spoken-text fragments for voice responses.
//!
//! Pure formatting over typed records; assembling the surrounding response
//! markup is the caller's concern.

use jiff::civil::Date;

use crate::models::QualifyingResult;

/// A race date in `YYYYMMDD` digit form, the shape date read-out markup
/// consumes.
pub fn spoken_race_date(date: Date) -> String {
    format!("{:04}{:02}{:02}", date.year(), date.month(), date.day())
}

/// The driver's best qualifying lap as a speakable string, preferring Q3
/// over Q2 over Q1.
///
/// Lap strings arrive as `M:SS.mmm`; anything else (including a lap with
/// extra colons) yields `None` so the caller falls back to a lap-less
/// response.
pub fn spoken_qualifying_lap(result: &QualifyingResult) -> Option<String> {
    let lap = result
        .q3
        .as_deref()
        .or(result.q2.as_deref())
        .or(result.q1.as_deref())?;

    let mut parts = lap.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(minutes), Some(seconds), None) => {
            let minutes: u32 = minutes.parse().ok()?;
            let plural = if minutes > 1 { "s" } else { "" };
            Some(format!("{minutes} minute{plural} {seconds}"))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use rstest::rstest;

    use super::*;

    fn lap_row(q1: Option<&str>, q2: Option<&str>, q3: Option<&str>) -> QualifyingResult {
        QualifyingResult {
            forename: "Lewis".to_string(),
            surname: "Hamilton".to_string(),
            number: Some(44),
            q1: q1.map(String::from),
            q2: q2.map(String::from),
            q3: q3.map(String::from),
        }
    }

    // Month and day are zero-padded so the digits always read as a date.
    #[rstest]
    #[case(date(2021, 7, 4), "20210704")]
    #[case(date(2021, 11, 21), "20211121")]
    fn race_date_is_eight_digits(#[case] input: Date, #[case] expected: &str) {
        assert_eq!(spoken_race_date(input), expected);
    }

    // The best session a driver reached is the one that gets spoken.
    #[rstest]
    #[case::q3_wins(Some("1:19.1"), Some("1:18.2"), Some("1:17.3"), Some("1 minute 17.3"))]
    #[case::q2_fallback(Some("1:19.1"), Some("1:18.2"), None, Some("1 minute 18.2"))]
    #[case::q1_only(Some("1:19.1"), None, None, Some("1 minute 19.1"))]
    #[case::no_lap_set(None, None, None, None)]
    fn best_session_is_preferred(
        #[case] q1: Option<&str>,
        #[case] q2: Option<&str>,
        #[case] q3: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let row = lap_row(q1, q2, q3);
        assert_eq!(spoken_qualifying_lap(&row).as_deref(), expected);
    }

    // "minutes" only pluralizes past one minute.
    #[rstest]
    fn minutes_pluralize() {
        let row = lap_row(None, None, Some("2:01.456"));
        assert_eq!(
            spoken_qualifying_lap(&row).as_deref(),
            Some("2 minutes 01.456")
        );
    }

    // A lap that is not M:SS-shaped is unusable; better no lap than a
    // garbled read-out.
    #[rstest]
    #[case::no_colon("77.123")]
    #[case::two_colons("1:17:283")]
    #[case::non_numeric_minutes("a:17.283")]
    fn malformed_laps_are_dropped(#[case] lap: &str) {
        let row = lap_row(None, None, Some(lap));
        assert_eq!(spoken_qualifying_lap(&row), None);
    }
}
