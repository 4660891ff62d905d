//! ISO-8601 timestamp parsing and day arithmetic.
//!
//! Dataset timestamps come from several exporters and are not uniform:
//!
//! | Input | Interpretation |
//! |-------|----------------|
//! | `2024-01-01T10:00:00Z` | UTC |
//! | `2024-01-01T10:00:00.250+02:00` | offset applied |
//! | `2024-01-01T10:00:00` / `2024-01-01 10:00:00` | no offset, taken as UTC |
//! | `2024-01-01` | midnight UTC |

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, Utc};

const MICROS_PER_DAY: f64 = 86_400_000_000.0;

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parses an ISO-8601 timestamp into UTC.
///
/// Returns `None` if the string matches none of the accepted forms.
///
/// ```
/// use convsplit::core::timestamp::parse_timestamp;
///
/// let z = parse_timestamp("2024-01-01T00:00:00Z").unwrap();
/// let offset = parse_timestamp("2024-01-01T00:00:00+00:00").unwrap();
/// assert_eq!(z, offset);
/// assert!(parse_timestamp("last tuesday").is_none());
/// ```
pub fn parse_timestamp(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    // RFC 3339 requires seconds; ISO-8601 with an offset does not.
    if let Ok(dt) = DateTime::parse_from_str(input, "%Y-%m-%dT%H:%M%:z") {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Signed elapsed time from `earlier` to `later`, in fractional days.
///
/// Negative when `later` is actually before `earlier`.
pub fn days_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> f64 {
    delta_in_days(later - earlier)
}

fn delta_in_days(delta: TimeDelta) -> f64 {
    match delta.num_microseconds() {
        Some(micros) => micros as f64 / MICROS_PER_DAY,
        // Only overflows for spans of hundreds of thousands of years.
        None => delta.num_seconds() as f64 / 86_400.0,
    }
}
