//! Read-time timestamp formatting.
//!
//! API responses render `created_at`/`updated_at` as short human-readable
//! strings rather than RFC 3339.

use serde::Serializer;

use crate::types::Timestamp;

/// Display format for timestamps in API responses, e.g. `Aug 07 2026 14:30`.
pub const HUMAN_FORMAT: &str = "%b %d %Y %H:%M";

/// Serde helper: serialize a timestamp with [`HUMAN_FORMAT`].
pub fn human<S: Serializer>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&ts.format(HUMAN_FORMAT))
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};
    use serde::Serialize;

    use super::*;

    #[derive(Serialize)]
    struct Stamped {
        #[serde(serialize_with = "human")]
        at: Timestamp,
    }

    #[test]
    fn formats_timestamps_for_responses() {
        let at = Utc
            .with_ymd_and_hms(2024, 3, 9, 7, 5, 33)
            .single()
            .unwrap();
        let json = serde_json::to_value(Stamped { at }).unwrap();
        assert_eq!(json["at"], "Mar 09 2024 07:05");
    }

    #[test]
    fn format_round_trips_through_chrono() {
        let at = Utc
            .with_ymd_and_hms(2025, 12, 31, 23, 59, 0)
            .single()
            .unwrap();
        let rendered = at.format(HUMAN_FORMAT).to_string();
        let parsed = NaiveDateTime::parse_from_str(&rendered, HUMAN_FORMAT).unwrap();
        assert_eq!(
            parsed.date(),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
        );
    }
}
