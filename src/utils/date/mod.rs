// Date utility functions
// Conversions between the dialog's local date/time text and UTC instants

use chrono::{DateTime, Duration, FixedOffset, LocalResult, NaiveDateTime, Offset, TimeZone, Utc};
use thiserror::Error;

/// Text format of the date/time field, e.g. `2024-05-01T10:00`.
pub const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

const ACCEPTED_FORMATS: [&str; 3] = [DATETIME_LOCAL_FORMAT, "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// How far back to look for the offset in force before a DST gap
const GAP_SEARCH_STEP_MINUTES: i64 = 15;
const GAP_SEARCH_STEPS: i64 = 24 * 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateInputError {
    #[error("'{0}' is not a valid date/time (expected YYYY-MM-DDTHH:MM)")]
    InvalidFormat(String),

    #[error("{0} does not exist in the local time zone")]
    NonexistentLocalTime(NaiveDateTime),
}

/// Parse the text of a date/time field into a naive local timestamp.
pub fn parse_datetime_local(raw: &str) -> Result<NaiveDateTime, DateInputError> {
    let trimmed = raw.trim();
    ACCEPTED_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| DateInputError::InvalidFormat(raw.to_string()))
}

/// Interpret a naive timestamp in `tz` and convert it to UTC.
///
/// Ambiguous wall-clock times (DST fall-back) resolve to the earlier instant.
/// Times skipped by a DST gap (spring-forward) are read with the offset in
/// force before the transition, so they land after the gap.
pub fn local_to_utc<Tz: TimeZone>(
    naive: NaiveDateTime,
    tz: &Tz,
) -> Result<DateTime<Utc>, DateInputError> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
        LocalResult::None => offset_before_gap(naive, tz)
            .and_then(|offset| {
                naive.checked_sub_signed(Duration::seconds(i64::from(offset.local_minus_utc())))
            })
            .map(|utc| Utc.from_utc_datetime(&utc))
            .ok_or(DateInputError::NonexistentLocalTime(naive)),
    }
}

/// Offset in force just before the transition that skipped `naive`.
fn offset_before_gap<Tz: TimeZone>(naive: NaiveDateTime, tz: &Tz) -> Option<FixedOffset> {
    for step in 1..=GAP_SEARCH_STEPS {
        let earlier =
            naive.checked_sub_signed(Duration::minutes(GAP_SEARCH_STEP_MINUTES * step))?;
        match tz.offset_from_local_datetime(&earlier) {
            LocalResult::Single(offset) | LocalResult::Ambiguous(offset, _) => {
                return Some(offset.fix())
            }
            LocalResult::None => continue,
        }
    }
    None
}

/// Normalize the dialog's date/time text to a UTC instant.
///
/// Blank input means "now".
pub fn normalize_datetime_input<Tz: TimeZone>(
    raw: &str,
    tz: &Tz,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>, DateInputError> {
    if raw.trim().is_empty() {
        return Ok(now);
    }

    let naive = parse_datetime_local(raw)?;
    local_to_utc(naive, tz)
}

/// Render an instant in `tz` using the date/time field format.
pub fn format_datetime_local<Tz: TimeZone>(instant: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    instant
        .with_timezone(tz)
        .format(DATETIME_LOCAL_FORMAT)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, NaiveDate};
    use serial_test::serial;

    fn brasilia() -> FixedOffset {
        FixedOffset::west_opt(3 * 3600).unwrap()
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn parses_minute_precision_input() {
        let parsed = parse_datetime_local("2024-05-01T10:00").unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn parses_second_precision_input() {
        let parsed = parse_datetime_local("2024-05-01T10:00:30").unwrap();
        assert_eq!(parsed.format("%S").to_string(), "30");
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_datetime_local("tomorrow").unwrap_err();
        assert_eq!(err, DateInputError::InvalidFormat("tomorrow".to_string()));
    }

    #[test]
    fn rejects_date_without_time() {
        assert!(parse_datetime_local("2024-05-01").is_err());
    }

    #[test]
    fn converts_local_input_to_utc() {
        let instant = normalize_datetime_input("2024-05-01T10:00", &brasilia(), fixed_now()).unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2024, 5, 1, 13, 0, 0).unwrap());
        assert_eq!(instant.to_rfc3339(), "2024-05-01T13:00:00+00:00");
    }

    #[test]
    fn blank_input_uses_now() {
        assert_eq!(normalize_datetime_input("", &brasilia(), fixed_now()), Ok(fixed_now()));
        assert_eq!(normalize_datetime_input("   ", &brasilia(), fixed_now()), Ok(fixed_now()));
    }

    #[test]
    fn format_is_inverse_of_parse() {
        let instant = Utc.with_ymd_and_hms(2024, 5, 1, 13, 0, 0).unwrap();
        let text = format_datetime_local(instant, &brasilia());
        assert_eq!(text, "2024-05-01T10:00");
        assert_eq!(normalize_datetime_input(&text, &brasilia(), fixed_now()), Ok(instant));
    }

    /// Run `f` with the process time zone set to `zone`, restoring it after.
    fn with_tz<T>(zone: &str, f: impl FnOnce() -> T) -> T {
        let previous = std::env::var("TZ").ok();
        std::env::set_var("TZ", zone);
        let result = f();
        match previous {
            Some(value) => std::env::set_var("TZ", value),
            None => std::env::remove_var("TZ"),
        }
        result
    }

    #[test]
    #[serial]
    fn spring_forward_gap_uses_offset_before_transition() {
        // 02:00-03:00 does not exist in New York on 2024-03-10
        let instant = with_tz("America/New_York", || {
            normalize_datetime_input("2024-03-10T02:30", &Local, fixed_now())
        });
        assert_eq!(
            instant.map(|i| i.to_rfc3339()),
            Ok("2024-03-10T07:30:00+00:00".to_string())
        );
    }

    #[test]
    #[serial]
    fn fall_back_overlap_uses_earlier_instant() {
        // 01:30 happens twice in New York on 2024-11-03; EDT comes first
        let instant = with_tz("America/New_York", || {
            normalize_datetime_input("2024-11-03T01:30", &Local, fixed_now())
        });
        assert_eq!(
            instant.map(|i| i.to_rfc3339()),
            Ok("2024-11-03T05:30:00+00:00".to_string())
        );
    }

    #[test]
    #[serial]
    fn times_around_a_gap_convert_normally() {
        let (before, after) = with_tz("America/New_York", || {
            (
                normalize_datetime_input("2024-03-10T01:59", &Local, fixed_now()),
                normalize_datetime_input("2024-03-10T03:00", &Local, fixed_now()),
            )
        });
        assert_eq!(before.map(|i| i.to_rfc3339()), Ok("2024-03-10T06:59:00+00:00".to_string()));
        assert_eq!(after.map(|i| i.to_rfc3339()), Ok("2024-03-10T07:00:00+00:00".to_string()));
    }
}
