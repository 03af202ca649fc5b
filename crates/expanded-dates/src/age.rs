//! Age decomposition: the elapsed time between an anchor and a target date.
//!
//! An age is the signed distance from an anchor ("now") back to a target,
//! expressed simultaneously in whole seconds, minutes, hours, days, and
//! weeks. All functions take an explicit anchor (no system clock access);
//! the caller provides "now", keeping these functions pure and testable.
//!
//! # Sign Convention
//!
//! Values are **positive when the target is in the past** relative to the
//! anchor and **negative when it is in the future**.
//!
//! # Unit Semantics
//!
//! `seconds → minutes → hours` is a strict nested floor-division chain
//! (floor toward negative infinity, so future dates grow more negative, not
//! clipped toward zero). `days` and `weeks` are whole-unit differences taken
//! independently from the raw delta, never derived from the hour chain: a
//! target 24 hours and one minute in the past is `hours: 24, days: 1`, and
//! a target 6 days 23 hours in the past is `days: 6, weeks: 0`.

use chrono::{DateTime, TimeZone};
use serde::Serialize;

use crate::fields::{selected, AgeField};

/// An elapsed-time snapshot decomposed into whole units.
///
/// Only the units requested from [`compute_age`] are populated; absent
/// units are skipped during serialization, so the serialized key set is
/// exactly the requested set in this declaration order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExpandedAge {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weeks: Option<i64>,
}

/// Decompose the signed distance from `now` back to `target`.
///
/// # Arguments
///
/// * `now` — The anchor instant (typically the current wall-clock time)
/// * `target` — The date whose age is being measured
/// * `fields` — Which units to populate; the rest stay `None` and are
///   never computed
///
/// # Examples
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use expanded_dates::{compute_age, ALL_AGE_FIELDS};
///
/// let now = Utc.with_ymd_and_hms(2026, 2, 18, 14, 30, 0).unwrap();
/// let target = now - Duration::seconds(3755);
///
/// let age = compute_age(&now, &target, &ALL_AGE_FIELDS);
/// assert_eq!(age.seconds, Some(3755));
/// assert_eq!(age.minutes, Some(62));
/// assert_eq!(age.hours, Some(1));
/// ```
pub fn compute_age<Tz: TimeZone>(
    now: &DateTime<Tz>,
    target: &DateTime<Tz>,
    fields: &[AgeField],
) -> ExpandedAge {
    let delta = now.clone() - target.clone();
    let raw_seconds = delta.num_seconds();
    let minutes = raw_seconds.div_euclid(60);

    ExpandedAge {
        seconds: selected(fields, AgeField::Seconds, || raw_seconds),
        minutes: selected(fields, AgeField::Minutes, || minutes),
        hours: selected(fields, AgeField::Hours, || minutes.div_euclid(60)),
        days: selected(fields, AgeField::Days, || delta.num_days()),
        weeks: selected(fields, AgeField::Weeks, || delta.num_weeks()),
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::ALL_AGE_FIELDS;
    use chrono::{Duration, TimeZone, Utc};

    fn anchor() -> DateTime<Utc> {
        // Wednesday, February 18, 2026, 14:30:00 UTC
        Utc.with_ymd_and_hms(2026, 2, 18, 14, 30, 0).unwrap()
    }

    #[test]
    fn test_past_target_is_positive() {
        let now = anchor();
        let target = now - Duration::seconds(95);
        let age = compute_age(&now, &target, &ALL_AGE_FIELDS);
        assert_eq!(age.seconds, Some(95));
    }

    #[test]
    fn test_future_target_is_negative() {
        let now = anchor();
        let target = now + Duration::seconds(95);
        let age = compute_age(&now, &target, &ALL_AGE_FIELDS);
        assert_eq!(age.seconds, Some(-95));
    }

    #[test]
    fn test_nested_floor_chain() {
        let now = anchor();
        // 1h 2m 35s = 3755 seconds
        let target = now - Duration::seconds(3600 + 120 + 35);
        let age = compute_age(&now, &target, &ALL_AGE_FIELDS);
        assert_eq!(age.seconds, Some(3755));
        assert_eq!(age.minutes, Some(62));
        assert_eq!(age.hours, Some(1));
        assert_eq!(age.days, Some(0));
        assert_eq!(age.weeks, Some(0));
    }

    #[test]
    fn test_future_chain_floors_toward_negative_infinity() {
        let now = anchor();
        let target = now + Duration::seconds(3755);
        let age = compute_age(&now, &target, &ALL_AGE_FIELDS);
        assert_eq!(age.seconds, Some(-3755));
        // floor(-3755 / 60) = -63, not the truncated -62
        assert_eq!(age.minutes, Some(-63));
        // floor(-63 / 60) = -2, not the truncated -1
        assert_eq!(age.hours, Some(-2));
    }

    #[test]
    fn test_days_independent_of_hour_chain() {
        let now = anchor();
        let target = now - (Duration::hours(24) + Duration::minutes(1));
        let age = compute_age(&now, &target, &ALL_AGE_FIELDS);
        assert_eq!(age.hours, Some(24));
        assert_eq!(age.days, Some(1));
    }

    #[test]
    fn test_weeks_are_whole_units() {
        let now = anchor();
        let target = now - (Duration::days(6) + Duration::hours(23));
        let age = compute_age(&now, &target, &ALL_AGE_FIELDS);
        assert_eq!(age.days, Some(6));
        assert_eq!(age.weeks, Some(0));

        let target = now - Duration::days(15);
        let age = compute_age(&now, &target, &ALL_AGE_FIELDS);
        assert_eq!(age.weeks, Some(2));
    }

    #[test]
    fn test_zero_distance() {
        let now = anchor();
        let age = compute_age(&now, &now, &ALL_AGE_FIELDS);
        assert_eq!(
            age,
            ExpandedAge {
                seconds: Some(0),
                minutes: Some(0),
                hours: Some(0),
                days: Some(0),
                weeks: Some(0),
            }
        );
    }

    #[test]
    fn test_requested_subset_only() {
        let now = anchor();
        let target = now - Duration::seconds(3755);
        let age = compute_age(&now, &target, &[AgeField::Hours, AgeField::Seconds]);
        assert_eq!(age.seconds, Some(3755));
        assert_eq!(age.hours, Some(1));
        assert_eq!(age.minutes, None);
        assert_eq!(age.days, None);
        assert_eq!(age.weeks, None);
    }

    #[test]
    fn test_empty_request_yields_empty_age() {
        let now = anchor();
        let target = now - Duration::seconds(42);
        assert_eq!(compute_age(&now, &target, &[]), ExpandedAge::default());
    }

    #[test]
    fn test_serialized_order_is_canonical() {
        let now = anchor();
        let target = now - Duration::seconds(3755);
        let age = compute_age(&now, &target, &ALL_AGE_FIELDS);
        let json = serde_json::to_string(&age).unwrap();
        assert_eq!(
            json,
            r#"{"seconds":3755,"minutes":62,"hours":1,"days":0,"weeks":0}"#
        );
    }

    #[test]
    fn test_default_subset_serializes_seconds_before_hours() {
        let now = anchor();
        let target = now - Duration::seconds(3755);
        let age = compute_age(&now, &target, &crate::fields::DEFAULT_AGE_FIELDS);
        let json = serde_json::to_string(&age).unwrap();
        assert_eq!(json, r#"{"seconds":3755,"hours":1}"#);
    }

    // ── Property tests ──────────────────────────────────────────────────

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn floor_chain_is_consistent(offset in -10_000_000_i64..10_000_000) {
                let now = anchor();
                let target = now - Duration::seconds(offset);
                let age = compute_age(&now, &target, &ALL_AGE_FIELDS);

                let seconds = age.seconds.unwrap();
                prop_assert_eq!(seconds, offset);
                prop_assert_eq!(age.minutes.unwrap(), seconds.div_euclid(60));
                prop_assert_eq!(age.hours.unwrap(), seconds.div_euclid(60).div_euclid(60));
            }

            #[test]
            fn population_matches_request(
                fields in proptest::sample::subsequence(ALL_AGE_FIELDS.to_vec(), 0..=ALL_AGE_FIELDS.len()),
                offset in -10_000_000_i64..10_000_000,
            ) {
                let now = anchor();
                let target = now - Duration::seconds(offset);
                let age = compute_age(&now, &target, &fields);

                prop_assert_eq!(age.seconds.is_some(), fields.contains(&AgeField::Seconds));
                prop_assert_eq!(age.minutes.is_some(), fields.contains(&AgeField::Minutes));
                prop_assert_eq!(age.hours.is_some(), fields.contains(&AgeField::Hours));
                prop_assert_eq!(age.days.is_some(), fields.contains(&AgeField::Days));
                prop_assert_eq!(age.weeks.is_some(), fields.contains(&AgeField::Weeks));
            }
        }
    }
}
