//! Closed field vocabularies and the selection helper.
//!
//! Every output this crate produces is drawn from one of two fixed key sets:
//! the seven top-level representations of a date and the five units of an
//! age. Callers request a subset of a set; anything outside the request is
//! never computed.

use serde::Serialize;

/// A top-level representation of an expanded date.
///
/// The declaration order is the canonical output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DateField {
    /// ISO-8601 string with offset.
    Value,
    /// Relative phrase against "now" ("3 minutes ago").
    Relative,
    /// Formatted calendar date ("Feb 18, 2026").
    Formatted,
    /// Formatted clock time (pattern set on the expander).
    Time,
    /// Unix timestamp in seconds.
    Timestamp,
    /// Full weekday name ("Wednesday").
    Day,
    /// Decomposed elapsed time against "now".
    Age,
}

/// All date fields, in canonical output order.
pub const ALL_DATE_FIELDS: [DateField; 7] = [
    DateField::Value,
    DateField::Relative,
    DateField::Formatted,
    DateField::Time,
    DateField::Timestamp,
    DateField::Day,
    DateField::Age,
];

/// A unit of an age decomposition.
///
/// The declaration order is the canonical output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeField {
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
}

/// All age units, in canonical output order.
pub const ALL_AGE_FIELDS: [AgeField; 5] = [
    AgeField::Seconds,
    AgeField::Minutes,
    AgeField::Hours,
    AgeField::Days,
    AgeField::Weeks,
];

/// The units a nested `age` field carries, independent of which top-level
/// fields were requested.
pub const DEFAULT_AGE_FIELDS: [AgeField; 2] = [AgeField::Hours, AgeField::Seconds];

/// `Some(compute())` iff `field` is in `requested`.
///
/// `compute` only runs when the field was requested, so building a result
/// through this helper guarantees that unrequested fields never trigger
/// their underlying computation. Duplicates in `requested` are harmless.
pub(crate) fn selected<F: PartialEq, T>(
    requested: &[F],
    field: F,
    compute: impl FnOnce() -> T,
) -> Option<T> {
    requested.contains(&field).then(compute)
}

// ── Tests ───────────────────────────────────────────────────────────────────
