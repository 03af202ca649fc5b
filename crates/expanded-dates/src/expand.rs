//! Date expansion: one date in, a bundle of display representations out.
//!
//! [`DateExpander`] turns a single date — raw text or an already-parsed
//! value — into up to seven representations: ISO-8601 `value`, relative
//! phrase, formatted calendar date, clock time, Unix timestamp, weekday
//! name, and a decomposed age. Callers may request any subset; unrequested
//! fields are never computed.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::age::{compute_age, ExpandedAge};
use crate::error::{ExpandError, Result};
use crate::fields::{selected, DateField, ALL_DATE_FIELDS, DEFAULT_AGE_FIELDS};
use crate::relative::relative_phrase;

/// Display pattern for the `formatted` field ("Feb 18, 2026").
const DATE_FORMAT: &str = "%b %-d, %Y";

/// Default display pattern for the `time` field ("2:30 PM").
const DEFAULT_TIME_FORMAT: &str = "%-I:%M %p";

/// Zone-less input forms accepted by [`DateExpander`], interpreted in the
/// expander's time zone.
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

// ── Input ───────────────────────────────────────────────────────────────────

/// A date handed to [`DateExpander::expand`]: raw text still to be parsed,
/// or an already-parsed value used as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    Raw(String),
    Parsed(DateTime<FixedOffset>),
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        Self::Raw(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        Self::Raw(text)
    }
}

impl From<DateTime<FixedOffset>> for DateInput {
    fn from(date: DateTime<FixedOffset>) -> Self {
        Self::Parsed(date)
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(date: DateTime<Utc>) -> Self {
        Self::Parsed(date.fixed_offset())
    }
}

impl From<DateTime<Tz>> for DateInput {
    fn from(date: DateTime<Tz>) -> Self {
        Self::Parsed(date.fixed_offset())
    }
}

// ── Output ──────────────────────────────────────────────────────────────────

/// The expanded representations of a single date.
///
/// Only requested fields are populated; absent fields are skipped during
/// serialization, so the serialized key set is exactly the requested set in
/// this declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpandedDate {
    /// ISO-8601 string carrying the date's offset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Relative phrase against the anchor ("3 minutes ago").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative: Option<String>,
    /// Formatted calendar date ("Feb 18, 2026").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    /// Formatted clock time, per the expander's `time_format`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Unix timestamp in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    /// Full weekday name ("Wednesday").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
    /// Age against the anchor, carrying [`DEFAULT_AGE_FIELDS`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<ExpandedAge>,
}

// ── Expander ────────────────────────────────────────────────────────────────

/// Expands dates into display representations.
///
/// Both fields are plain configuration: mutating them between calls affects
/// only subsequent calls, never results already produced.
#[derive(Debug, Clone)]
pub struct DateExpander {
    /// strftime pattern for the `time` field. Default `"%-I:%M %p"`, a
    /// 12-hour clock with AM/PM and no leading zero on the hour.
    pub time_format: String,
    /// Zone used to interpret zone-less input strings and to anchor "now".
    /// Default UTC.
    pub time_zone: Tz,
}

impl Default for DateExpander {
    fn default() -> Self {
        Self {
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            time_zone: Tz::UTC,
        }
    }
}

impl DateExpander {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand `input` into all seven representations.
    ///
    /// # Errors
    ///
    /// Returns [`ExpandError::InvalidDatetime`] if `input` is a string that
    /// cannot be parsed; no result is constructed in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use expanded_dates::DateExpander;
    ///
    /// let expander = DateExpander::new();
    /// let date = expander.expand("2026-02-18T14:30:00Z").unwrap();
    /// assert_eq!(date.day.as_deref(), Some("Wednesday"));
    /// assert_eq!(date.timestamp, Some(1771425000));
    /// ```
    pub fn expand(&self, input: impl Into<DateInput>) -> Result<ExpandedDate> {
        self.expand_fields(input, &ALL_DATE_FIELDS)
    }

    /// Expand `input` into the representations named in `fields`.
    ///
    /// Reads the wall clock once; the same anchor feeds both `relative` and
    /// `age`, so one result is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`ExpandError::InvalidDatetime`] for unparseable string input.
    pub fn expand_fields(
        &self,
        input: impl Into<DateInput>,
        fields: &[DateField],
    ) -> Result<ExpandedDate> {
        let now = Utc::now().with_timezone(&self.time_zone).fixed_offset();
        self.expand_fields_at(&now, input, fields)
    }

    /// Like [`DateExpander::expand_fields`] with an explicit "now" anchor.
    ///
    /// Reads no clock, making the result a pure function of its inputs.
    pub fn expand_fields_at(
        &self,
        now: &DateTime<FixedOffset>,
        input: impl Into<DateInput>,
        fields: &[DateField],
    ) -> Result<ExpandedDate> {
        let date = self.resolve(input.into())?;

        Ok(ExpandedDate {
            value: selected(fields, DateField::Value, || date.to_rfc3339()),
            relative: selected(fields, DateField::Relative, || relative_phrase(now, &date)),
            formatted: selected(fields, DateField::Formatted, || {
                date.format(DATE_FORMAT).to_string()
            }),
            time: selected(fields, DateField::Time, || {
                date.format(&self.time_format).to_string()
            }),
            timestamp: selected(fields, DateField::Timestamp, || date.timestamp()),
            day: selected(fields, DateField::Day, || date.format("%A").to_string()),
            age: selected(fields, DateField::Age, || {
                compute_age(now, &date, &DEFAULT_AGE_FIELDS)
            }),
        })
    }

    fn resolve(&self, input: DateInput) -> Result<DateTime<FixedOffset>> {
        match input {
            DateInput::Parsed(date) => Ok(date),
            DateInput::Raw(text) => self.parse(&text),
        }
    }

    /// Parse a date string.
    ///
    /// RFC 3339 input keeps its own offset; zone-less datetimes and bare
    /// dates (midnight) are interpreted in the expander's time zone.
    fn parse(&self, text: &str) -> Result<DateTime<FixedOffset>> {
        let trimmed = text.trim();

        if let Ok(date) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(date);
        }

        for format in NAIVE_DATETIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
                if let Some(date) = self.localize(naive) {
                    return Ok(date);
                }
            }
        }

        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            if let Some(date) = date.and_hms_opt(0, 0, 0).and_then(|naive| self.localize(naive)) {
                return Ok(date);
            }
        }

        Err(ExpandError::InvalidDatetime(format!(
            "'{trimmed}' is not a recognized date string"
        )))
    }

    /// Attach the expander's zone to a naive local datetime. `None` when the
    /// local time is ambiguous or nonexistent (DST transitions).
    fn localize(&self, naive: NaiveDateTime) -> Option<DateTime<FixedOffset>> {
        self.time_zone
            .from_local_datetime(&naive)
            .single()
            .map(|date| date.fixed_offset())
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
