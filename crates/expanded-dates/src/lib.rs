//! # expanded-dates
//!
//! Expand a single point in time into a bundle of display and storage
//! representations: an ISO-8601 `value`, a relative phrase ("3 minutes
//! ago"), a formatted calendar date, a clock time, a Unix timestamp, a
//! weekday name, and an `age` decomposed into whole seconds, minutes,
//! hours, days, and weeks.
//!
//! Callers pick which representations to compute; unrequested fields are
//! never computed and never appear in the result. Age values follow one
//! sign rule throughout: positive for past dates, negative for future ones.
//!
//! ## Modules
//!
//! - [`expand`] — [`DateExpander`]: parse, compute, and assemble the requested fields
//! - [`age`] — Decompose elapsed time into whole units with a consistent sign rule
//! - [`relative`] — Relative phrases ("3 minutes ago", "2 hours from now")
//! - [`fields`] — Closed field vocabularies and selective computation
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use expanded_dates::{DateExpander, DateField};
//!
//! let expander = DateExpander::new();
//!
//! let date = expander.expand("2026-02-18T14:30:00Z").unwrap();
//! assert_eq!(date.day.as_deref(), Some("Wednesday"));
//! assert_eq!(date.formatted.as_deref(), Some("Feb 18, 2026"));
//!
//! // Only the requested fields are computed.
//! let partial = expander
//!     .expand_fields("2026-02-18T14:30:00Z", &[DateField::Timestamp])
//!     .unwrap();
//! assert_eq!(partial.timestamp, Some(1771425000));
//! assert_eq!(partial.value, None);
//! ```

pub mod age;
pub mod error;
pub mod expand;
pub mod fields;
pub mod relative;

pub use age::{compute_age, ExpandedAge};
pub use error::{ExpandError, Result};
pub use expand::{DateExpander, DateInput, ExpandedDate};
pub use fields::{AgeField, DateField, ALL_AGE_FIELDS, ALL_DATE_FIELDS, DEFAULT_AGE_FIELDS};
pub use relative::relative_phrase;
