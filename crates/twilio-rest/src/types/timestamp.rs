//! Timestamp parsing for API date fields.

use chrono::{DateTime, Utc};

use crate::error::{Error, InvalidInputError};

/// Parse a date field as returned by the API.
///
/// The 2010 API renders dates in RFC 2822 (`Thu, 30 Jul 2015 20:00:00 +0000`),
/// the versioned APIs in RFC 3339 (`2015-07-30T20:00:00Z`).
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, Error> {
    DateTime::parse_from_rfc3339(s)
        .or_else(|_| DateTime::parse_from_rfc2822(s))
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            InvalidInputError::Timestamp {
                value: s.to_string(),
            }
            .into()
        })
}
