//! Resource identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A resource identifier (SID) such as `AC0123...` or `IS0123...`.
///
/// SIDs are treated as opaque, but they always end up as a URL path
/// segment, so only ASCII alphanumerics, `-` and `_` are accepted.
///
/// # Example
///
/// ```
/// use twilio_rest::Sid;
///
/// let sid = Sid::new("AC00000000000000000000000000000000").unwrap();
/// assert_eq!(sid.prefix(), Some("AC"));
/// assert!(Sid::new("../Accounts").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sid(String);

impl Sid {
    /// Create a new SID, validating its characters.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Returns the SID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the two-letter type prefix, when the SID has one.
    pub fn prefix(&self) -> Option<&str> {
        self.0
            .get(..2)
            .filter(|p| p.chars().all(|c| c.is_ascii_uppercase()))
    }

    fn validate(s: &str) -> Result<(), Error> {
        if s.is_empty() {
            return Err(InvalidInputError::Sid {
                value: s.to_string(),
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        if let Some(c) = s
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(InvalidInputError::Sid {
                value: s.to_string(),
                reason: format!("invalid character '{c}'"),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for Sid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Sid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Sid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Sid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Sid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Sid::new(s).map_err(serde::de::Error::custom)
    }
}
