//! Stop identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when constructing an invalid stop identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop: {reason}")]
pub struct InvalidStop {
    reason: &'static str,
}

/// The name of a stop on a route.
///
/// Stop names are opaque identifiers. The only validation is that they
/// must be non-empty; comparison is ordinal (byte-wise).
///
/// # Examples
///
/// ```
/// use route_finder::domain::Stop;
///
/// let stop = Stop::new("Melbourne".to_string()).unwrap();
/// assert_eq!(stop.as_str(), "Melbourne");
///
/// // Empty strings are rejected
/// assert!(Stop::new("".to_string()).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Stop(String);

impl Stop {
    /// Create a new stop from a string.
    ///
    /// Returns an error if the string is empty.
    pub fn new(s: String) -> Result<Self, InvalidStop> {
        if s.is_empty() {
            return Err(InvalidStop {
                reason: "stop name cannot be empty",
            });
        }
        Ok(Stop(s))
    }

    /// Returns the stop name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the Stop and returns the inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Stop {
    type Error = InvalidStop;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Stop::new(s)
    }
}

impl From<Stop> for String {
    fn from(stop: Stop) -> Self {
        stop.0
    }
}

impl fmt::Debug for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stop({})", self.0)
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
