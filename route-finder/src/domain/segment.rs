//! Route segment types.
//!
//! A `Segment` is one directed hop between two stops. Segments carry no
//! identity beyond their endpoints: two segments with the same origin and
//! destination are the same segment.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Stop;

/// Which end of a segment failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// The stop the segment departs from
    Origin,
    /// The stop the segment arrives at
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Origin => f.write_str("origin"),
            Endpoint::Destination => f.write_str("destination"),
        }
    }
}

/// Error returned when constructing a segment with a missing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid segment: {endpoint} stop cannot be empty")]
pub struct InvalidSegment {
    endpoint: Endpoint,
}

impl InvalidSegment {
    /// Returns the endpoint that was rejected.
    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }
}

/// Anything that travels from one named stop to another.
///
/// The route finder only needs to read the two endpoints, so callers can
/// order their own edge types (carrying distance, duration, cost, ...)
/// without converting them into [`Segment`] first.
pub trait RouteSegment {
    /// The stop this segment departs from.
    fn origin(&self) -> &str;

    /// The stop this segment arrives at.
    fn destination(&self) -> &str;
}

impl<T: RouteSegment + ?Sized> RouteSegment for &T {
    fn origin(&self) -> &str {
        (**self).origin()
    }

    fn destination(&self) -> &str {
        (**self).destination()
    }
}

/// A directed hop from one stop to another.
///
/// # Examples
///
/// ```
/// use route_finder::domain::Segment;
///
/// let segment = Segment::new("Melbourne", "Cologne").unwrap();
/// assert_eq!(segment.from().as_str(), "Melbourne");
/// assert_eq!(segment.to_string(), "Melbourne -> Cologne");
///
/// assert!(Segment::new("", "Cologne").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Segment {
    from: Stop,
    to: Stop,
}

impl Segment {
    /// Create a segment from two stop names.
    ///
    /// Returns an error naming the first empty endpoint.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Result<Self, InvalidSegment> {
        let from = Stop::new(from.into()).map_err(|_| InvalidSegment {
            endpoint: Endpoint::Origin,
        })?;
        let to = Stop::new(to.into()).map_err(|_| InvalidSegment {
            endpoint: Endpoint::Destination,
        })?;
        Ok(Segment { from, to })
    }

    /// Create a segment from already-validated stops.
    pub fn from_stops(from: Stop, to: Stop) -> Self {
        Segment { from, to }
    }

    /// Returns the origin stop.
    pub fn from(&self) -> &Stop {
        &self.from
    }

    /// Returns the destination stop.
    pub fn to(&self) -> &Stop {
        &self.to
    }

    /// Returns true if the segment starts and ends at the same stop.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

impl RouteSegment for Segment {
    fn origin(&self) -> &str {
        self.from.as_str()
    }

    fn destination(&self) -> &str {
        self.to.as_str()
    }
}

impl fmt::Debug for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Segment({} -> {})", self.from, self.to)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
