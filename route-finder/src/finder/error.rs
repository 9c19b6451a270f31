//! Route finding error types.
//!
//! Every failure is a deterministic consequence of the input's shape.
//! The top-level variant is the category callers match on; the payload
//! only says which symptom was seen first.

/// Errors from ordering segments into a route.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// The segment collection itself is absent
    #[error("segment collection is missing")]
    NullCollection,

    /// An element of the collection is absent
    #[error("segment at position {index} is missing")]
    NullSegment { index: usize },

    /// Self-loops, repeated origins or destinations, or no way in
    #[error("route has cycles, bypasses, repeats or dangling segments: {0}")]
    CyclesBypassesRepeatsOrDangling(Irregularity),

    /// Several chains, or segments unreachable from the start
    #[error("route has cycles or gaps: {0}")]
    CyclesOrGaps(Disconnection),
}

impl RouteError {
    /// Returns the flat category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RouteError::NullCollection => ErrorKind::NullCollection,
            RouteError::NullSegment { .. } => ErrorKind::NullSegment,
            RouteError::CyclesBypassesRepeatsOrDangling(_) => {
                ErrorKind::CyclesBypassesRepeatsOrDangling
            }
            RouteError::CyclesOrGaps(_) => ErrorKind::CyclesOrGaps,
        }
    }
}

/// Category of a [`RouteError`], without diagnostic detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NullCollection,
    NullSegment,
    CyclesBypassesRepeatsOrDangling,
    CyclesOrGaps,
}

/// A local defect: some stop breaks the single-in, single-out rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Irregularity {
    /// A segment starts and ends at the same stop
    #[error("segment {stop} -> {stop} references itself")]
    SelfLoop { stop: String },

    /// Two segments leave the same stop
    #[error("more than one segment departs from {stop}")]
    DuplicateOrigin { stop: String },

    /// Two segments arrive at the same stop
    #[error("more than one segment arrives at {stop}")]
    DuplicateDestination { stop: String },

    /// Every origin is also some segment's destination
    #[error("no segment starts the route")]
    NoStart,
}

impl From<Irregularity> for RouteError {
    fn from(irregularity: Irregularity) -> Self {
        RouteError::CyclesBypassesRepeatsOrDangling(irregularity)
    }
}

/// A global defect: the segments do not form one connected chain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Disconnection {
    /// More than one segment could start the route
    #[error("{count} segments could start the route")]
    MultipleStarts { count: usize },

    /// Walking from the start does not reach every segment
    #[error("only {visited} of {total} segments are reachable from the start")]
    Unreachable { visited: usize, total: usize },
}

impl From<Disconnection> for RouteError {
    fn from(disconnection: Disconnection) -> Self {
        RouteError::CyclesOrGaps(disconnection)
    }
}
