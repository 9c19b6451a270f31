//! Domain types for the route finder.
//!
//! Stops and segments enforce their invariants at construction time, so
//! the finder only ever sees non-empty stop names.

mod segment;
mod stop;

pub use segment::{Endpoint, InvalidSegment, RouteSegment, Segment};
pub use stop::{InvalidStop, Stop};
