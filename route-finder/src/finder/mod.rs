//! Route finding over unordered segments.
//!
//! Takes an arbitrary collection of directed segments and either returns
//! them in travel order, from the unique start to the unique end, or
//! rejects the collection with a classified [`RouteError`].
//!
//! Checks run in a fixed order and the first failure wins:
//! missing elements, self-loops, repeated origins, repeated destinations,
//! then start detection and the walk itself.

mod config;
mod error;
mod order;
mod resolve;


pub use config::{FinderConfig, StopMatching};
pub use error::{Disconnection, ErrorKind, Irregularity, RouteError};
pub use order::OrderByStops;
pub use resolve::RouteFinder;
