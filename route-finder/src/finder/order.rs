//! Extension trait for ordering segment slices in place of a finder.

use crate::domain::RouteSegment;

use super::error::RouteError;
use super::resolve::RouteFinder;

/// Orders a collection of segments by their stops.
///
/// Shorthand for [`RouteFinder::find_route`] with the default configuration.
///
/// # Examples
///
/// ```
/// use route_finder::domain::Segment;
/// use route_finder::finder::OrderByStops;
///
/// let segments = [
///     Segment::new("2", "3").unwrap(),
///     Segment::new("1", "2").unwrap(),
/// ];
/// let route = segments.order_by_stops().unwrap();
/// assert_eq!(route[0].from().as_str(), "1");
/// ```
pub trait OrderByStops {
    /// The segment type being ordered.
    type Segment: RouteSegment;

    /// Returns the segments in travel order.
    fn order_by_stops(&self) -> Result<Vec<&Self::Segment>, RouteError>;
}

impl<S: RouteSegment> OrderByStops for [S] {
    type Segment = S;

    fn order_by_stops(&self) -> Result<Vec<&S>, RouteError> {
        RouteFinder::default().find_route(self)
    }
}
