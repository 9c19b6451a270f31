//! Route reconstruction from unordered segments.
//!
//! Once repeated origins and destinations are ruled out, every stop has at
//! most one way in and one way out, so the segments can only form simple
//! chains and simple cycles. A valid route is exactly one chain and no
//! cycles: one start candidate, and a walk from it that covers everything.

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use crate::domain::RouteSegment;

use super::config::FinderConfig;
use super::error::{Disconnection, Irregularity, RouteError};

/// Orders segments into a single route.
///
/// The finder holds only configuration; each call builds its own lookup
/// tables, so one finder can be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct RouteFinder {
    config: FinderConfig,
}

impl RouteFinder {
    /// Create a finder with the given configuration.
    pub fn new(config: FinderConfig) -> Self {
        Self { config }
    }

    /// Returns the finder's configuration.
    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Reorder borrowed segments into travel order.
    ///
    /// Returns references to the caller's segments, starting at the unique
    /// start and ending at the unique end. Empty input is an empty route.
    ///
    /// # Errors
    ///
    /// - [`RouteError::CyclesBypassesRepeatsOrDangling`] for a self-loop, a
    ///   repeated origin or destination, or when no segment can start the route
    /// - [`RouteError::CyclesOrGaps`] when several segments could start the
    ///   route, or some segments are unreachable from the start
    ///
    /// # Examples
    ///
    /// ```
    /// use route_finder::domain::Segment;
    /// use route_finder::finder::RouteFinder;
    ///
    /// let segments = vec![
    ///     Segment::new("Melbourne", "Cologne").unwrap(),
    ///     Segment::new("Moscow", "Paris").unwrap(),
    ///     Segment::new("Cologne", "Moscow").unwrap(),
    /// ];
    ///
    /// let route = RouteFinder::default().find_route(&segments).unwrap();
    /// let stops: Vec<String> = route.iter().map(|s| s.to_string()).collect();
    /// assert_eq!(
    ///     stops,
    ///     ["Melbourne -> Cologne", "Cologne -> Moscow", "Moscow -> Paris"]
    /// );
    /// ```
    pub fn find_route<'a, S, I>(&self, source: I) -> Result<Vec<&'a S>, RouteError>
    where
        S: RouteSegment + ?Sized + 'a,
        I: IntoIterator<Item = &'a S>,
    {
        let segments: Vec<&'a S> = source.into_iter().collect();
        let order = self.resolve(&segments)?;
        Ok(order.into_iter().map(|idx| segments[idx]).collect())
    }

    /// Reorder segments from a collection that may have holes in it.
    ///
    /// A missing collection is [`RouteError::NullCollection`]; a missing
    /// element is [`RouteError::NullSegment`] carrying the first hole's
    /// position. Otherwise behaves like [`RouteFinder::find_route`].
    pub fn find_route_nullable<'a, S>(
        &self,
        source: Option<&'a [Option<S>]>,
    ) -> Result<Vec<&'a S>, RouteError>
    where
        S: RouteSegment,
    {
        let source = source.ok_or(RouteError::NullCollection)?;
        let segments = source
            .iter()
            .enumerate()
            .map(|(index, slot)| slot.as_ref().ok_or(RouteError::NullSegment { index }))
            .collect::<Result<Vec<&'a S>, _>>()?;
        self.find_route(segments)
    }

    /// Reorder owned segments into travel order.
    ///
    /// Same checks as [`RouteFinder::find_route`], but moves the segments
    /// instead of borrowing them.
    pub fn into_route<S: RouteSegment>(&self, segments: Vec<S>) -> Result<Vec<S>, RouteError> {
        let order = {
            let refs: Vec<&S> = segments.iter().collect();
            self.resolve(&refs)?
        };

        let mut slots: Vec<Option<S>> = segments.into_iter().map(Some).collect();
        // `order` is a permutation, so every slot is taken exactly once
        Ok(order
            .into_iter()
            .filter_map(|idx| slots[idx].take())
            .collect())
    }

    /// Validate the segments and return their indices in travel order.
    fn resolve<S>(&self, segments: &[&S]) -> Result<Vec<usize>, RouteError>
    where
        S: RouteSegment + ?Sized,
    {
        let total = segments.len();
        let matching = self.config.stop_matching;

        let stop_keys: Vec<(Cow<'_, str>, Cow<'_, str>)> = segments
            .iter()
            .map(|s| (matching.key(s.origin()), matching.key(s.destination())))
            .collect();
        let keys: Vec<(&str, &str)> = stop_keys
            .iter()
            .map(|(from, to)| (&**from, &**to))
            .collect();

        // Self-loops first: they also look like repeats and must not be
        // reported as anything else.
        if let Some(idx) = keys.iter().position(|(from, to)| from == to) {
            return Err(reject(Irregularity::SelfLoop {
                stop: segments[idx].origin().to_string(),
            }));
        }

        if let Some(idx) = first_repeat(keys.iter().map(|&(from, _)| from)) {
            return Err(reject(Irregularity::DuplicateOrigin {
                stop: segments[idx].origin().to_string(),
            }));
        }

        if let Some(idx) = first_repeat(keys.iter().map(|&(_, to)| to)) {
            return Err(reject(Irregularity::DuplicateDestination {
                stop: segments[idx].destination().to_string(),
            }));
        }

        if total < 2 {
            return Ok((0..total).collect());
        }

        let start = find_start(&keys)?;

        let mut by_origin: HashMap<&str, usize> = HashMap::with_capacity(total);
        for (idx, &(from, _)) in keys.iter().enumerate() {
            by_origin.insert(from, idx);
        }

        let mut route = Vec::with_capacity(total);
        let mut current = Some(start);
        while let Some(idx) = current {
            let (from, to) = keys[idx];
            by_origin.remove(from);
            trace!(
                from = %segments[idx].origin(),
                to = %segments[idx].destination(),
                position = route.len(),
                "Route step"
            );
            route.push(idx);
            current = by_origin.get(to).copied();
        }

        if route.len() < total {
            return Err(reject(Disconnection::Unreachable {
                visited: route.len(),
                total,
            }));
        }

        debug!(
            segments = total,
            start = %segments[start].origin(),
            "Route resolved"
        );

        Ok(route)
    }
}

/// Find the single segment whose origin is nobody's destination.
fn find_start(keys: &[(&str, &str)]) -> Result<usize, RouteError> {
    let destinations: HashSet<&str> = keys.iter().map(|&(_, to)| to).collect();
    let starts: Vec<usize> = keys
        .iter()
        .enumerate()
        .filter(|(_, (from, _))| !destinations.contains(from))
        .map(|(idx, _)| idx)
        .collect();

    match starts.as_slice() {
        [] => Err(reject(Irregularity::NoStart)),
        [start] => Ok(*start),
        _ => Err(reject(Disconnection::MultipleStarts {
            count: starts.len(),
        })),
    }
}

/// Returns the index of the first value already seen earlier in the sequence.
fn first_repeat<'k>(values: impl Iterator<Item = &'k str>) -> Option<usize> {
    let mut seen = HashSet::new();
    values
        .enumerate()
        .find(|(_, value)| !seen.insert(*value))
        .map(|(idx, _)| idx)
}

fn reject(defect: impl Into<RouteError>) -> RouteError {
    let err = defect.into();
    debug!(error = %err, "Route rejected");
    err
}
