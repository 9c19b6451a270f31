//! Route reconstruction from unordered segments.
//!
//! Given a bag of directed `from -> to` segments, produce them in travel
//! order, or explain why they do not form exactly one simple route.

pub mod domain;
pub mod finder;

#[cfg(test)]
pub(crate) mod test_utils;
