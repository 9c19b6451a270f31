//! Configuration for the route finder.

use std::borrow::Cow;

/// How stop names are compared when chaining segments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StopMatching {
    /// Byte-for-byte comparison.
    #[default]
    Exact,

    /// Comparison after ASCII lowercasing ("Paris" matches "PARIS").
    AsciiCaseInsensitive,
}

impl StopMatching {
    /// Returns the key under which a stop name is compared.
    pub(crate) fn key<'a>(&self, stop: &'a str) -> Cow<'a, str> {
        match self {
            StopMatching::Exact => Cow::Borrowed(stop),
            StopMatching::AsciiCaseInsensitive => {
                if stop.bytes().any(|b| b.is_ascii_uppercase()) {
                    Cow::Owned(stop.to_ascii_lowercase())
                } else {
                    Cow::Borrowed(stop)
                }
            }
        }
    }
}

/// Configuration parameters for route finding.
#[derive(Debug, Clone, Default)]
pub struct FinderConfig {
    /// How stop names are matched against each other.
    pub stop_matching: StopMatching,
}

impl FinderConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(stop_matching: StopMatching) -> Self {
        Self { stop_matching }
    }
}
