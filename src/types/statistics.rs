//! Statistics result type
//!
//! `Statistics` is derived fresh for every query and never stored.

/// Summary of the transactions inside the window at query time
///
/// When no transaction matched, `count`, `sum` and `average` are zero while
/// `min` is `+∞` and `max` is `-∞`, the conventional values for the min and
/// max of an empty set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    /// Number of transactions inside the window
    pub count: u64,

    /// Sum of all amounts inside the window
    pub sum: f64,

    /// `sum / count`, or zero when the window is empty
    pub average: f64,

    /// Smallest amount, `+∞` when the window is empty
    pub min: f64,

    /// Largest amount, `-∞` when the window is empty
    pub max: f64,
}

impl Statistics {
    /// Statistics of an empty window
    pub fn empty() -> Self {
        Statistics {
            count: 0,
            sum: 0.0,
            average: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Whether no transaction contributed to these statistics
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl Default for Statistics {
    fn default() -> Self {
        Self::empty()
    }
}
