//! In-memory sample sources.
//!
//! There is no device link in this crate; samples come either from the
//! built-in demo list or from values supplied by the caller.

use crate::sensor::types::WorkoutSample;
use crate::sensor::SampleSource;
use std::collections::VecDeque;

/// Demo packages: `(tag, values)` in the order they are processed.
const DEMO_PACKAGES: &[(&str, &[f64])] = &[
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

/// A source that yields a fixed list of samples once, in order.
#[derive(Debug, Clone, Default)]
pub struct FixedSource {
    samples: VecDeque<WorkoutSample>,
}

impl FixedSource {
    /// Create a source from an explicit list of samples.
    pub fn new(samples: Vec<WorkoutSample>) -> Self {
        Self {
            samples: samples.into(),
        }
    }

    /// The built-in demo packages.
    pub fn demo() -> Self {
        Self::new(
            DEMO_PACKAGES
                .iter()
                .map(|(tag, values)| WorkoutSample::new(*tag, values.to_vec()))
                .collect(),
        )
    }

    /// Number of samples not yet taken.
    pub fn remaining(&self) -> usize {
        self.samples.len()
    }
}

impl SampleSource for FixedSource {
    fn next_sample(&mut self) -> Option<WorkoutSample> {
        self.samples.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_order() {
        let mut source = FixedSource::demo();
        assert_eq!(source.remaining(), 3);

        let tags: Vec<String> = std::iter::from_fn(|| source.next_sample())
            .map(|s| s.workout_type)
            .collect();
        assert_eq!(tags, vec!["SWM", "RUN", "WLK"]);
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn test_empty_source() {
        let mut source = FixedSource::default();
        assert!(source.next_sample().is_none());
    }
}
