//! Sensor input for the workout tracker.
//!
//! Samples arrive as `(tag, values)` packages. The [`SampleSource`] trait is
//! the seam where a real device reader would plug in.

pub mod fixed;
pub mod types;

// Re-export commonly used types
pub use fixed::FixedSource;
pub use types::{WorkoutSample, WorkoutType};

/// Anything that can hand out sensor samples one at a time.
pub trait SampleSource {
    /// Take the next sample, or `None` once the source is exhausted.
    fn next_sample(&mut self) -> Option<WorkoutSample>;
}
