//! Error types for sample dispatch.

use thiserror::Error;

/// Errors raised while turning a sensor sample into a training.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkoutError {
    /// The sample's type tag does not name a known workout.
    #[error("unknown workout type: {0}")]
    InvalidWorkoutType(String),

    /// The payload length does not match the workout's constructor.
    #[error("{workout_type} expects {expected} values, got {actual}")]
    ArgumentCount {
        workout_type: String,
        expected: usize,
        actual: usize,
    },
}

pub type WorkoutResult<T> = Result<T, WorkoutError>;

/// Errors that end a driver run.
#[derive(Error, Debug)]
pub enum DriverError {
    /// A sample failed dispatch under the halt policy.
    #[error("sample {index} ({workout_type}) rejected")]
    Sample {
        index: usize,
        workout_type: String,
        #[source]
        source: WorkoutError,
    },

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}
