//! Sample types as delivered by the fitness sensor.
//!
//! A sample is only a type tag plus an ordered list of numbers; the meaning of
//! each position depends on the workout type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::WorkoutError;

/// Workout types the sensor can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutType {
    /// Pool swimming (`SWM`)
    Swimming,
    /// Running (`RUN`)
    Running,
    /// Sports walking (`WLK`)
    Walking,
}

impl WorkoutType {
    /// All known workout types.
    pub const ALL: [WorkoutType; 3] = [
        WorkoutType::Swimming,
        WorkoutType::Running,
        WorkoutType::Walking,
    ];

    /// Tag used by the sensor for this workout type.
    pub fn tag(self) -> &'static str {
        match self {
            WorkoutType::Swimming => "SWM",
            WorkoutType::Running => "RUN",
            WorkoutType::Walking => "WLK",
        }
    }

    /// Look up a workout type by its sensor tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.tag() == tag)
    }

    /// Number of positional values the sensor sends for this type.
    pub fn arity(self) -> usize {
        match self {
            WorkoutType::Running => 3,
            WorkoutType::Walking => 4,
            WorkoutType::Swimming => 5,
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for WorkoutType {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| WorkoutError::InvalidWorkoutType(s.to_string()))
    }
}

/// One raw package from the sensor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSample {
    /// Type tag exactly as received (may be unknown)
    pub workout_type: String,
    /// Positional numeric payload
    pub values: Vec<f64>,
}

impl WorkoutSample {
    pub fn new(workout_type: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            values,
        }
    }
}
