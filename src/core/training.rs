//! Training variants and dispatch from sensor samples.
//!
//! Each variant shares a [`TrainingBase`] and adds its own fields. All formula
//! selection happens through explicit `match` on the variant.

use crate::core::formulas;
use crate::core::message::InfoMessage;
use crate::error::{WorkoutError, WorkoutResult};
use crate::sensor::types::{WorkoutSample, WorkoutType};
use serde::{Deserialize, Serialize};

/// Fields common to every training.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingBase {
    /// Steps (running, walking) or strokes (swimming)
    pub action: f64,
    /// Duration in hours
    pub duration_h: f64,
    /// Athlete weight in kilograms
    pub weight_kg: f64,
}

/// A recorded training. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Training {
    Running {
        base: TrainingBase,
    },
    Walking {
        base: TrainingBase,
        /// Athlete height in centimeters
        height_cm: f64,
    },
    Swimming {
        base: TrainingBase,
        /// Pool length in meters
        pool_length_m: f64,
        /// Number of pool lengths swum
        pool_count: f64,
    },
}

impl Training {
    pub fn running(action: f64, duration_h: f64, weight_kg: f64) -> Self {
        Training::Running {
            base: TrainingBase {
                action,
                duration_h,
                weight_kg,
            },
        }
    }

    pub fn walking(action: f64, duration_h: f64, weight_kg: f64, height_cm: f64) -> Self {
        Training::Walking {
            base: TrainingBase {
                action,
                duration_h,
                weight_kg,
            },
            height_cm,
        }
    }

    pub fn swimming(
        action: f64,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_count: f64,
    ) -> Self {
        Training::Swimming {
            base: TrainingBase {
                action,
                duration_h,
                weight_kg,
            },
            pool_length_m,
            pool_count,
        }
    }

    pub fn workout_type(&self) -> WorkoutType {
        match self {
            Training::Running { .. } => WorkoutType::Running,
            Training::Walking { .. } => WorkoutType::Walking,
            Training::Swimming { .. } => WorkoutType::Swimming,
        }
    }

    /// Name shown in the summary line.
    pub fn name(&self) -> &'static str {
        match self {
            Training::Running { .. } => "Running",
            Training::Walking { .. } => "SportsWalking",
            Training::Swimming { .. } => "Swimming",
        }
    }

    pub fn base(&self) -> &TrainingBase {
        match self {
            Training::Running { base }
            | Training::Walking { base, .. }
            | Training::Swimming { base, .. } => base,
        }
    }

    fn step_len(&self) -> f64 {
        match self {
            Training::Running { .. } | Training::Walking { .. } => formulas::LEN_STEP,
            Training::Swimming { .. } => formulas::LEN_STROKE,
        }
    }

    /// Distance in kilometers.
    pub fn distance(&self) -> f64 {
        formulas::distance_km(self.base().action, self.step_len())
    }

    /// Mean speed in km/h.
    pub fn mean_speed(&self) -> f64 {
        match self {
            Training::Swimming {
                base,
                pool_length_m,
                pool_count,
            } => formulas::pool_speed_kmh(*pool_length_m, *pool_count, base.duration_h),
            _ => formulas::mean_speed_kmh(self.distance(), self.base().duration_h),
        }
    }

    /// Calories spent in kcal.
    pub fn spent_calories(&self) -> f64 {
        let speed = self.mean_speed();
        match self {
            Training::Running { base } => {
                formulas::running_calories(speed, base.weight_kg, base.duration_h)
            }
            Training::Walking { base, height_cm } => {
                formulas::walking_calories(speed, base.weight_kg, *height_cm, base.duration_h)
            }
            Training::Swimming { base, .. } => {
                formulas::swimming_calories(speed, base.weight_kg, base.duration_h)
            }
        }
    }

    /// Compute the summary for this training.
    pub fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.name().to_string(),
            duration: self.base().duration_h,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}

/// Build a training from a sensor tag and its positional values.
pub fn read_package(workout_type: &str, values: &[f64]) -> WorkoutResult<Training> {
    let kind: WorkoutType = workout_type.parse()?;

    match (kind, values) {
        (WorkoutType::Running, &[action, duration, weight]) => {
            Ok(Training::running(action, duration, weight))
        }
        (WorkoutType::Walking, &[action, duration, weight, height]) => {
            Ok(Training::walking(action, duration, weight, height))
        }
        (WorkoutType::Swimming, &[action, duration, weight, length, count]) => {
            Ok(Training::swimming(action, duration, weight, length, count))
        }
        _ => Err(WorkoutError::ArgumentCount {
            workout_type: kind.tag().to_string(),
            expected: kind.arity(),
            actual: values.len(),
        }),
    }
}

impl TryFrom<&WorkoutSample> for Training {
    type Error = WorkoutError;

    fn try_from(sample: &WorkoutSample) -> Result<Self, Self::Error> {
        read_package(&sample.workout_type, &sample.values)
    }
}
