//! Workout Tracker - statistics from fitness sensor packages.
//!
//! The sensor reports each workout as a type tag plus a list of numbers. This
//! crate turns those packages into trainings, computes distance, mean speed
//! and calories, and renders a summary line per workout.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Workout Tracker                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌─────────────┐   ┌─────────────┐   ┌─────────────┐       │
//! │  │   Sensor    │──▶│  Dispatch   │──▶│  Formulas   │       │
//! │  │  (samples)  │   │ (tag→kind)  │   │ (km, kcal)  │       │
//! │  └─────────────┘   └─────────────┘   └─────────────┘       │
//! │                                              │              │
//! │                                              ▼              │
//! │                                      ┌─────────────┐       │
//! │                                      │ InfoMessage │       │
//! │                                      └─────────────┘       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use workout_tracker::read_package;
//!
//! let training = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
//! let info = training.show_training_info();
//! assert!(info.message().contains("Потрачено ккал: 797.805."));
//! ```

pub mod config;
pub mod core;
pub mod driver;
pub mod error;
pub mod sensor;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigError, ErrorPolicy, OutputFormat};
pub use crate::core::{read_package, InfoMessage, SummaryReport, Training, TrainingBase};
pub use driver::{Driver, RunStats};
pub use error::{DriverError, WorkoutError, WorkoutResult};
pub use sensor::{FixedSource, SampleSource, WorkoutSample, WorkoutType};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
