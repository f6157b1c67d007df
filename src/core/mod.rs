//! Core calculations for the workout tracker.
//!
//! This module contains:
//! - Distance, speed and calorie formulas
//! - Training variants and dispatch from sensor samples
//! - Summary messages for display and export

pub mod formulas;
pub mod message;
pub mod training;

// Re-export commonly used types
pub use message::{InfoMessage, SummaryReport};
pub use training::{read_package, Training, TrainingBase};
