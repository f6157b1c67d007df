//! Summary messages and the JSON report envelope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Computed statistics for one training.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    /// Display name of the training variant
    pub training_type: String,
    /// Duration in hours
    pub duration: f64,
    /// Distance in kilometers
    pub distance: f64,
    /// Mean speed in km/h
    pub speed: f64,
    /// Calories spent in kcal
    pub calories: f64,
}

impl InfoMessage {
    /// Render the summary line shown to the athlete.
    pub fn message(&self) -> String {
        format!(
            "Тип тренировки: {}; \
             Длительность: {:.3} ч.; \
             Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; \
             Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// A batch of summaries produced by one run, used for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryReport {
    pub session_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub summaries: Vec<InfoMessage>,
}

impl SummaryReport {
    pub fn new(summaries: Vec<InfoMessage>) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            summaries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_message() -> InfoMessage {
        InfoMessage {
            training_type: "Swimming".to_string(),
            duration: 1.0,
            distance: 0.9936,
            speed: 1.0,
            calories: 336.0,
        }
    }

    #[test]
    fn test_message_format() {
        assert_eq!(
            sample_message().message(),
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
             Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
        );
    }

    #[test]
    fn test_display_matches_message() {
        let info = sample_message();
        assert_eq!(info.to_string(), info.message());
    }

    #[test]
    fn test_three_decimals_always() {
        let info = InfoMessage {
            training_type: "Running".to_string(),
            duration: 0.5,
            distance: 12.0,
            speed: 24.123_456,
            calories: 0.0,
        };
        let message = info.message();
        assert!(message.contains("Длительность: 0.500 ч."));
        assert!(message.contains("Дистанция: 12.000 км"));
        assert!(message.contains("Ср. скорость: 24.123 км/ч"));
        assert!(message.contains("Потрачено ккал: 0.000."));
    }

    #[test]
    fn test_report_serializes_summaries() {
        let report = SummaryReport::new(vec![sample_message()]);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["summaries"][0]["training_type"], "Swimming");
        assert_eq!(json["summaries"][0]["calories"], 336.0);
        assert!(json["session_id"].as_str().is_some());
    }
}
