//! Processing loop: samples in, summaries out.
//!
//! Samples are handled strictly in the order the source yields them. Each one
//! is dispatched, summarized and written before the next is pulled.

use crate::config::{Config, ErrorPolicy, OutputFormat};
use crate::core::{InfoMessage, SummaryReport, Training};
use crate::error::DriverError;
use crate::sensor::SampleSource;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Outcome counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Samples summarized successfully
    pub processed: u64,
    /// Samples rejected by dispatch
    pub failed: u64,
}

impl RunStats {
    /// Get a summary string for display.
    pub fn summary(&self) -> String {
        format!(
            "{} sample(s) processed, {} failed",
            self.processed, self.failed
        )
    }
}

/// Drives samples through dispatch and formatting.
pub struct Driver {
    error_policy: ErrorPolicy,
    output_format: OutputFormat,
}

impl Driver {
    pub fn new(config: &Config) -> Self {
        Self {
            error_policy: config.error_policy,
            output_format: config.output_format,
        }
    }

    /// Process every sample from `source`, writing output to `out`.
    ///
    /// Under [`ErrorPolicy::Halt`] the first bad sample ends the run; whatever
    /// was summarized before it has already been written.
    pub fn run<S, W>(&self, source: &mut S, out: &mut W) -> Result<RunStats, DriverError>
    where
        S: SampleSource + ?Sized,
        W: Write,
    {
        let mut stats = RunStats::default();
        let mut collected: Vec<InfoMessage> = Vec::new();
        let mut index = 0;

        while let Some(sample) = source.next_sample() {
            let training = match Training::try_from(&sample) {
                Ok(training) => training,
                Err(e) => {
                    stats.failed += 1;
                    match self.error_policy {
                        ErrorPolicy::Skip => {
                            tracing::warn!(index, workout_type = %sample.workout_type, error = %e, "skipping sample");
                            index += 1;
                            continue;
                        }
                        ErrorPolicy::Halt => {
                            self.finish(&collected, out)?;
                            return Err(DriverError::Sample {
                                index,
                                workout_type: sample.workout_type,
                                source: e,
                            });
                        }
                    }
                }
            };

            let info = training.show_training_info();
            tracing::debug!(
                index,
                training = info.training_type.as_str(),
                calories = info.calories,
                "sample summarized"
            );

            match self.output_format {
                OutputFormat::Text => writeln!(out, "{}", info.message())?,
                OutputFormat::Json => collected.push(info),
            }

            stats.processed += 1;
            index += 1;
        }

        self.finish(&collected, out)?;
        tracing::info!("{}", stats.summary());
        Ok(stats)
    }

    /// Flush buffered summaries for formats that write once per run.
    fn finish<W: Write>(&self, collected: &[InfoMessage], out: &mut W) -> Result<(), DriverError> {
        if self.output_format == OutputFormat::Json {
            let report = SummaryReport::new(collected.to_vec());
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
        Ok(())
    }
}
