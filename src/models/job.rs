//! Print job model.
//!
//! A print job is the unit of scheduling: one physical model to be
//! produced, with a material volume, a scheduling priority, and an
//! estimated print time.
//!
//! # Reference
//! Potts & Kovalyov (2000), "Scheduling with batching: A review"

use serde::{Deserialize, Serialize};

/// A job queued for printing.
///
/// Jobs are immutable once constructed and are grouped into batches by
/// the scheduler. Lower `priority` values are scheduled earlier.
///
/// Unknown fields in serialized input are rejected rather than dropped,
/// and missing fields fail deserialization — malformed input is a
/// caller bug and must surface immediately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrintJob {
    /// Job identifier. Unique within one scheduling call by convention;
    /// duplicates are tolerated and ordered stably.
    pub id: String,
    /// Material volume (cm³). Must be positive and finite.
    pub volume: f64,
    /// Scheduling priority. Lower = scheduled earlier.
    pub priority: i32,
    /// Estimated print time (minutes). Must be non-negative and finite.
    pub print_time: f64,
}

impl PrintJob {
    /// Creates a new job with the given ID and volume.
    ///
    /// Priority defaults to 0 and print time to 0.0.
    pub fn new(id: impl Into<String>, volume: f64) -> Self {
        Self {
            id: id.into(),
            volume,
            priority: 0,
            print_time: 0.0,
        }
    }

    /// Sets the scheduling priority (lower = earlier).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the estimated print time.
    pub fn with_print_time(mut self, print_time: f64) -> Self {
        self.print_time = print_time;
        self
    }
}
