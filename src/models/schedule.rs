//! Print schedule (solution) model.
//!
//! A schedule is the complete output of one scheduling call: the
//! sequential print order, the total completion time, the batches the
//! jobs were grouped into, and any capacity violations the greedy
//! logic tolerated.

use serde::{Deserialize, Serialize};

use super::Batch;

/// A complete print schedule.
///
/// `print_order` is always a permutation of the input job IDs and
/// `total_time` the sum of batch durations. Both are produced by the
/// scheduler and never recomputed afterward; `batches` and
/// `violations` are supplementary records for inspection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrintSchedule {
    /// Job IDs in the order they go to the printer.
    pub print_order: Vec<String>,
    /// Total completion time: sum of batch durations.
    pub total_time: f64,
    /// Closed batches, in execution order.
    pub batches: Vec<Batch>,
    /// Capacity violations detected while batching.
    pub violations: Vec<Violation>,
}

/// A capacity violation.
///
/// Records a case where a batch exceeds a printer limit. The greedy
/// scheduler places a job whose volume alone exceeds `max_volume` into
/// its own over-capacity batch rather than rejecting it; that batch is
/// flagged here so callers can detect it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Related job ID.
    pub entity_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Classification of capacity violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// A batch's accumulated volume exceeds `max_volume`.
    VolumeExceeded,
}

impl Violation {
    /// Creates a volume-exceeded violation.
    pub fn volume_exceeded(job_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            violation_type: ViolationType::VolumeExceeded,
            entity_id: job_id.into(),
            message: message.into(),
        }
    }
}

impl PrintSchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of batches.
    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }

    /// Number of scheduled jobs.
    pub fn job_count(&self) -> usize {
        self.print_order.len()
    }

    /// Whether every batch respects the printer constraints.
    pub fn is_within_capacity(&self) -> bool {
        self.violations.is_empty()
    }

    /// Index of the batch containing the given job, if any.
    pub fn batch_containing(&self, job_id: &str) -> Option<usize> {
        self.batches
            .iter()
            .position(|b| b.job_ids.iter().any(|id| id == job_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PrintJob;

    fn sample_schedule() -> PrintSchedule {
        let mut b1 = Batch::new();
        b1.push(&PrintJob::new("M1", 100.0).with_print_time(120.0));
        b1.push(&PrintJob::new("M2", 150.0).with_print_time(90.0));
        let mut b2 = Batch::new();
        b2.push(&PrintJob::new("M3", 120.0).with_print_time(150.0));

        PrintSchedule {
            print_order: vec!["M1".into(), "M2".into(), "M3".into()],
            total_time: 270.0,
            batches: vec![b1, b2],
            violations: Vec::new(),
        }
    }

    #[test]
    fn test_counts() {
        let s = sample_schedule();
        assert_eq!(s.batch_count(), 2);
        assert_eq!(s.job_count(), 3);
    }

    #[test]
    fn test_batch_containing() {
        let s = sample_schedule();
        assert_eq!(s.batch_containing("M2"), Some(0));
        assert_eq!(s.batch_containing("M3"), Some(1));
        assert_eq!(s.batch_containing("M99"), None);
    }

    #[test]
    fn test_is_within_capacity() {
        let mut s = sample_schedule();
        assert!(s.is_within_capacity());

        s.violations
            .push(Violation::volume_exceeded("M3", "over by 80"));
        assert!(!s.is_within_capacity());
    }

    #[test]
    fn test_empty_schedule() {
        let s = PrintSchedule::new();
        assert_eq!(s.batch_count(), 0);
        assert_eq!(s.job_count(), 0);
        assert!((s.total_time - 0.0).abs() < 1e-10);
        assert!(s.is_within_capacity());
    }

    #[test]
    fn test_result_field_names() {
        // Wire contract: print_order and total_time serialize under
        // exactly these names.
        let json = serde_json::to_value(sample_schedule()).unwrap();
        assert!(json.get("print_order").is_some());
        assert!(json.get("total_time").is_some());
    }
}
