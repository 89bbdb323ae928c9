//! Batch (build plate) model.
//!
//! A batch is a group of jobs assumed to print simultaneously on one
//! build plate. Its duration equals the print time of its slowest
//! member; batches execute serially.
//!
//! # Reference
//! Potts & Kovalyov (2000), "Scheduling with batching: A review" —
//! the p-batch (parallel batching) machine model.

use serde::{Deserialize, Serialize};

use super::{PrintJob, PrinterConstraints};

/// A group of jobs printing together, bounded by capacity constraints.
///
/// The scheduler grows a batch with [`Batch::push`] while
/// [`Batch::fits`] holds, then closes it and starts the next one.
/// Closed batches are retained on the schedule as per-plate summaries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    /// IDs of the jobs in this batch, in scheduling order.
    pub job_ids: Vec<String>,
    /// Accumulated volume (cm³).
    pub volume: f64,
    /// Time to complete the batch: the slowest member's print time.
    pub duration: f64,
}

impl Batch {
    /// Creates an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the job fits within the prospective totals.
    ///
    /// Checks `volume + job.volume <= max_volume` and
    /// `items + 1 <= max_items`. Evaluated against an empty batch too,
    /// so a job larger than `max_volume` never "fits" — see the
    /// scheduler for how that case is handled.
    pub fn fits(&self, job: &PrintJob, constraints: &PrinterConstraints) -> bool {
        self.volume + job.volume <= constraints.max_volume
            && self.job_ids.len() + 1 <= constraints.max_items
    }

    /// Adds a job to this batch.
    ///
    /// Accumulates volume and extends the batch duration to the
    /// slowest member. Does not re-check capacity; callers gate on
    /// [`Batch::fits`].
    pub fn push(&mut self, job: &PrintJob) {
        self.volume += job.volume;
        self.duration = self.duration.max(job.print_time);
        self.job_ids.push(job.id.clone());
    }

    /// Number of jobs in this batch.
    pub fn items(&self) -> usize {
        self.job_ids.len()
    }

    /// Whether the batch holds no jobs.
    pub fn is_empty(&self) -> bool {
        self.job_ids.is_empty()
    }

    /// Fraction of the volume limit this batch uses.
    pub fn volume_fill(&self, constraints: &PrinterConstraints) -> f64 {
        self.volume / constraints.max_volume
    }
}
