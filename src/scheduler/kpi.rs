//! Schedule quality metrics (KPIs).
//!
//! Computes packing and throughput indicators from a completed
//! schedule and its input jobs.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Time | Sum of batch durations |
//! | Batch Count | Number of plates printed |
//! | Avg Volume Fill | Mean batch volume / max_volume |
//! | Avg Item Fill | Mean batch item count / max_items |
//! | Sequential Time | Sum of all job print times |
//! | Speedup | Sequential time / total time |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use crate::models::{PrintJob, PrintSchedule, PrinterConstraints};

/// Packing and throughput indicators for a print schedule.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    /// Total completion time (copied from the schedule).
    pub total_time: f64,
    /// Number of batches.
    pub batch_count: usize,
    /// Mean fraction of the volume limit used per batch (0.0..1.0,
    /// above 1.0 only for a flagged oversized batch).
    pub avg_volume_fill: f64,
    /// Mean fraction of the item limit used per batch (0.0..1.0).
    pub avg_item_fill: f64,
    /// Time to print every job one after another.
    pub sequential_time: f64,
    /// How much faster batching is than sequential printing
    /// (1.0 when the schedule is empty).
    pub speedup: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule, its input jobs, and the
    /// constraints it was built under.
    pub fn calculate(
        schedule: &PrintSchedule,
        jobs: &[PrintJob],
        constraints: &PrinterConstraints,
    ) -> Self {
        let batch_count = schedule.batch_count();

        let (avg_volume_fill, avg_item_fill) = if batch_count == 0 {
            (0.0, 0.0)
        } else {
            let volume_sum: f64 = schedule
                .batches
                .iter()
                .map(|b| b.volume_fill(constraints))
                .sum();
            let item_sum: f64 = schedule
                .batches
                .iter()
                .map(|b| b.items() as f64 / constraints.max_items as f64)
                .sum();
            (volume_sum / batch_count as f64, item_sum / batch_count as f64)
        };

        let sequential_time: f64 = jobs.iter().map(|j| j.print_time).sum();
        let speedup = if schedule.total_time > 0.0 {
            sequential_time / schedule.total_time
        } else {
            1.0
        };

        Self {
            total_time: schedule.total_time,
            batch_count,
            avg_volume_fill,
            avg_item_fill,
            sequential_time,
            speedup,
        }
    }

    /// Whether the schedule packs plates at least `min_fill` full on
    /// average (by volume).
    pub fn meets_fill_threshold(&self, min_fill: f64) -> bool {
        self.avg_volume_fill >= min_fill
    }
}
