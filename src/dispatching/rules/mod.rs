//! Built-in dispatching rules.
//!
//! # Ordering Convention
//! Jobs comparing `Less` are scheduled earlier. All rules break ties
//! by job ID (lexicographic) for deterministic output.
//!
//! # References
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::cmp::Ordering;

use super::DispatchingRule;
use crate::models::PrintJob;

fn by_id(a: &PrintJob, b: &PrintJob) -> Ordering {
    a.id.cmp(&b.id)
}

/// Priority order.
///
/// Orders by `(priority, id)` ascending: lower priority values print
/// earlier, job ID breaks ties. This is the contractual default — a
/// lower-priority-value job is always printed earlier than, or in the
/// same batch as, a higher one.
#[derive(Debug, Clone, Copy)]
pub struct Priority;

impl DispatchingRule for Priority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn compare(&self, a: &PrintJob, b: &PrintJob) -> Ordering {
        a.priority.cmp(&b.priority).then_with(|| by_id(a, b))
    }

    fn description(&self) -> &'static str {
        "Priority order with ID tie-break"
    }
}

/// Shortest Processing Time.
///
/// Orders by print time ascending. Minimizes average flow time at the
/// cost of ignoring job priorities.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct Spt;

impl DispatchingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn compare(&self, a: &PrintJob, b: &PrintJob) -> Ordering {
        a.print_time
            .partial_cmp(&b.print_time)
            .unwrap_or(Ordering::Equal)
            .then_with(|| by_id(a, b))
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}

/// Largest Volume First.
///
/// Orders by volume descending, the first-fit-decreasing heuristic
/// from bin packing. Tends to fill plates more densely than priority
/// order, at the cost of ignoring job priorities.
///
/// # Reference
/// Johnson (1973), "Near-optimal bin packing algorithms" (FFD)
#[derive(Debug, Clone, Copy)]
pub struct LargestVolume;

impl DispatchingRule for LargestVolume {
    fn name(&self) -> &'static str {
        "LVF"
    }

    fn compare(&self, a: &PrintJob, b: &PrintJob) -> Ordering {
        b.volume
            .partial_cmp(&a.volume)
            .unwrap_or(Ordering::Equal)
            .then_with(|| by_id(a, b))
    }

    fn description(&self) -> &'static str {
        "Largest Volume First"
    }
}
