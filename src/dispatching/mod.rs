//! Dispatching rules for job ordering.
//!
//! Determines the order in which jobs are fed to the batch
//! accumulator. The default rule, [`rules::Priority`], orders by
//! `(priority, id)` ascending — the crate's contractual ordering.
//! Alternative rules trade priority fairness for denser plate packing.
//!
//! # Usage
//!
//! ```
//! use print_batch::dispatching::rules;
//! use print_batch::scheduler::BatchScheduler;
//!
//! let scheduler = BatchScheduler::new().with_rule(rules::Spt);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

pub mod rules;

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::models::PrintJob;

/// A dispatching rule that orders jobs for batching.
///
/// Rules define a total order; jobs comparing `Less` are fed to the
/// printer earlier. Every built-in rule breaks ties by job ID so the
/// output is deterministic, and the underlying stable sort keeps exact
/// duplicates in input order.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "PRIORITY", "SPT").
    fn name(&self) -> &'static str;

    /// Compares two jobs; `Less` means `a` is scheduled earlier.
    fn compare(&self, a: &PrintJob, b: &PrintJob) -> Ordering;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
