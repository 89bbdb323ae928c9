//! Greedy batch scheduler and KPI evaluation.
//!
//! Provides the capacity-bounded greedy scheduler and schedule
//! quality metrics.
//!
//! # Algorithm
//!
//! `BatchScheduler` sorts jobs by a dispatching rule, then packs them
//! into batches in a single greedy pass, closing a batch whenever the
//! next job would exceed the volume or item limit. Not optimal (bin
//! packing is NP-hard), but it preserves the dispatching order.
//!
//! # KPI
//!
//! `ScheduleKpi` computes packing metrics: batch count, plate fill
//! rates, sequential time, and batching speedup.
//!
//! # References
//!
//! - Potts & Kovalyov (2000), "Scheduling with batching: A review"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod greedy;
mod kpi;

pub use greedy::BatchScheduler;
pub use kpi::ScheduleKpi;
