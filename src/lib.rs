//! Batch scheduling for multi-item 3D printing.
//!
//! Computes a sequential print order and a total completion time for a
//! set of print jobs, grouping them into capacity-bounded batches
//! (build plates). Jobs within a batch print concurrently, so a batch
//! takes as long as its slowest member; batches execute serially.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `PrintJob`, `PrinterConstraints`,
//!   `Batch`, `PrintSchedule`, `Violation`
//! - **`validation`**: Semantic input checks (finite positive volumes,
//!   non-negative print times, positive capacity limits)
//! - **`dispatching`**: Job-ordering rules (`Priority`, `Spt`,
//!   `LargestVolume`)
//! - **`scheduler`**: The greedy batch scheduler and schedule KPIs
//!
//! # Example
//!
//! ```
//! use print_batch::models::{PrintJob, PrinterConstraints};
//! use print_batch::scheduler::BatchScheduler;
//!
//! let jobs = vec![
//!     PrintJob::new("M1", 100.0).with_priority(2).with_print_time(120.0),
//!     PrintJob::new("M2", 150.0).with_priority(1).with_print_time(90.0),
//!     PrintJob::new("M3", 120.0).with_priority(3).with_print_time(150.0),
//! ];
//! let constraints = PrinterConstraints::new(300.0, 2);
//!
//! let schedule = BatchScheduler::new().schedule(&jobs, &constraints).unwrap();
//! assert_eq!(schedule.print_order, vec!["M2", "M1", "M3"]);
//! assert_eq!(schedule.total_time, 270.0);
//! ```
//!
//! # References
//!
//! - Potts & Kovalyov (2000), "Scheduling with batching: A review",
//!   European Journal of Operational Research
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod dispatching;
pub mod models;
pub mod scheduler;
pub mod validation;
