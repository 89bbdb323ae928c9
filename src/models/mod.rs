//! Print scheduling domain models.
//!
//! Provides the core data types for batch print scheduling: jobs,
//! printer constraints, batches (build plates), and the resulting
//! schedule.
//!
//! | Type | Role |
//! |------|------|
//! | `PrintJob` | One model to print (volume, priority, print time) |
//! | `PrinterConstraints` | Per-batch capacity limits |
//! | `Batch` | Jobs printing simultaneously on one plate |
//! | `PrintSchedule` | Print order, total time, batches, violations |

mod batch;
mod constraints;
mod job;
mod schedule;

pub use batch::Batch;
pub use constraints::PrinterConstraints;
pub use job::PrintJob;
pub use schedule::{PrintSchedule, Violation, ViolationType};
