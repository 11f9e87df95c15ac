//! Service layer for admission logic and orchestration.
//!
//! This module contains the business logic that sits between the storage
//! layer and external callers: conflict detection, the admission gate, the
//! decision log, derived statistics, and event notification.

pub mod admission;
pub mod decision_log;
pub mod detector;
pub mod engine;
pub mod notifier;
pub mod report;
pub mod statistics;
pub mod suggestions;

pub use admission::AdmissionError;
pub use decision_log::DecisionLog;
pub use detector::{detect_all, detect_candidate};
pub use engine::{global_engine, init_engine, ScheduleEngine};
pub use notifier::{ScheduleEvent, ScheduleEventBus, ScheduleObserver, TracingObserver};
pub use report::format_conflict_report;
pub use statistics::{compute_conflict_report, compute_statistics};
pub use suggestions::suggestions_for;
