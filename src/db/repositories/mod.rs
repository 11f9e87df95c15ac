//! Repository implementations module.
//!
//! Currently a single implementation of the `ScheduleRepository` trait:
//! - `local`: in-memory store used in production and tests alike

pub mod local;

pub use local::LocalRepository;
