//! Domain model types shared across the engine.

pub mod time;

pub use time::{TimeOfDay, TimeParseError, TimeSlot, Weekday};
