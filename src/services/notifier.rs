//! Schedule event notification.
//!
//! Observers are attached to the engine's event bus and receive an event for
//! every effective admission outcome and deletion. Notification happens
//! synchronously inside the engine's admission critical section, after the
//! store and log mutations, so observers see events in effective order.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;

/// Engine lifecycle event delivered to observers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduleEvent {
    ScheduleAdded {
        schedule_id: String,
        course_name: String,
    },
    ScheduleRejected {
        schedule_id: String,
        conflict_count: usize,
    },
    ScheduleRemoved {
        schedule_id: String,
    },
}

/// Receiver of schedule events.
pub trait ScheduleObserver: Send + Sync {
    fn on_event(&self, event: &ScheduleEvent);
}

/// Publisher that fans events out to attached observers.
#[derive(Default)]
pub struct ScheduleEventBus {
    observers: RwLock<Vec<Arc<dyn ScheduleObserver>>>,
}

impl ScheduleEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an observer. Attaching the same observer twice is a no-op.
    pub fn attach(&self, observer: Arc<dyn ScheduleObserver>) {
        let mut observers = self.observers.write();
        if !observers.iter().any(|o| Arc::ptr_eq(o, &observer)) {
            observers.push(observer);
        }
    }

    /// Detach a previously attached observer.
    pub fn detach(&self, observer: &Arc<dyn ScheduleObserver>) {
        self.observers.write().retain(|o| !Arc::ptr_eq(o, observer));
    }

    /// Deliver an event to every attached observer, in attach order.
    pub fn notify(&self, event: &ScheduleEvent) {
        for observer in self.observers.read().iter() {
            observer.on_event(event);
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers.read().len()
    }
}

/// Observer that forwards events to the tracing log.
#[derive(Default)]
pub struct TracingObserver;

impl ScheduleObserver for TracingObserver {
    fn on_event(&self, event: &ScheduleEvent) {
        match event {
            ScheduleEvent::ScheduleAdded {
                schedule_id,
                course_name,
            } => {
                tracing::info!(%schedule_id, %course_name, "schedule added");
            }
            ScheduleEvent::ScheduleRejected {
                schedule_id,
                conflict_count,
            } => {
                tracing::info!(%schedule_id, conflict_count, "schedule rejected");
            }
            ScheduleEvent::ScheduleRemoved { schedule_id } => {
                tracing::info!(%schedule_id, "schedule removed");
            }
        }
    }
}
