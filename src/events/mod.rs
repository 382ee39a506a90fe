// src/events/mod.rs
//
// Internal Event System - Public API
//
// CRITICAL: EventHandler is INTERNAL and must NOT be exported

pub mod bus;
pub mod handlers;
pub mod types;

// ============================================================================
// PUBLIC EXPORTS - Event Types and Bus Only
// ============================================================================

pub use types::DomainEvent;

pub use types::{
    ClassificationFellBack,
    GarmentAdded,
    GarmentDeleted,
    GarmentWorn,
    ImageRejected,
    SuggestionExhausted,
    SuggestionIssued,
    WardrobePersistFailed,
};

pub use bus::event_bus::{EventBus, EventLogEntry};

pub use handlers::{register_notice_handlers, Notice, NoticeBoard, NoticeKind};

use std::sync::Arc;

/// Create a shared event bus
pub fn create_event_bus() -> Arc<EventBus> {
    Arc::new(EventBus::new())
}
