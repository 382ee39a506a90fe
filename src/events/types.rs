// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::GarmentId;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

macro_rules! impl_domain_event {
    ($event:ty, $name:literal) => {
        impl DomainEvent for $event {
            fn event_id(&self) -> Uuid { self.event_id }
            fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
            fn event_type(&self) -> &'static str { $name }
        }
    };
}

// ============================================================================
// INVENTORY EVENTS
// ============================================================================

/// Emitted when a staged garment is committed to the wardrobe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GarmentAdded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub garment_id: GarmentId,
    pub category: String,
    pub occasion: String,
}

impl GarmentAdded {
    pub fn new(garment_id: GarmentId, category: String, occasion: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            garment_id,
            category,
            occasion,
        }
    }
}

impl_domain_event!(GarmentAdded, "GarmentAdded");

/// Emitted when a garment is marked worn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GarmentWorn {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub garment_id: GarmentId,
    pub worn_at: DateTime<Utc>,
    /// Whether this cleared the current suggestion
    pub cleared_suggestion: bool,
}

impl GarmentWorn {
    pub fn new(garment_id: GarmentId, worn_at: DateTime<Utc>, cleared_suggestion: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            garment_id,
            worn_at,
            cleared_suggestion,
        }
    }
}

impl_domain_event!(GarmentWorn, "GarmentWorn");

/// Emitted when a garment is removed from the wardrobe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GarmentDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub garment_id: GarmentId,
    pub cleared_suggestion: bool,
}

impl GarmentDeleted {
    pub fn new(garment_id: GarmentId, cleared_suggestion: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            garment_id,
            cleared_suggestion,
        }
    }
}

impl_domain_event!(GarmentDeleted, "GarmentDeleted");

// ============================================================================
// SUGGESTION EVENTS
// ============================================================================

/// Emitted when a garment is picked as today's suggestion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionIssued {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub garment_id: GarmentId,
    pub eligible_count: usize,
}

impl SuggestionIssued {
    pub fn new(garment_id: GarmentId, eligible_count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            garment_id,
            eligible_count,
        }
    }
}

impl_domain_event!(SuggestionIssued, "SuggestionIssued");

/// Emitted when every garment has been worn too recently to suggest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionExhausted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub wardrobe_size: usize,
}

impl SuggestionExhausted {
    pub fn new(wardrobe_size: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            wardrobe_size,
        }
    }
}

impl_domain_event!(SuggestionExhausted, "SuggestionExhausted");

// ============================================================================
// BOUNDARY EVENTS
// ============================================================================

/// Emitted when the classifier failed and the default triple was staged
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationFellBack {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
}

impl ClassificationFellBack {
    pub fn new() -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
        }
    }
}

impl Default for ClassificationFellBack {
    fn default() -> Self {
        Self::new()
    }
}

impl_domain_event!(ClassificationFellBack, "ClassificationFellBack");

/// Emitted when an image could not be read or was empty; nothing was staged
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRejected {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub reason: String,
}

impl ImageRejected {
    pub fn new(reason: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            reason,
        }
    }
}

impl_domain_event!(ImageRejected, "ImageRejected");

/// Emitted when the wardrobe document could not be written.
/// The in-memory wardrobe still holds the change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WardrobePersistFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub reason: String,
}

impl WardrobePersistFailed {
    pub fn new(reason: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            reason,
        }
    }
}

impl_domain_event!(WardrobePersistFailed, "WardrobePersistFailed");
