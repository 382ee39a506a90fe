// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod classification;
pub mod freshness;
pub mod garment;
pub mod occasion;
pub mod summary;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Garment Domain
pub use garment::{find_duplicate_ids, validate_garment, GarmentId, GarmentRecord};

// Classification
pub use classification::{AnalysisResult, ClassificationOutcome, ClassificationSource};

// Wear freshness (derived data)
pub use freshness::{WearFreshness, SUGGESTION_COOLDOWN_DAYS};

// Occasion filtering
pub use occasion::{OccasionFilter, KNOWN_OCCASIONS};

// Wardrobe summary (derived data)
pub use summary::WardrobeSummary;

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Duplicate garment id: {0}")]
    DuplicateId(String),

    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
