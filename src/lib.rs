// src/lib.rs
// ChicPick - personal wardrobe with "what should I wear today?" suggestions
//
// Architecture:
// - Domain-centric: garment rules (freshness, invariants) live in domain/
// - Event-driven: services report facts on the event bus
// - Explicit: time, randomness, storage and classifier are injected
// - Local-first: the wardrobe is one document in a local SQLite file

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod infrastructure;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod app;
pub mod application;
pub mod integrations;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    validate_garment,
    AnalysisResult,
    ClassificationOutcome,
    ClassificationSource,
    DomainError,
    GarmentId,
    GarmentRecord,
    OccasionFilter,
    WardrobeSummary,
    WearFreshness,
    SUGGESTION_COOLDOWN_DAYS,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus,
    register_notice_handlers,
    ClassificationFellBack,
    DomainEvent,
    EventBus,
    EventLogEntry,
    GarmentAdded,
    GarmentDeleted,
    GarmentWorn,
    ImageRejected,
    Notice,
    NoticeBoard,
    NoticeKind,
    SuggestionExhausted,
    SuggestionIssued,
    WardrobePersistFailed,
};

// ============================================================================
// PUBLIC API - Database / Repositories
// ============================================================================

pub use db::{create_connection_pool_at, initialize_database, ConnectionPool};

pub use repositories::{InMemoryWardrobeRepository, SqliteWardrobeRepository, WardrobeRepository};

// ============================================================================
// PUBLIC API - Infrastructure
// ============================================================================

pub use infrastructure::{
    Clock, FixedClock, ImagePayload, RandomSource, SequenceRandom, SystemClock, ThreadRandom,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    AddFlowState,
    ClassificationService,
    GarmentStore,
    StagedClassification,
    SuggestionOutcome,
    SuggestionSelector,
    WardrobeChange,
    WardrobeService,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use app::{init_app, AppConfig};
pub use application::AppState;

pub use application::commands;
pub use application::dto;

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::{DisabledClassifier, GeminiClient, GeminiConfig, ImageClassifier};
