// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod classification_service;
pub mod garment_store;
pub mod suggestion_service;
pub mod wardrobe_service;


// Re-export all services and their types
pub use classification_service::{parse_analysis, strip_code_fences, ClassificationService};

pub use garment_store::{GarmentStore, WARDROBE_DOCUMENT_KEY};

pub use suggestion_service::{Selection, SuggestionSelector};

pub use wardrobe_service::{
    AddFlowState,
    StagedClassification,
    SuggestionOutcome,
    WardrobeChange,
    WardrobeService,
};
