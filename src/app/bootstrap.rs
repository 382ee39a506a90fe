// src/app/bootstrap.rs
//
// Application Initialization
//
// Builds the event bus, storage, classifier and wardrobe service once per
// process and hands them to the command layer as AppState.
//
// CRITICAL RULES:
// - One store per process; no globals
// - A missing API key disables classification, it does not fail startup
// - The wardrobe is loaded before the first command runs

use std::sync::Arc;

use crate::app::config::AppConfig;
use crate::application::AppState;
use crate::db::{
    create_connection_pool_at, get_connection, get_database_path, initialize_database,
    verify_database_integrity,
};
use crate::error::AppResult;
use crate::events::{create_event_bus, register_notice_handlers};
use crate::infrastructure::{Clock, RandomSource, SystemClock, ThreadRandom};
use crate::integrations::{DisabledClassifier, GeminiClient, ImageClassifier};
use crate::repositories::{SqliteWardrobeRepository, WardrobeRepository};
use crate::services::{ClassificationService, GarmentStore, SuggestionSelector, WardrobeService};

/// Initialize the application from configuration.
///
/// This function:
/// 1. Opens (and if needed creates) the SQLite database
/// 2. Selects the classifier (Gemini, or disabled without a key)
/// 3. Loads the wardrobe and wires the service to the event bus
pub fn init_app(config: &AppConfig) -> AppResult<AppState> {
    let db_path = match &config.db_path {
        Some(path) => path.clone(),
        None => get_database_path()?,
    };
    log::info!("Using wardrobe database at {}", db_path.display());

    let pool = Arc::new(create_connection_pool_at(&db_path)?);
    {
        let conn = get_connection(&pool)?;
        initialize_database(&conn)?;
        verify_database_integrity(&conn)?;
    }
    let repository: Arc<dyn WardrobeRepository> = Arc::new(SqliteWardrobeRepository::new(pool));

    let classifier: Arc<dyn ImageClassifier> = match config.gemini_config() {
        Some(gemini) => {
            log::info!("Classifying garments with {}", gemini.model);
            Arc::new(GeminiClient::new(gemini)?)
        }
        None => {
            log::warn!("No Gemini API key configured; new garments get default tags");
            Arc::new(DisabledClassifier)
        }
    };

    Ok(assemble_state(
        repository,
        classifier,
        Arc::new(SystemClock),
        Arc::new(ThreadRandom),
    ))
}

/// Wire services over already-built infrastructure
pub fn assemble_state(
    repository: Arc<dyn WardrobeRepository>,
    classifier: Arc<dyn ImageClassifier>,
    clock: Arc<dyn Clock>,
    random: Arc<dyn RandomSource>,
) -> AppState {
    let event_bus = create_event_bus();
    let notices = register_notice_handlers(&event_bus);

    let wardrobe_service = Arc::new(WardrobeService::new(
        GarmentStore::open(repository),
        ClassificationService::new(classifier),
        SuggestionSelector::new(random),
        clock,
        event_bus.clone(),
    ));

    AppState {
        event_bus,
        notices,
        wardrobe_service,
    }
}

// ============================================================================
// TESTS
// ============================================================================
