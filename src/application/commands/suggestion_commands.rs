// src/application/commands/suggestion_commands.rs
//
// Suggestion Command Handlers

use crate::application::{dto::*, state::AppState};
use crate::services::SuggestionOutcome;

/// Draw a new suggestion for today
pub async fn request_suggestion(state: &AppState) -> Result<SuggestionDto, String> {
    let service = &state.wardrobe_service;

    Ok(match service.request_suggestion() {
        SuggestionOutcome::Suggested(garment) => {
            let freshness = service.freshness_of(&garment);
            SuggestionDto::suggested(GarmentDto::new(garment, freshness))
        }
        SuggestionOutcome::Exhausted => SuggestionDto::exhausted(),
        SuggestionOutcome::EmptyWardrobe => SuggestionDto::empty_wardrobe(),
    })
}

/// The suggestion currently shown, if any
pub async fn current_suggestion(state: &AppState) -> Result<Option<GarmentDto>, String> {
    let service = &state.wardrobe_service;

    Ok(service.current_suggestion().map(|garment| {
        let freshness = service.freshness_of(&garment);
        GarmentDto::new(garment, freshness)
    }))
}
