// src/application/commands/wardrobe_commands.rs
//
// Wardrobe Command Handlers
//
// RULES:
// - Accept plain values
// - Call services
// - Return DTOs

use std::path::Path;

use crate::application::{dto::*, error_handling::*, state::AppState};
use crate::domain::{GarmentId, OccasionFilter};
use crate::events::ImageRejected;
use crate::infrastructure::ImagePayload;

/// List garments, newest first. `occasion` of None, "" or "All" lists everything.
pub async fn list_inventory(
    occasion: Option<String>,
    state: &AppState,
) -> Result<Vec<GarmentDto>, String> {
    let service = &state.wardrobe_service;
    let filter = OccasionFilter::from_selection(occasion.as_deref());

    Ok(service
        .filtered_by_occasion(&filter)
        .into_iter()
        .map(|g| {
            let freshness = service.freshness_of(&g);
            GarmentDto::new(g, freshness)
        })
        .collect())
}

/// Get a single garment by id
pub async fn get_garment(garment_id: String, state: &AppState) -> Result<GarmentDto, String> {
    let service = &state.wardrobe_service;
    let garment = service
        .get_garment(&GarmentId::from(garment_id))
        .ok_or_else(|| ErrorResponse::not_found("Garment").to_json())?;

    let freshness = service.freshness_of(&garment);
    Ok(GarmentDto::new(garment, freshness))
}

/// Classify an encoded image and stage it for confirmation
pub async fn begin_add(image_data: String, state: &AppState) -> Result<BeginAddDto, String> {
    let staged = state
        .wardrobe_service
        .begin_add(image_data)
        .await
        .to_error_response()?;

    Ok(BeginAddDto {
        staged: staged.map(StagedClassificationDto::from),
    })
}

/// Read an image file, then stage it like `begin_add`
pub async fn begin_add_from_file(path: String, state: &AppState) -> Result<BeginAddDto, String> {
    let payload = match ImagePayload::from_path(Path::new(&path)) {
        Ok(payload) => payload,
        Err(e) => {
            state.event_bus.emit(ImageRejected::new(format!("{}: {}", path, e)));
            return Err(ErrorResponse::from_app_error(e).to_json());
        }
    };
    begin_add(payload.to_data_url(), state).await
}

/// Save the staged garment to the wardrobe
pub async fn commit_add(state: &AppState) -> Result<MutationResponseDto<GarmentDto>, String> {
    let service = &state.wardrobe_service;
    let change = service.commit_add().to_error_response()?;

    Ok(MutationResponseDto::from_value(change, |g| {
        let freshness = service.freshness_of(&g);
        GarmentDto::new(g, freshness)
    }))
}

/// Throw away the staged (or still classifying) garment
pub async fn discard_add(state: &AppState) -> Result<bool, String> {
    Ok(state.wardrobe_service.discard_add())
}

/// Mark a garment worn today
pub async fn wear_garment(
    garment_id: String,
    state: &AppState,
) -> Result<MutationResponseDto<()>, String> {
    let change = state.wardrobe_service.wear(&GarmentId::from(garment_id));
    Ok(MutationResponseDto::from_flag(change))
}

/// Remove a garment
pub async fn delete_garment(
    garment_id: String,
    state: &AppState,
) -> Result<MutationResponseDto<()>, String> {
    let change = state.wardrobe_service.delete(&GarmentId::from(garment_id));
    Ok(MutationResponseDto::from_flag(change))
}

/// Counts by freshness and occasion
pub async fn wardrobe_summary(state: &AppState) -> Result<WardrobeSummaryDto, String> {
    Ok(state.wardrobe_service.summary().into())
}
