// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs are simple, serializable structs
// - Conversion FROM domain values only (never TO)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::{GarmentRecord, WardrobeSummary, WearFreshness};
use crate::services::{StagedClassification, WardrobeChange};

/// Shown when every garment was worn today or yesterday
pub const EXHAUSTED_MESSAGE: &str =
    "Everything in your wardrobe has been worn recently! Maybe time for some laundry?";

/// Shown when there is nothing to suggest from
pub const EMPTY_WARDROBE_MESSAGE: &str =
    "Closet is Empty. Add photos of your dresses to get smart outfit suggestions.";

// ============================================================================
// GARMENT DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GarmentDto {
    pub id: String,
    pub image_data: String,
    pub category: String,
    pub color: String,
    pub occasion: String,
    pub last_worn: Option<String>,
    pub created_at: String,
    pub recency_label: String,
    pub recently_worn: bool,
    pub eligible: bool,
    pub days_since_worn: Option<i64>,
}

impl GarmentDto {
    /// Pair a garment with its freshness as of the moment of the query
    pub fn new(garment: GarmentRecord, freshness: WearFreshness) -> Self {
        Self {
            id: garment.id.to_string(),
            image_data: garment.image_data,
            category: garment.category,
            color: garment.color,
            occasion: garment.occasion,
            last_worn: garment.last_worn.map(|dt| dt.to_rfc3339()),
            created_at: garment.created_at.to_rfc3339(),
            recency_label: freshness.label,
            recently_worn: freshness.recently_worn,
            eligible: freshness.eligible,
            days_since_worn: freshness.days_since,
        }
    }
}

/// Classification awaiting the user's confirmation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StagedClassificationDto {
    pub category: String,
    pub color: String,
    pub occasion: String,
    pub used_fallback: bool,
}

impl From<StagedClassification> for StagedClassificationDto {
    fn from(staged: StagedClassification) -> Self {
        let used_fallback = staged.outcome.used_fallback();
        let analysis = staged.outcome.analysis;
        Self {
            category: analysis.category,
            color: analysis.color,
            occasion: analysis.occasion,
            used_fallback,
        }
    }
}

/// Result of beginning an add: `staged` is None when it was discarded
/// before classification finished
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BeginAddDto {
    pub staged: Option<StagedClassificationDto>,
}

// ============================================================================
// MUTATION DTOs
// ============================================================================

/// Outcome of wear/delete/commit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MutationResponseDto<T> {
    /// False when the id was unknown (no-op)
    pub applied: bool,
    pub value: Option<T>,
    /// Non-blocking notice when the change could not be saved
    pub persist_warning: Option<String>,
}

impl MutationResponseDto<()> {
    pub fn from_flag(change: WardrobeChange<bool>) -> Self {
        Self {
            applied: change.value,
            value: None,
            persist_warning: change.persist_error.map(|e| e.to_string()),
        }
    }
}

impl<T> MutationResponseDto<T> {
    pub fn from_value<U>(change: WardrobeChange<U>, convert: impl FnOnce(U) -> T) -> Self {
        Self {
            applied: true,
            value: Some(convert(change.value)),
            persist_warning: change.persist_error.map(|e| e.to_string()),
        }
    }
}

// ============================================================================
// SUGGESTION DTOs
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionStatus {
    Suggested,
    Exhausted,
    EmptyWardrobe,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuggestionDto {
    pub status: SuggestionStatus,
    pub garment: Option<GarmentDto>,
    pub message: Option<String>,
}

impl SuggestionDto {
    pub fn suggested(garment: GarmentDto) -> Self {
        Self {
            status: SuggestionStatus::Suggested,
            garment: Some(garment),
            message: None,
        }
    }

    pub fn exhausted() -> Self {
        Self {
            status: SuggestionStatus::Exhausted,
            garment: None,
            message: Some(EXHAUSTED_MESSAGE.to_string()),
        }
    }

    pub fn empty_wardrobe() -> Self {
        Self {
            status: SuggestionStatus::EmptyWardrobe,
            garment: None,
            message: Some(EMPTY_WARDROBE_MESSAGE.to_string()),
        }
    }
}

// ============================================================================
// SUMMARY DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WardrobeSummaryDto {
    pub total: usize,
    pub eligible_today: usize,
    pub recently_worn: usize,
    pub never_worn: usize,
    pub by_occasion: BTreeMap<String, usize>,
}

impl From<WardrobeSummary> for WardrobeSummaryDto {
    fn from(summary: WardrobeSummary) -> Self {
        Self {
            total: summary.total,
            eligible_today: summary.eligible_today,
            recently_worn: summary.recently_worn,
            never_worn: summary.never_worn,
            by_occasion: summary.by_occasion,
        }
    }
}
