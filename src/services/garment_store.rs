// src/services/garment_store.rs
//
// Garment Store - the canonical wardrobe collection
//
// CRITICAL RULES:
// - The only owner of garment records; everything else refers by id
// - Every mutation is followed by a full save
// - Memory is authoritative: a failed save never rolls a change back
// - A missing or unreadable document loads as an empty wardrobe

use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::{
    find_duplicate_ids, validate_garment, DomainError, GarmentId, GarmentRecord, OccasionFilter,
};
use crate::error::{AppError, AppResult};
use crate::repositories::WardrobeRepository;

/// Storage key of the wardrobe document
pub const WARDROBE_DOCUMENT_KEY: &str = "chicpick_dresses";

pub struct GarmentStore {
    repository: Arc<dyn WardrobeRepository>,
    garments: Vec<GarmentRecord>,
}

impl GarmentStore {
    /// Open the store and load whatever the repository holds
    pub fn open(repository: Arc<dyn WardrobeRepository>) -> Self {
        let mut store = Self {
            repository,
            garments: Vec::new(),
        };
        store.garments = store.load();
        log::info!("Wardrobe loaded with {} garments", store.garments.len());
        store
    }

    /// Read the persisted collection.
    ///
    /// Never fails: absent, unreadable or malformed documents yield an empty
    /// collection. Repeated ids keep their first occurrence.
    pub fn load(&self) -> Vec<GarmentRecord> {
        let document = match self.repository.read_document(WARDROBE_DOCUMENT_KEY) {
            Ok(Some(document)) => document,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("Failed to read wardrobe document, starting empty: {}", e);
                return Vec::new();
            }
        };

        let garments: Vec<GarmentRecord> = match serde_json::from_str(&document) {
            Ok(garments) => garments,
            Err(e) => {
                log::warn!("Failed to parse wardrobe document, starting empty: {}", e);
                return Vec::new();
            }
        };

        let duplicates = find_duplicate_ids(&garments);
        if duplicates.is_empty() {
            return garments;
        }

        log::warn!(
            "Wardrobe document repeats {} garment id(s); keeping first occurrences",
            duplicates.len()
        );
        let mut seen = HashSet::new();
        garments
            .into_iter()
            .filter(|g| seen.insert(g.id.clone()))
            .collect()
    }

    /// Write the full collection.
    ///
    /// Any failure is reported as `AppError::Persistence`.
    pub fn save(&self) -> AppResult<()> {
        let document = serde_json::to_string(&self.garments)
            .map_err(|e| AppError::Persistence(format!("Failed to encode wardrobe: {}", e)))?;

        self.repository
            .write_document(WARDROBE_DOCUMENT_KEY, &document)
            .map_err(|e| {
                log::error!("Failed to save wardrobe: {}", e);
                AppError::Persistence(e.to_string())
            })
    }

    /// Final write at shutdown
    pub fn flush(&self) -> AppResult<()> {
        self.save()
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// Newest first
    pub fn list(&self) -> &[GarmentRecord] {
        &self.garments
    }

    pub fn get(&self, id: &GarmentId) -> Option<&GarmentRecord> {
        self.garments.iter().find(|g| &g.id == id)
    }

    pub fn len(&self) -> usize {
        self.garments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.garments.is_empty()
    }

    pub fn filtered_by_occasion(&self, filter: &OccasionFilter) -> Vec<&GarmentRecord> {
        self.garments
            .iter()
            .filter(|g| filter.matches(&g.occasion))
            .collect()
    }

    // ========================================================================
    // MUTATIONS
    //
    // Err(AppError::Persistence) always means the in-memory change was made.
    // ========================================================================

    /// Prepend a new garment.
    ///
    /// Invalid records and id collisions are rejected before anything changes.
    pub fn add(&mut self, garment: GarmentRecord) -> AppResult<()> {
        validate_garment(&garment)?;
        if self.get(&garment.id).is_some() {
            return Err(DomainError::DuplicateId(garment.id.to_string()).into());
        }

        self.garments.insert(0, garment);
        self.save()
    }

    /// Remove a garment. Returns false (and writes nothing) if absent.
    pub fn remove(&mut self, id: &GarmentId) -> AppResult<bool> {
        let before = self.garments.len();
        self.garments.retain(|g| &g.id != id);
        if self.garments.len() == before {
            return Ok(false);
        }

        self.save()?;
        Ok(true)
    }

    /// Set one garment's last-worn time. Returns false (and writes nothing)
    /// if absent.
    pub fn set_last_worn(&mut self, id: &GarmentId, at: DateTime<Utc>) -> AppResult<bool> {
        match self.garments.iter_mut().find(|g| &g.id == id) {
            Some(garment) => garment.mark_worn(at),
            None => return Ok(false),
        }

        self.save()?;
        Ok(true)
    }
}
