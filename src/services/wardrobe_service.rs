// src/services/wardrobe_service.rs
//
// Wardrobe Service - inventory lifecycle and today's suggestion
//
// CRITICAL RULES:
// - All garment mutation goes through GarmentStore
// - The current suggestion is held by id only
// - Wearing or deleting the suggested garment clears the suggestion
// - A failed save never undoes a change; it is reported alongside it
// - No lock is held across the classification await
// - Lock order is store -> suggestion; add_flow is never held with either

use chrono::{DateTime, Local, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::{
    ClassificationOutcome, GarmentId, GarmentRecord, OccasionFilter, WardrobeSummary,
    WearFreshness,
};
use crate::error::{AppError, AppResult};
use crate::events::{
    ClassificationFellBack, EventBus, GarmentAdded, GarmentDeleted, GarmentWorn, ImageRejected,
    SuggestionExhausted, SuggestionIssued, WardrobePersistFailed,
};
use crate::infrastructure::Clock;
use crate::services::classification_service::ClassificationService;
use crate::services::garment_store::GarmentStore;
use crate::services::suggestion_service::{Selection, SuggestionSelector};

/// A photographed, classified garment awaiting commit or discard
#[derive(Debug, Clone, PartialEq)]
pub struct StagedClassification {
    /// Identifies the add attempt that produced this result
    pub ticket: u64,
    pub image_data: String,
    pub outcome: ClassificationOutcome,
}

/// Where the add-garment flow currently stands
#[derive(Debug, Clone, PartialEq)]
pub enum AddFlowState {
    Idle,
    Classifying { ticket: u64 },
    Staged(StagedClassification),
}

/// Answer to "what should I wear today?"
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionOutcome {
    /// No garments at all
    EmptyWardrobe,
    /// Garments exist but all were worn today or yesterday
    Exhausted,
    Suggested(GarmentRecord),
}

/// A wardrobe change that has been applied in memory.
///
/// `persist_error` is set when the change could not be written to storage;
/// the running session still sees the change.
#[derive(Debug)]
pub struct WardrobeChange<T> {
    pub value: T,
    pub persist_error: Option<AppError>,
}

impl<T> WardrobeChange<T> {
    pub fn is_persisted(&self) -> bool {
        self.persist_error.is_none()
    }
}

pub struct WardrobeService {
    store: Mutex<GarmentStore>,
    suggestion: Mutex<Option<GarmentId>>,
    add_flow: Mutex<AddFlowState>,
    next_ticket: AtomicU64,
    classification: ClassificationService,
    selector: SuggestionSelector,
    clock: Arc<dyn Clock>,
    event_bus: Arc<EventBus>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl WardrobeService {
    pub fn new(
        store: GarmentStore,
        classification: ClassificationService,
        selector: SuggestionSelector,
        clock: Arc<dyn Clock>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            store: Mutex::new(store),
            suggestion: Mutex::new(None),
            add_flow: Mutex::new(AddFlowState::Idle),
            next_ticket: AtomicU64::new(1),
            classification,
            selector,
            clock,
            event_bus,
        }
    }

    fn now(&self) -> DateTime<Local> {
        self.clock.now()
    }

    // ========================================================================
    // INVENTORY QUERIES
    // ========================================================================

    /// Every garment, newest first
    pub fn list_inventory(&self) -> Vec<GarmentRecord> {
        lock(&self.store).list().to_vec()
    }

    pub fn filtered_by_occasion(&self, filter: &OccasionFilter) -> Vec<GarmentRecord> {
        lock(&self.store)
            .filtered_by_occasion(filter)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn get_garment(&self, id: &GarmentId) -> Option<GarmentRecord> {
        lock(&self.store).get(id).cloned()
    }

    /// Freshness of a garment as of now
    pub fn freshness_of(&self, garment: &GarmentRecord) -> WearFreshness {
        garment.freshness(&self.now())
    }

    pub fn summary(&self) -> WardrobeSummary {
        let now = self.now();
        WardrobeSummary::compute(lock(&self.store).list(), &now)
    }

    // ========================================================================
    // ADD FLOW: Idle -> Classifying -> Staged -> (Committed | Discarded)
    // ========================================================================

    /// Classify a newly acquired image and stage the result.
    ///
    /// Starting a new add replaces any earlier staged or pending one.
    /// Returns `Ok(None)` when the attempt was discarded (or superseded)
    /// while classification was pending; that late result is dropped.
    pub async fn begin_add(&self, image_data: String) -> AppResult<Option<StagedClassification>> {
        if image_data.trim().is_empty() {
            self.event_bus.emit(ImageRejected::new("empty image".to_string()));
            return Err(AppError::InvalidState("Cannot add a garment without an image".to_string()));
        }

        let ticket = self.next_ticket.fetch_add(1, Ordering::SeqCst);
        *lock(&self.add_flow) = AddFlowState::Classifying { ticket };
        log::debug!("Add flow {}: classifying", ticket);

        let outcome = self.classification.classify(&image_data).await;

        let staged = {
            let mut flow = lock(&self.add_flow);
            let still_pending = matches!(
                &*flow,
                AddFlowState::Classifying { ticket: pending } if *pending == ticket
            );
            if !still_pending {
                log::debug!("Add flow {}: discarded before classification finished", ticket);
                return Ok(None);
            }

            let staged = StagedClassification {
                ticket,
                image_data,
                outcome,
            };
            *flow = AddFlowState::Staged(staged.clone());
            staged
        };
        log::debug!("Add flow {}: staged", ticket);

        // Only a staged result is reported; a dropped one has no side effects
        if staged.outcome.used_fallback() {
            self.event_bus.emit(ClassificationFellBack::new());
        }
        Ok(Some(staged))
    }

    /// Promote the staged classification to a wardrobe garment
    pub fn commit_add(&self) -> AppResult<WardrobeChange<GarmentRecord>> {
        let staged = {
            let mut flow = lock(&self.add_flow);
            match std::mem::replace(&mut *flow, AddFlowState::Idle) {
                AddFlowState::Staged(staged) => staged,
                other => {
                    *flow = other;
                    return Err(AppError::InvalidState(
                        "Nothing is staged to commit".to_string(),
                    ));
                }
            }
        };

        let garment = GarmentRecord::new(
            staged.image_data.clone(),
            staged.outcome.analysis.clone(),
            self.now().with_timezone(&Utc),
        );

        let saved = lock(&self.store).add(garment.clone());
        let persist_error = match saved {
            Ok(()) => None,
            Err(e @ AppError::Persistence(_)) => Some(e),
            Err(e) => {
                // Rejected before anything changed; keep the staged result
                *lock(&self.add_flow) = AddFlowState::Staged(staged);
                return Err(e);
            }
        };

        log::info!("Added {} ({})", garment.display_name(), garment.id);
        self.event_bus.emit(GarmentAdded::new(
            garment.id.clone(),
            garment.category.clone(),
            garment.occasion.clone(),
        ));

        Ok(self.settle(garment, persist_error))
    }

    /// Drop the staged or pending add. Returns false if nothing was in flight.
    pub fn discard_add(&self) -> bool {
        let previous = std::mem::replace(&mut *lock(&self.add_flow), AddFlowState::Idle);
        let discarded = previous != AddFlowState::Idle;
        if discarded {
            log::debug!("Add flow discarded");
        }
        discarded
    }

    pub fn add_flow_state(&self) -> AddFlowState {
        lock(&self.add_flow).clone()
    }

    // ========================================================================
    // WEAR / DELETE
    // ========================================================================

    /// Mark a garment worn now. Unknown ids are a no-op (`value == false`).
    pub fn wear(&self, id: &GarmentId) -> WardrobeChange<bool> {
        let worn_at = self.now().with_timezone(&Utc);

        let (found, persist_error, cleared) = {
            let mut store = lock(&self.store);
            let (found, persist_error) = match store.set_last_worn(id, worn_at) {
                Ok(found) => (found, None),
                Err(e) => (true, Some(e)),
            };
            let cleared = self.invalidate_suggestion_for(id);
            (found, persist_error, cleared)
        };

        if found {
            log::info!("Garment {} marked worn", id);
            self.event_bus.emit(GarmentWorn::new(id.clone(), worn_at, cleared));
        }

        self.settle(found, persist_error)
    }

    /// Remove a garment. Unknown ids are a no-op (`value == false`).
    pub fn delete(&self, id: &GarmentId) -> WardrobeChange<bool> {
        let (found, persist_error, cleared) = {
            let mut store = lock(&self.store);
            let (found, persist_error) = match store.remove(id) {
                Ok(found) => (found, None),
                Err(e) => (true, Some(e)),
            };
            let cleared = self.invalidate_suggestion_for(id);
            (found, persist_error, cleared)
        };

        if found {
            log::info!("Garment {} deleted", id);
            self.event_bus.emit(GarmentDeleted::new(id.clone(), cleared));
        }

        self.settle(found, persist_error)
    }

    // ========================================================================
    // SUGGESTION
    // ========================================================================

    /// Drop the current suggestion and draw a new one
    pub fn request_suggestion(&self) -> SuggestionOutcome {
        let now = self.now();

        let (outcome, eligible_count, wardrobe_size) = {
            let store = lock(&self.store);
            let mut current = lock(&self.suggestion);
            *current = None;

            if store.is_empty() {
                (SuggestionOutcome::EmptyWardrobe, 0, 0)
            } else {
                match self.selector.suggest(store.list(), &now) {
                    Selection::Picked {
                        garment,
                        eligible_count,
                    } => {
                        *current = Some(garment.id.clone());
                        (
                            SuggestionOutcome::Suggested(garment.clone()),
                            eligible_count,
                            store.len(),
                        )
                    }
                    Selection::Exhausted => (SuggestionOutcome::Exhausted, 0, store.len()),
                }
            }
        };

        match &outcome {
            SuggestionOutcome::Suggested(garment) => {
                log::info!(
                    "Suggested {} from {} eligible",
                    garment.display_name(),
                    eligible_count
                );
                self.event_bus
                    .emit(SuggestionIssued::new(garment.id.clone(), eligible_count));
            }
            SuggestionOutcome::Exhausted => {
                log::info!("All {} garments were worn recently", wardrobe_size);
                self.event_bus.emit(SuggestionExhausted::new(wardrobe_size));
            }
            SuggestionOutcome::EmptyWardrobe => {
                log::debug!("Suggestion requested on an empty wardrobe");
            }
        }

        outcome
    }

    /// The garment currently suggested, if any
    pub fn current_suggestion(&self) -> Option<GarmentRecord> {
        let store = lock(&self.store);
        let current = lock(&self.suggestion);
        current.as_ref().and_then(|id| store.get(id).cloned())
    }

    /// Write the wardrobe one last time (shutdown)
    pub fn flush(&self) -> AppResult<()> {
        lock(&self.store).flush()
    }

    // ========================================================================
    // INTERNAL
    // ========================================================================

    /// Clear the suggestion if it refers to `id`.
    /// Caller must hold the store lock (lock order).
    fn invalidate_suggestion_for(&self, id: &GarmentId) -> bool {
        let mut current = lock(&self.suggestion);
        if current.as_ref() == Some(id) {
            *current = None;
            true
        } else {
            false
        }
    }

    fn settle<T>(&self, value: T, persist_error: Option<AppError>) -> WardrobeChange<T> {
        if let Some(e) = &persist_error {
            self.event_bus.emit(WardrobePersistFailed::new(e.to_string()));
        }
        WardrobeChange {
            value,
            persist_error,
        }
    }
}
