// src/services/suggestion_service.rs
//
// Suggestion Selector - picks today's outfit
//
// CRITICAL RULES:
// - Only garments eligible under WearFreshness are ever picked
// - Uniform choice among eligible garments
// - No memory between draws

use chrono::{DateTime, TimeZone};
use std::sync::Arc;

use crate::domain::GarmentRecord;
use crate::infrastructure::RandomSource;

/// Result of one draw
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<'a> {
    Picked {
        garment: &'a GarmentRecord,
        eligible_count: usize,
    },
    /// Nothing is eligible (including the empty-wardrobe case)
    Exhausted,
}

pub struct SuggestionSelector {
    random: Arc<dyn RandomSource>,
}

impl SuggestionSelector {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// Garments that may be suggested at `now`, in collection order
    pub fn eligible<'a, Tz: TimeZone>(
        garments: &'a [GarmentRecord],
        now: &DateTime<Tz>,
    ) -> Vec<&'a GarmentRecord> {
        garments
            .iter()
            .filter(|g| g.freshness(now).eligible)
            .collect()
    }

    pub fn suggest<'a, Tz: TimeZone>(
        &self,
        garments: &'a [GarmentRecord],
        now: &DateTime<Tz>,
    ) -> Selection<'a> {
        let eligible = Self::eligible(garments, now);
        if eligible.is_empty() {
            return Selection::Exhausted;
        }

        let index = self.random.pick_index(eligible.len()).min(eligible.len() - 1);
        Selection::Picked {
            garment: eligible[index],
            eligible_count: eligible.len(),
        }
    }
}
