// src/domain/freshness.rs
//
// Wear freshness - the "don't repeat within 2 days" rule.
//
// Eligibility, the recency label and the recently-worn flag are all views
// of a single calendar-day difference computed here. Nothing else in the
// crate does day arithmetic on last-worn timestamps.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Garments worn fewer than this many calendar days ago are not suggested
pub const SUGGESTION_COOLDOWN_DAYS: i64 = 2;

/// Freshness of one garment at one moment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WearFreshness {
    /// Whole calendar days between last wear and now (None = never worn)
    pub days_since: Option<i64>,

    /// Whether the garment may be suggested
    pub eligible: bool,

    /// Display flag, always the negation of `eligible` for worn garments
    pub recently_worn: bool,

    /// "Never worn", "Worn today", "Worn yesterday" or "N days ago"
    pub label: String,
}

impl WearFreshness {
    /// Evaluate freshness at `now`.
    ///
    /// Days are counted on calendar dates in `now`'s time zone, so a garment
    /// worn at 23:59 and evaluated at 00:01 the next day is one day old.
    /// A last-worn time in the future counts by absolute distance.
    pub fn evaluate<Tz: TimeZone>(now: &DateTime<Tz>, last_worn: Option<&DateTime<Utc>>) -> Self {
        match last_worn {
            None => Self::never_worn(),
            Some(worn) => {
                let today = now.date_naive();
                let worn_day = worn.with_timezone(&now.timezone()).date_naive();
                Self::from_days((today - worn_day).num_days().abs())
            }
        }
    }

    fn never_worn() -> Self {
        Self {
            days_since: None,
            eligible: true,
            recently_worn: false,
            label: "Never worn".to_string(),
        }
    }

    fn from_days(days: i64) -> Self {
        let recently_worn = days < SUGGESTION_COOLDOWN_DAYS;
        let label = match days {
            0 => "Worn today".to_string(),
            1 => "Worn yesterday".to_string(),
            n => format!("{} days ago", n),
        };

        Self {
            days_since: Some(days),
            eligible: !recently_worn,
            recently_worn,
            label,
        }
    }
}
