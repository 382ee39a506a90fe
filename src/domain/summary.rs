// src/domain/summary.rs
//
// Wardrobe summary (derived data, never persisted)

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::garment::GarmentRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WardrobeSummary {
    pub total: usize,
    /// Garments that could be suggested right now
    pub eligible_today: usize,
    pub recently_worn: usize,
    pub never_worn: usize,
    /// Garment count per occasion tag, as classified
    pub by_occasion: BTreeMap<String, usize>,
}

impl WardrobeSummary {
    pub fn compute<Tz: TimeZone>(garments: &[GarmentRecord], now: &DateTime<Tz>) -> Self {
        let mut summary = Self {
            total: garments.len(),
            eligible_today: 0,
            recently_worn: 0,
            never_worn: 0,
            by_occasion: BTreeMap::new(),
        };

        for garment in garments {
            let freshness = garment.freshness(now);
            if freshness.eligible {
                summary.eligible_today += 1;
            }
            if freshness.recently_worn {
                summary.recently_worn += 1;
            }
            if freshness.days_since.is_none() {
                summary.never_worn += 1;
            }
            *summary
                .by_occasion
                .entry(garment.occasion.clone())
                .or_insert(0) += 1;
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AnalysisResult;
    use chrono::{Duration, Utc};

    #[test]
    fn test_summary_counts() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let make = |occasion: &str, worn: Option<i64>| {
            let mut g = GarmentRecord::new(
                "img".to_string(),
                AnalysisResult::new("Dress", "Red", occasion),
                now,
            );
            g.last_worn = worn.map(|d| now - Duration::days(d));
            g
        };

        let garments = vec![
            make("Party", None),
            make("Party", Some(0)),
            make("Work", Some(1)),
            make("Work", Some(5)),
        ];

        let summary = WardrobeSummary::compute(&garments, &now);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.eligible_today, 2);
        assert_eq!(summary.recently_worn, 2);
        assert_eq!(summary.never_worn, 1);
        assert_eq!(summary.by_occasion.get("Party"), Some(&2));
        assert_eq!(summary.by_occasion.get("Work"), Some(&2));
    }

    #[test]
    fn test_empty_summary() {
        let summary = WardrobeSummary::compute(&[], &Utc::now());
        assert_eq!(summary.total, 0);
        assert!(summary.by_occasion.is_empty());
    }
}
