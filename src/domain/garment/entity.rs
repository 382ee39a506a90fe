use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::classification::AnalysisResult;
use crate::domain::freshness::WearFreshness;

/// Opaque garment identifier.
///
/// New ids are UUID v4 text. Documents written by earlier versions carry
/// numeric-string ids; both are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GarmentId(String);

impl GarmentId {
    /// Allocate a fresh, never-before-used identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for GarmentId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for GarmentId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for GarmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single tracked clothing item.
///
/// Field names on the wire match the persisted wardrobe document
/// (`imageData`, `lastWorn`, `createdAt`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GarmentRecord {
    /// Immutable identifier
    pub id: GarmentId,

    /// Encoded image (data URL), immutable after creation
    pub image_data: String,

    pub category: String,
    pub color: String,
    pub occasion: String,

    /// Last time the garment was marked worn (None = never)
    pub last_worn: Option<DateTime<Utc>>,

    /// Creation timestamp, never mutated
    pub created_at: DateTime<Utc>,
}

impl GarmentRecord {
    /// Create a new, never-worn garment from a committed classification
    pub fn new(image_data: String, analysis: AnalysisResult, created_at: DateTime<Utc>) -> Self {
        Self {
            id: GarmentId::generate(),
            image_data,
            category: analysis.category,
            color: analysis.color,
            occasion: analysis.occasion,
            last_worn: None,
            created_at,
        }
    }

    /// Record that the garment was worn at `at`.
    /// Earlier timestamps are accepted as given.
    pub fn mark_worn(&mut self, at: DateTime<Utc>) {
        self.last_worn = Some(at);
    }

    /// Freshness of this garment as seen from `now`
    pub fn freshness<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> WearFreshness {
        WearFreshness::evaluate(now, self.last_worn.as_ref())
    }

    /// Human-facing name, e.g. "Red Dress"
    pub fn display_name(&self) -> String {
        format!("{} {}", self.color, self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn analysis() -> AnalysisResult {
        AnalysisResult::new("Dress", "Red", "Party")
    }

    #[test]
    fn test_new_garment_is_never_worn() {
        let now = Utc::now();
        let garment = GarmentRecord::new("data:image/jpeg;base64,AAAA".to_string(), analysis(), now);

        assert!(garment.last_worn.is_none());
        assert_eq!(garment.created_at, now);
        assert_eq!(garment.category, "Dress");
        assert_eq!(garment.display_name(), "Red Dress");
    }

    #[test]
    fn test_generated_ids_are_distinct() {
        let a = GarmentId::generate();
        let b = GarmentId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_mark_worn_accepts_earlier_timestamp() {
        let now = Utc::now();
        let mut garment = GarmentRecord::new("img".to_string(), analysis(), now);

        garment.mark_worn(now);
        garment.mark_worn(now - Duration::days(5));

        assert_eq!(garment.last_worn, Some(now - Duration::days(5)));
    }

    #[test]
    fn test_serializes_with_document_field_names() {
        let garment = GarmentRecord::new("img".to_string(), analysis(), Utc::now());
        let json = serde_json::to_value(&garment).unwrap();

        assert!(json.get("imageData").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("lastWorn").unwrap().is_null());
        assert!(json.get("id").unwrap().is_string());
    }

    #[test]
    fn test_deserializes_legacy_document_entry() {
        let json = r#"{
            "id": "1717171717171",
            "imageData": "data:image/jpeg;base64,AAAA",
            "category": "Dress",
            "color": "Blue",
            "occasion": "Work",
            "lastWorn": "2024-05-31T18:30:00.000Z",
            "createdAt": "2024-05-01T09:00:00.000Z"
        }"#;

        let garment: GarmentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(garment.id.as_str(), "1717171717171");
        assert!(garment.last_worn.is_some());
    }
}
