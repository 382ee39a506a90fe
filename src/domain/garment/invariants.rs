use std::collections::HashSet;

use super::entity::{GarmentId, GarmentRecord};
use crate::domain::{DomainError, DomainResult};

/// Validates all single-garment invariants
pub fn validate_garment(garment: &GarmentRecord) -> DomainResult<()> {
    if garment.id.as_str().trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Garment id cannot be empty".to_string(),
        ));
    }

    if garment.image_data.is_empty() {
        return Err(DomainError::InvariantViolation(format!(
            "Garment {} has no image",
            garment.id
        )));
    }

    for (field, value) in [
        ("category", &garment.category),
        ("color", &garment.color),
        ("occasion", &garment.occasion),
    ] {
        if value.trim().is_empty() {
            return Err(DomainError::InvariantViolation(format!(
                "Garment {} has an empty {}",
                garment.id, field
            )));
        }
    }

    Ok(())
}

/// Ids that appear more than once, in order of their second appearance
pub fn find_duplicate_ids(garments: &[GarmentRecord]) -> Vec<GarmentId> {
    let mut seen = HashSet::new();
    garments
        .iter()
        .filter(|g| !seen.insert(&g.id))
        .map(|g| g.id.clone())
        .collect()
}

/// Critical Garment Invariants:
///
/// 1. id is assigned at creation and never changes or gets reused
/// 2. image and classification fields are immutable after creation
/// 3. last_worn is only changed by "mark worn"
/// 4. created_at is set once
/// 5. ids are unique across the collection

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AnalysisResult;
    use chrono::Utc;

    fn garment() -> GarmentRecord {
        GarmentRecord::new(
            "data:image/png;base64,AAAA".to_string(),
            AnalysisResult::new("Top", "White", "Casual"),
            Utc::now(),
        )
    }

    #[test]
    fn test_valid_garment() {
        assert!(validate_garment(&garment()).is_ok());
    }

    #[test]
    fn test_empty_image_fails() {
        let mut g = garment();
        g.image_data.clear();
        assert!(validate_garment(&g).is_err());
    }

    #[test]
    fn test_blank_classification_field_fails() {
        let mut g = garment();
        g.color = "   ".to_string();
        assert!(validate_garment(&g).is_err());
    }

    #[test]
    fn test_duplicate_ids_detected() {
        let a = garment();
        let b = garment();
        let mut a_copy = a.clone();
        a_copy.color = "Black".to_string();

        assert!(find_duplicate_ids(&[a.clone(), b.clone()]).is_empty());

        let dupes = find_duplicate_ids(&[a.clone(), b, a_copy]);
        assert_eq!(dupes, vec![a.id.clone()]);
    }
}
