// src/domain/classification.rs
//
// Classification results for a photographed garment.

use serde::{Deserialize, Serialize};

/// Category used when the classifier cannot be reached or understood
pub const FALLBACK_CATEGORY: &str = "Uncategorized";
/// Color used when the classifier cannot be reached or understood
pub const FALLBACK_COLOR: &str = "Unknown";
/// Occasion used when the classifier cannot be reached or understood
pub const FALLBACK_OCCASION: &str = "Casual";

/// The structured triple the classifier is asked for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub category: String,
    pub color: String,
    pub occasion: String,
}

impl AnalysisResult {
    pub fn new(
        category: impl Into<String>,
        color: impl Into<String>,
        occasion: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            color: color.into(),
            occasion: occasion.into(),
        }
    }

    /// The fixed default applied on any classification failure
    pub fn fallback() -> Self {
        Self::new(FALLBACK_CATEGORY, FALLBACK_COLOR, FALLBACK_OCCASION)
    }
}

/// Where a classification came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationSource {
    /// Parsed from the classifier's answer
    Model,
    /// Classifier failed; the fixed default was applied
    Fallback,
}

/// Classification result plus its provenance.
/// Always structurally valid, whichever way it was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationOutcome {
    pub analysis: AnalysisResult,
    pub source: ClassificationSource,
}

impl ClassificationOutcome {
    pub fn from_model(analysis: AnalysisResult) -> Self {
        Self {
            analysis,
            source: ClassificationSource::Model,
        }
    }

    pub fn fallback() -> Self {
        Self {
            analysis: AnalysisResult::fallback(),
            source: ClassificationSource::Fallback,
        }
    }

    pub fn used_fallback(&self) -> bool {
        self.source == ClassificationSource::Fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_values() {
        let outcome = ClassificationOutcome::fallback();
        assert!(outcome.used_fallback());
        assert_eq!(outcome.analysis.category, "Uncategorized");
        assert_eq!(outcome.analysis.color, "Unknown");
        assert_eq!(outcome.analysis.occasion, "Casual");
    }

    #[test]
    fn test_model_outcome_is_not_fallback() {
        let outcome = ClassificationOutcome::from_model(AnalysisResult::new("Dress", "Green", "Formal"));
        assert!(!outcome.used_fallback());
    }
}
