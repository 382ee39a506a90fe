// src/integrations/classifier.rs
//
// Image classification boundary
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - Implementations return the service's raw answer text
// - Parsing, fence stripping and fallback live in ClassificationService

use async_trait::async_trait;

use crate::error::{AppError, AppResult};
use crate::infrastructure::ImagePayload;

/// Instruction sent alongside every garment photo
pub const CLASSIFICATION_PROMPT: &str = "Analyze this clothing item. Identify the primary category (e.g., Dress, Top, Pants), the dominant color, and the best suited occasion (e.g., Casual, Formal, Party, Work). Return valid JSON.";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageClassifier: Send + Sync {
    /// One request for one image. Returns the answer text as received.
    async fn classify_image(&self, image: &ImagePayload) -> AppResult<String>;
}

/// Used when no classifier credential is configured.
/// Every call fails, so every new garment gets the fallback triple.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledClassifier;

#[async_trait]
impl ImageClassifier for DisabledClassifier {
    async fn classify_image(&self, _image: &ImagePayload) -> AppResult<String> {
        Err(AppError::Classification(
            "No classifier configured".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_classifier_always_fails() {
        let image = ImagePayload::parse("data:image/jpeg;base64,AAAA");
        let result = DisabledClassifier.classify_image(&image).await;
        assert!(matches!(result, Err(AppError::Classification(_))));
    }
}
