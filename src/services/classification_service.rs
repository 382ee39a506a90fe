// src/services/classification_service.rs
//
// Classification Service - wraps the external classifier
//
// CRITICAL RULES:
// - Always returns a usable triple; never an error
// - Exactly one classifier call per image, no retry
// - Any failure yields the fixed fallback, marked as such

use serde::Deserialize;
use std::sync::Arc;

use crate::domain::{AnalysisResult, ClassificationOutcome};
use crate::error::{AppError, AppResult};
use crate::infrastructure::ImagePayload;
use crate::integrations::ImageClassifier;

pub struct ClassificationService {
    classifier: Arc<dyn ImageClassifier>,
}

impl ClassificationService {
    pub fn new(classifier: Arc<dyn ImageClassifier>) -> Self {
        Self { classifier }
    }

    /// Classify an encoded image (data URL or bare base64)
    pub async fn classify(&self, image_data: &str) -> ClassificationOutcome {
        let image = ImagePayload::parse(image_data.trim());

        match self.try_classify(&image).await {
            Ok(analysis) => {
                log::debug!(
                    "Classified garment as {} / {} / {}",
                    analysis.category,
                    analysis.color,
                    analysis.occasion
                );
                ClassificationOutcome::from_model(analysis)
            }
            Err(e) => {
                log::warn!("Garment classification failed, using fallback: {}", e);
                ClassificationOutcome::fallback()
            }
        }
    }

    async fn try_classify(&self, image: &ImagePayload) -> AppResult<AnalysisResult> {
        if image.base64_data.is_empty() {
            return Err(AppError::Classification("Image payload is empty".to_string()));
        }

        let text = self.classifier.classify_image(image).await?;
        parse_analysis(&text)
    }
}

/// Remove Markdown code fences the model sometimes wraps JSON in
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

#[derive(Debug, Deserialize)]
struct RawAnalysis {
    category: Option<String>,
    color: Option<String>,
    occasion: Option<String>,
}

/// Parse classifier text into a triple.
/// Missing, blank or non-string fields are errors.
pub fn parse_analysis(text: &str) -> AppResult<AnalysisResult> {
    let cleaned = strip_code_fences(text);
    if cleaned.is_empty() {
        return Err(AppError::Classification("Empty classifier response".to_string()));
    }

    let raw: RawAnalysis = serde_json::from_str(&cleaned)
        .map_err(|e| AppError::Classification(format!("Unparseable classifier response: {}", e)))?;

    Ok(AnalysisResult::new(
        required_field("category", raw.category)?,
        required_field("color", raw.color)?,
        required_field("occasion", raw.occasion)?,
    ))
}

fn required_field(name: &str, value: Option<String>) -> AppResult<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Classification(format!("Classifier response is missing {}", name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ClassificationSource;
    use crate::integrations::{DisabledClassifier, MockImageClassifier};

    fn service_answering(answer: AppResult<String>) -> ClassificationService {
        let mut classifier = MockImageClassifier::new();
        let mut answer = Some(answer);
        classifier
            .expect_classify_image()
            .times(1)
            .returning(move |_| answer.take().unwrap_or_else(|| Ok(String::new())));
        ClassificationService::new(Arc::new(classifier))
    }

    const IMAGE: &str = "data:image/jpeg;base64,/9j/AAAA";

    #[tokio::test]
    async fn test_well_formed_response() {
        let service = service_answering(Ok(
            r#"{"category":"Dress","color":"Red","occasion":"Party"}"#.to_string(),
        ));

        let outcome = service.classify(IMAGE).await;
        assert_eq!(outcome.source, ClassificationSource::Model);
        assert_eq!(outcome.analysis, AnalysisResult::new("Dress", "Red", "Party"));
    }

    #[tokio::test]
    async fn test_fenced_response_is_unwrapped() {
        let service = service_answering(Ok(
            "```json\n{\"category\":\"Top\",\"color\":\"White\",\"occasion\":\"Work\"}\n```"
                .to_string(),
        ));

        let outcome = service.classify(IMAGE).await;
        assert!(!outcome.used_fallback());
        assert_eq!(outcome.analysis, AnalysisResult::new("Top", "White", "Work"));
    }

    #[tokio::test]
    async fn test_transport_failure_falls_back() {
        let service =
            service_answering(Err(AppError::Classification("connection reset".to_string())));

        let outcome = service.classify(IMAGE).await;
        assert_eq!(outcome, ClassificationOutcome::fallback());
    }

    #[tokio::test]
    async fn test_non_json_falls_back() {
        let service = service_answering(Ok("I think this is a red dress.".to_string()));
        assert!(service.classify(IMAGE).await.used_fallback());
    }

    #[tokio::test]
    async fn test_missing_field_falls_back() {
        let service = service_answering(Ok(r#"{"category":"Dress","color":"Red"}"#.to_string()));
        assert!(service.classify(IMAGE).await.used_fallback());
    }

    #[tokio::test]
    async fn test_empty_response_falls_back() {
        let service = service_answering(Ok("```\n```".to_string()));
        assert!(service.classify(IMAGE).await.used_fallback());
    }

    #[tokio::test]
    async fn test_data_url_prefix_is_stripped_before_sending() {
        let mut classifier = MockImageClassifier::new();
        classifier
            .expect_classify_image()
            .withf(|image: &ImagePayload| image.mime_type == "image/png" && image.base64_data == "AAAA")
            .times(1)
            .returning(|_| Ok(r#"{"category":"Pants","color":"Blue","occasion":"Casual"}"#.to_string()));
        let service = ClassificationService::new(Arc::new(classifier));

        let outcome = service.classify("data:image/png;base64,AAAA").await;
        assert!(!outcome.used_fallback());
    }

    #[tokio::test]
    async fn test_empty_image_skips_classifier() {
        let mut classifier = MockImageClassifier::new();
        classifier.expect_classify_image().times(0);
        let service = ClassificationService::new(Arc::new(classifier));

        assert!(service.classify("data:image/jpeg;base64,").await.used_fallback());
    }

    #[tokio::test]
    async fn test_disabled_classifier_falls_back() {
        let service = ClassificationService::new(Arc::new(DisabledClassifier));
        assert!(service.classify(IMAGE).await.used_fallback());
    }

    #[test]
    fn test_parse_trims_fields() {
        let analysis =
            parse_analysis(r#"{"category":" Dress ","color":"Red","occasion":"Party"}"#).unwrap();
        assert_eq!(analysis.category, "Dress");
    }

    #[test]
    fn test_parse_rejects_blank_field() {
        assert!(parse_analysis(r#"{"category":"","color":"Red","occasion":"Party"}"#).is_err());
    }

    #[test]
    fn test_parse_rejects_non_string_field() {
        assert!(parse_analysis(r#"{"category":3,"color":"Red","occasion":"Party"}"#).is_err());
    }

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("```json\n{}\n```"), "{}");
        assert_eq!(strip_code_fences("  {}  "), "{}");
    }
}
