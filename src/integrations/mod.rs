// src/integrations/mod.rs
//
// External Integrations Module

pub mod classifier;
pub mod gemini;

pub use classifier::{DisabledClassifier, ImageClassifier};
pub use gemini::client::{GeminiClient, GeminiConfig};

#[cfg(test)]
pub use classifier::MockImageClassifier;
