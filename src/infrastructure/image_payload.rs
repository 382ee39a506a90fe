// src/infrastructure/image_payload.rs
//
// Garment photos travel and persist as data URLs
// (`data:<mime>;base64,<payload>`).

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::Path;

use crate::error::{AppError, AppResult};

/// MIME type assumed when none is known
pub const DEFAULT_MIME_TYPE: &str = "image/jpeg";

/// A base64-encoded image and its MIME type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub mime_type: String,
    pub base64_data: String,
}

impl ImagePayload {
    /// Encode raw image bytes
    pub fn from_bytes(bytes: &[u8], mime_type: &str) -> Self {
        Self {
            mime_type: mime_type.to_string(),
            base64_data: STANDARD.encode(bytes),
        }
    }

    /// Read and encode an image file; MIME type comes from the extension
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let bytes = std::fs::read(path)?;
        if bytes.is_empty() {
            return Err(AppError::Other(format!(
                "Image file is empty: {}",
                path.display()
            )));
        }
        Ok(Self::from_bytes(&bytes, mime_type_for_path(path)))
    }

    /// Split a data URL into MIME type and payload.
    /// Text without a data URL prefix is taken as bare base64 JPEG.
    pub fn parse(text: &str) -> Self {
        let parsed = text
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(','))
            .map(|(header, data)| {
                let mime = header
                    .split(';')
                    .next()
                    .filter(|m| !m.is_empty())
                    .unwrap_or(DEFAULT_MIME_TYPE);
                (mime.to_string(), data.to_string())
            });

        match parsed {
            Some((mime_type, base64_data)) => Self {
                mime_type,
                base64_data,
            },
            None => Self {
                mime_type: DEFAULT_MIME_TYPE.to_string(),
                base64_data: text.to_string(),
            },
        }
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64_data)
    }
}

fn mime_type_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => DEFAULT_MIME_TYPE,
    }
}
