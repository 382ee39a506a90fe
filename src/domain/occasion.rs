// src/domain/occasion.rs
//
// Occasion filtering for the wardrobe view.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

/// Occasion tags the classifier is prompted with
pub const KNOWN_OCCASIONS: [&str; 4] = ["Casual", "Formal", "Party", "Work"];

/// Which garments to show, by occasion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "tag", rename_all = "snake_case")]
pub enum OccasionFilter {
    All,
    Occasion(String),
}

impl OccasionFilter {
    /// Filter for an optional user selection.
    /// None, blank input and "all" select everything; anything else is a tag.
    pub fn from_selection(selection: Option<&str>) -> Self {
        let trimmed = selection.unwrap_or_default().trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            OccasionFilter::All
        } else {
            OccasionFilter::Occasion(trimmed.to_string())
        }
    }

    /// Occasion tags match ignoring case and surrounding whitespace
    pub fn matches(&self, occasion: &str) -> bool {
        match self {
            OccasionFilter::All => true,
            OccasionFilter::Occasion(tag) => tag.trim().eq_ignore_ascii_case(occasion.trim()),
        }
    }
}

impl FromStr for OccasionFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_selection(Some(s)))
    }
}

impl std::fmt::Display for OccasionFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OccasionFilter::All => write!(f, "All"),
            OccasionFilter::Occasion(tag) => write!(f, "{}", tag),
        }
    }
}
