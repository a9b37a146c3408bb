use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Importance class of a label. The numeric form (1-4) is the wire format;
/// in code the named variants keep weight comparisons readable. Ordering
/// follows the numeric value, so `Hero` sorts above `Light`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Weight {
    Light = 1,
    Medium = 2,
    Bold = 3,
    Hero = 4,
}

impl TryFrom<u8> for Weight {
    type Error = CatalogError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Weight::Light),
            2 => Ok(Weight::Medium),
            3 => Ok(Weight::Bold),
            4 => Ok(Weight::Hero),
            other => Err(CatalogError::WeightOutOfRange(other)),
        }
    }
}

impl From<Weight> for u8 {
    fn from(weight: Weight) -> u8 {
        weight as u8
    }
}

/// One entry of the cloud catalog: the rendered text and its weight class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    pub weight: Weight,
}

impl Label {
    pub fn new(text: impl Into<String>, weight: Weight) -> Self {
        Self {
            text: text.into(),
            weight,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("label weight must be between 1 and 4, got {0}")]
    WeightOutOfRange(u8),
    #[error("label text must not be empty")]
    EmptyText,
    #[error("duplicate label text: {0:?}")]
    DuplicateText(String),
}

/// The compiled-in catalog, straight from the HALP about page.
pub fn default_catalog() -> Vec<Label> {
    vec![
        Label::new("Cardiff University", Weight::Hero),
        Label::new("Atradius employees", Weight::Bold),
        Label::new("Computer Science students", Weight::Bold),
        Label::new("Innovator", Weight::Medium),
        Label::new("Geo guessr master", Weight::Medium),
        Label::new("Poet", Weight::Medium),
        Label::new("Worst Gamer", Weight::Light),
        Label::new("Frisbeeer", Weight::Medium),
    ]
}

/// Reject catalogs the placement pass cannot handle meaningfully: blank
/// label text and repeated labels. Weight range is enforced at the type
/// level when deserializing.
pub fn validate_catalog(labels: &[Label]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for label in labels {
        if label.text.trim().is_empty() {
            return Err(CatalogError::EmptyText);
        }
        if !seen.insert(label.text.as_str()) {
            return Err(CatalogError::DuplicateText(label.text.clone()));
        }
    }
    Ok(())
}

/// Parse a catalog from JSON, accepting JSON5 (comments, trailing commas,
/// unquoted keys) as a lenient fallback for hand-written files.
pub fn parse_catalog(input: &str) -> anyhow::Result<Vec<Label>> {
    let labels: Vec<Label> = match serde_json::from_str(input) {
        Ok(labels) => labels,
        Err(_) => json5::from_str(input).context("catalog is not valid JSON or JSON5")?,
    };
    validate_catalog(&labels)?;
    Ok(labels)
}

/// Load a catalog from a file path, or from stdin when the path is '-'.
pub fn load_catalog(path: &Path) -> anyhow::Result<Vec<Label>> {
    let input = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read catalog from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog {}", path.display()))?
    };
    parse_catalog(&input)
}
