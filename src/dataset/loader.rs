/// Digit dataset loader
///
/// The dataset ships inside the binary as JSON: `images` is a list of 8x8
/// rasters flattened row-major (intensity 0..=16), `target` the matching digits.
/// It is parsed once at startup and never changes afterwards.

use serde::Deserialize;

use crate::error::{LabelerError, Result};
use crate::state::data::ImageRecord;

/// Raster side length
pub const DIGIT_SIDE: usize = 8;

/// Highest intensity a pixel may carry
pub const MAX_INTENSITY: u8 = 16;

const EMBEDDED_DIGITS: &str = include_str!("../../data/digits.json");

/// On-disk layout of the dataset file
#[derive(Debug, Deserialize)]
struct RawDigits {
    images: Vec<Vec<u8>>,
    target: Vec<u8>,
}

/// The fixed, read-only collection of digit images
#[derive(Debug, Clone)]
pub struct DigitDataset {
    records: Vec<ImageRecord>,
}

impl DigitDataset {
    /// Load the dataset compiled into the binary
    pub fn load() -> Result<Self> {
        let dataset = Self::from_json(EMBEDDED_DIGITS)?;
        log::info!("🔢 Loaded {} digit images", dataset.size());
        Ok(dataset)
    }

    /// Parse and validate a dataset from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawDigits = serde_json::from_str(json)?;

        if raw.images.len() != raw.target.len() {
            return Err(LabelerError::Dataset(format!(
                "{} images but {} targets",
                raw.images.len(),
                raw.target.len()
            )));
        }
        if raw.images.is_empty() {
            return Err(LabelerError::Dataset("dataset is empty".to_string()));
        }

        let mut records = Vec::with_capacity(raw.images.len());
        for (id, (pixels, target)) in raw.images.into_iter().zip(raw.target).enumerate() {
            if pixels.len() != DIGIT_SIDE * DIGIT_SIDE {
                return Err(LabelerError::Dataset(format!(
                    "image {} has {} pixels, expected {}",
                    id,
                    pixels.len(),
                    DIGIT_SIDE * DIGIT_SIDE
                )));
            }
            if let Some(&bad) = pixels.iter().find(|&&v| v > MAX_INTENSITY) {
                return Err(LabelerError::Dataset(format!(
                    "image {} has intensity {} above {}",
                    id, bad, MAX_INTENSITY
                )));
            }
            if target > 9 {
                return Err(LabelerError::Dataset(format!(
                    "image {} has target {}, not a digit",
                    id, target
                )));
            }

            records.push(ImageRecord {
                id,
                width: DIGIT_SIDE,
                height: DIGIT_SIDE,
                pixels,
                target,
            });
        }

        Ok(Self { records })
    }

    /// Number of images
    pub fn size(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }
}
