/// Labeling session
///
/// Holds the dataset and the image currently on screen. Each render cycle
/// picks a fresh image; each submission appends one row to the label store.
/// Nothing remembers which images were already labeled, so the same image
/// can come up (and be labeled) again.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::dataset::DigitDataset;
use crate::error::Result;
use crate::state::data::{ImageRecord, LabelEntry};
use crate::state::store::LabelStore;

pub struct LabelingSession<R: Rng = StdRng> {
    dataset: DigitDataset,
    rng: R,
    /// Index of the image currently displayed
    current: usize,
}

impl LabelingSession<StdRng> {
    /// Session with an OS-seeded generator
    pub fn new(dataset: DigitDataset) -> Self {
        Self::with_rng(dataset, StdRng::from_os_rng())
    }
}

impl<R: Rng> LabelingSession<R> {
    /// Session with a caller-provided generator, picking the first image.
    /// `dataset` must not be empty (the loader guarantees this).
    pub fn with_rng(dataset: DigitDataset, rng: R) -> Self {
        let mut session = Self {
            dataset,
            rng,
            current: 0,
        };
        session.pick_image();
        session
    }

    /// Choose a new image uniformly from the whole dataset
    pub fn pick_image(&mut self) -> &ImageRecord {
        self.current = self.rng.random_range(0..self.dataset.size());
        &self.dataset.records()[self.current]
    }

    /// The image currently on screen
    pub fn current(&self) -> &ImageRecord {
        &self.dataset.records()[self.current]
    }

    pub fn dataset(&self) -> &DigitDataset {
        &self.dataset
    }

    /// Record `label` against the ground truth of the displayed image.
    ///
    /// The table is checked (and created if needed) before the insert.
    /// The label is stored verbatim, empty strings included.
    pub fn on_submit(&self, store: &LabelStore, label: &str) -> Result<LabelEntry> {
        let entry = LabelEntry::new(self.current().ground_truth_value(), label);

        store.ensure_schema()?;
        store.append(&entry.image, &entry.label)?;

        Ok(entry)
    }
}
