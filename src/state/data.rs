/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the database layer and the UI layer.

/// One persisted submission from the labeling form
///
/// `image` holds the ground-truth digit of the image that was on screen, not
/// an image identifier or filename, even though the form's help text says
/// "Filename". Stored rows keep that meaning so existing databases stay valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelEntry {
    /// Ground-truth value shown in the disabled "Image" field
    pub image: String,
    /// Free text typed by the user
    pub label: String,
}

impl LabelEntry {
    pub fn new(image: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            label: label.into(),
        }
    }

    /// Whether the typed label textually equals the shown value
    pub fn agrees(&self) -> bool {
        self.image == self.label
    }
}

/// One fixed sample of the digit dataset
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRecord {
    /// Index into the dataset, stable for the process lifetime
    pub id: usize,
    pub width: usize,
    pub height: usize,
    /// Row-major intensities, 0 (blank) to 16 (full ink)
    pub pixels: Vec<u8>,
    /// The true digit
    pub target: u8,
}

impl ImageRecord {
    /// Ground-truth value as written into the "Image" field
    pub fn ground_truth_value(&self) -> String {
        self.target.to_string()
    }

    /// Intensity at (row, col)
    pub fn intensity(&self, row: usize, col: usize) -> u8 {
        self.pixels[row * self.width + col]
    }
}
