/// Digit dataset module
///
/// Provides the fixed set of labeled 8x8 digit images that the form
/// draws from. Loaded once per process.

pub mod loader;

pub use loader::DigitDataset;
