/// UI building blocks
///
/// - `digit.rs` - canvas that draws the image being labeled
/// - `table.rs` - stored entries and the agreement metric

pub mod digit;
pub mod table;

pub use digit::DigitRaster;
