/// State management module
///
/// This module handles all application state, including:
/// - The SQLite label store (store.rs)
/// - Shared data structures (data.rs)
/// - The self-agreement metric over stored labels (agreement.rs)

pub mod store;
pub mod data;
pub mod agreement;
