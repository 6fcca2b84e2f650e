/// Startup configuration
///
/// The only knob is the database location. It comes from `DIGIT_LABELER_DB`
/// when set, otherwise a fixed filename in the user's data directory:
/// - Linux: ~/.local/share/digit-labeler/labels.db
/// - macOS: ~/Library/Application Support/digit-labeler/labels.db
/// - Windows: %APPDATA%\digit-labeler\labels.db

use std::path::PathBuf;

/// Environment variable overriding the database path
pub const DB_PATH_VAR: &str = "DIGIT_LABELER_DB";

/// Default database filename
pub const DEFAULT_DB_FILE: &str = "labels.db";

const APP_DIR: &str = "digit-labeler";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the SQLite file backing the label store
    pub db_path: PathBuf,
}

impl Config {
    /// Resolve configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok(), dirs::data_dir())
    }

    /// Resolve configuration from an arbitrary variable lookup and data dir
    pub fn from_lookup<F>(lookup: F, data_dir: Option<PathBuf>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path = match lookup(DB_PATH_VAR) {
            Some(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => Self::default_db_path(data_dir),
        };

        Config { db_path }
    }

    fn default_db_path(data_dir: Option<PathBuf>) -> PathBuf {
        match data_dir {
            Some(mut path) => {
                path.push(APP_DIR);
                path.push(DEFAULT_DB_FILE);
                path
            }
            // No data dir (e.g. minimal containers): use the working directory
            None => PathBuf::from(DEFAULT_DB_FILE),
        }
    }
}
