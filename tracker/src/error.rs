//! Error types for tracker configuration.
//!
//! Tracker operations themselves are total; only building a section list
//! from configuration can fail.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Error reading a config file from disk
    #[error("Error reading config {path:?}: {message}")]
    Read { path: PathBuf, message: String },

    /// Error parsing TOML
    #[error("Error parsing config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A section was declared with an empty id
    #[error("Section at position {position} has an empty id")]
    EmptySectionId { position: usize },

    /// The same id was declared twice
    #[error("Section id {id:?} is declared more than once")]
    DuplicateSection { id: String },

    /// Bias must be a finite number
    #[error("Scroll bias must be finite, got {0}")]
    InvalidBias(f64),
}
