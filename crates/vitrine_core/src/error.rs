//! Error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by Vitrine controllers and configuration
#[derive(Error, Debug)]
pub enum VitrineError {
    /// Failed to read a configuration file
    #[error("Failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for `SiteConfig`
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// An explicit index selection fell outside the item range
    #[error("Index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    /// A page or fragment fetch did not produce a body
    #[error("Fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },
}

impl VitrineError {
    /// Build a fetch failure for `url`
    pub fn fetch(url: impl Into<String>, reason: impl Into<String>) -> Self {
        VitrineError::Fetch {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for Vitrine operations
pub type Result<T> = std::result::Result<T, VitrineError>;
