//! Error types for folio

use thiserror::Error;

/// Result type alias for folio operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the page state and its configuration.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The site document is not valid TOML or does not match the schema.
    #[error("Failed to parse site config: {0}")]
    Config(#[from] toml::de::Error),

    /// The site document parsed but breaks a content rule.
    #[error("Invalid site config: {0}")]
    InvalidConfig(String),

    /// The browser rejected a clipboard write. Displays as the activity line.
    #[error("Failed to copy: {0}")]
    Clipboard(String),

    /// A contact submission could not be encoded for the console.
    #[error("Failed to encode submission: {0}")]
    Encode(#[from] serde_json::Error),
}
