//! Error types for footprint calculations.
//!
//! The scope calculator itself has no failure modes: unrecognized
//! categorical selectors fall back to default factors rather than raising.
//! Errors only arise at the configuration boundary, when loading emission
//! factor overrides from a TOML file.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for invalid operations.
#[derive(Error, Debug)]
pub enum FootprintError {
    #[error("failed to read factor file {}", path.display())]
    FactorFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse factor overrides: {0}")]
    FactorParse(#[from] toml::de::Error),
}

/// Convenience type for `Result<T, FootprintError>`.
pub type FootprintResult<T> = Result<T, FootprintError>;
