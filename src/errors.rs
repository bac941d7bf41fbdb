use crate::species::Species;
use std::path::PathBuf;

/// Errors related to species data operations
#[derive(Debug, thiserror::Error)]
pub enum SpeciesDataError {
    /// The specified species was not found in the table
    #[error("species not found: {0}")]
    SpeciesNotFound(Species),
    /// Two table entries share one species id
    #[error("duplicate species entry: {0}")]
    DuplicateSpecies(Species),
    /// Species data file could not be read
    #[error("failed to read species data from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Species data is malformed or incomplete
    #[error("malformed species data: {0}")]
    MalformedData(#[from] ron::error::SpannedError),
}

/// Errors raised while loading an event configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Malformed(#[from] ron::error::SpannedError),
    /// A value parsed fine but cannot be used
    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// Type alias for Results using SpeciesDataError
pub type SpeciesDataResult<T> = Result<T, SpeciesDataError>;

/// Type alias for Results using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
