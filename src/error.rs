//! Error types for fieldmap
//!
//! Uses `thiserror` for library errors. Field name or type mismatches are
//! never errors; they only show up as skipped fields on the compiled plan.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::TypePair;

/// Result type alias for mapping operations
pub type MapResult<T> = Result<T, MapError>;

/// Main error type for mapping operations
#[derive(Error, Debug)]
pub enum MapError {
    /// Destination type cannot be created without arguments
    #[error("cannot map {pair}: destination type has no parameterless constructor")]
    UnconstructibleTarget { pair: TypePair },

    /// No usable conversion plan could be produced or found
    #[error("no conversion plan available for {pair}")]
    MissingPlan { pair: TypePair },

    /// A bound field could not be read from the source or written to the destination
    #[error("failed to transfer field '{field}' while mapping {pair}")]
    FieldTransfer { pair: TypePair, field: String },

    /// Plan matched no fields and the empty-plan policy rejects that
    #[error("no fields in common for {pair}")]
    EmptyPlan { pair: TypePair },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration file
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },
}

impl MapError {
    /// The type pair the failing mapping request was for, if any
    pub fn pair(&self) -> Option<&TypePair> {
        match self {
            MapError::UnconstructibleTarget { pair }
            | MapError::MissingPlan { pair }
            | MapError::FieldTransfer { pair, .. }
            | MapError::EmptyPlan { pair } => Some(pair),
            MapError::Io(_) | MapError::InvalidConfig { .. } => None,
        }
    }
}
