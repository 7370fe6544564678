//! Error types for moonshot.
//!
//! Every failure mode of the catalog is a variant of [`Error`]. Bundle, schema
//! and join-integrity errors mean the shipped data is corrupt; callers are
//! expected to stop rather than render partial results.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for moonshot operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Bundle Errors ===
    /// A named resource does not exist in the bundle.
    #[error("resource '{resource}' not found in {bundle}")]
    ResourceNotFound {
        /// Name of the requested resource.
        resource: String,
        /// Description of the bundle that was searched.
        bundle: String,
    },

    /// A resource exists but could not be read.
    #[error("failed to read resource '{resource}' at {path}: {source}")]
    ResourceRead {
        /// Name of the requested resource.
        resource: String,
        /// Path the resource was read from.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Schema Errors ===
    /// A resource is not well-formed JSON of the expected shape.
    #[error("resource '{resource}' does not match the expected schema: {source}")]
    Schema {
        /// Name of the offending resource.
        resource: String,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// Two astronaut records share the same id.
    #[error("resource '{resource}' contains duplicate astronaut id '{id}'")]
    DuplicateAstronaut {
        /// Name of the offending resource.
        resource: String,
        /// The repeated id.
        id: String,
    },

    /// Two missions share the same id.
    #[error("resource '{resource}' contains duplicate mission id '{id}'")]
    DuplicateMission {
        /// Name of the offending resource.
        resource: String,
        /// The repeated id.
        id: String,
    },

    // === Join Errors ===
    /// A mission's crew references an astronaut that is not in the table.
    #[error("mission {mission} references missing astronaut '{name}'")]
    MissingAstronaut {
        /// Display name of the mission being resolved.
        mission: String,
        /// The unresolved join key.
        name: String,
    },

    // === Lookup Errors ===
    /// No mission with the requested id.
    #[error("no mission with id '{id}'")]
    UnknownMission {
        /// The requested id.
        id: String,
    },

    /// No astronaut with the requested id.
    #[error("no astronaut with id '{id}'")]
    UnknownAstronaut {
        /// The requested id.
        id: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// Terminal or file system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for moonshot operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a schema error for the named resource.
    #[must_use]
    pub fn schema(resource: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Schema {
            resource: resource.into(),
            source,
        }
    }

    /// Create a missing-astronaut join error.
    #[must_use]
    pub fn missing_astronaut(mission: impl Into<String>, name: impl Into<String>) -> Self {
        Self::MissingAstronaut {
            mission: mission.into(),
            name: name.into(),
        }
    }

    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Check if this error means the bundled data is corrupt.
    ///
    /// Covers bundle load, schema mismatch and join-integrity failures.
    #[must_use]
    pub fn is_data_corruption(&self) -> bool {
        matches!(
            self,
            Self::ResourceNotFound { .. }
                | Self::ResourceRead { .. }
                | Self::Schema { .. }
                | Self::DuplicateAstronaut { .. }
                | Self::DuplicateMission { .. }
                | Self::MissingAstronaut { .. }
        )
    }

    /// Check if this error is a failed lookup of user-supplied input.
    #[must_use]
    pub fn is_lookup_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownMission { .. } | Self::UnknownAstronaut { .. }
        )
    }
}
