//! Error types for imagevector

use crate::types::FindOptions;
use thiserror::Error;

/// Result type alias using imagevector's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error returned by an external catalog reader
pub type SourceError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error types for image vector operations
#[derive(Error, Debug)]
pub enum Error {
    /// The external reader failed to produce a catalog
    #[error("Failed to load image vector from {path}: {source}")]
    CatalogLoad {
        path: String,
        #[source]
        source: SourceError,
    },

    /// Malformed version constraint expression
    #[error("Invalid version constraint {constraint:?}: {reason}")]
    InvalidConstraint { constraint: String, reason: String },

    /// Malformed version
    #[error("Invalid version {version:?}: {reason}")]
    InvalidVersion { version: String, reason: String },

    /// No eligible image source for the query
    #[error("Could not find image {name:?} opts {options}")]
    ImageNotFound { name: String, options: FindOptions },

    /// A single name failed while resolving a batch
    #[error("Failed to resolve image {name:?}: {source}")]
    BatchResolution {
        name: String,
        #[source]
        source: Box<Error>,
    },

    /// Catalog validation failed
    #[error("Image vector validation failed:\n{errors}")]
    Validation { errors: String },
}

impl Error {
    /// Create a catalog load error wrapping the reader's failure
    pub fn catalog_load(path: impl Into<String>, source: impl Into<SourceError>) -> Self {
        Self::CatalogLoad {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Create an invalid constraint error
    pub fn invalid_constraint(constraint: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConstraint {
            constraint: constraint.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid version error
    pub fn invalid_version(version: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidVersion {
            version: version.into(),
            reason: reason.into(),
        }
    }

    /// Create an image not found error
    pub fn image_not_found(name: impl Into<String>, options: &FindOptions) -> Self {
        Self::ImageNotFound {
            name: name.into(),
            options: options.clone(),
        }
    }

    /// Wrap the first failure of a batch resolution
    pub fn batch_resolution(name: impl Into<String>, source: Error) -> Self {
        Self::BatchResolution {
            name: name.into(),
            source: Box::new(source),
        }
    }

    /// Create a validation error from a list of field errors
    pub fn validation(errors: Vec<String>) -> Self {
        Self::Validation {
            errors: errors.join("\n"),
        }
    }

    /// Whether this error (or the batch failure it wraps) is a missing image
    pub fn is_not_found(&self) -> bool {
        self.not_found_name().is_some()
    }

    /// Name of the image that could not be found, looking through batch wrapping
    pub fn not_found_name(&self) -> Option<&str> {
        match self {
            Self::ImageNotFound { name, .. } => Some(name),
            Self::BatchResolution { source, .. } => source.not_found_name(),
            _ => None,
        }
    }

    /// Whether this error comes from evaluating a version or a constraint
    pub fn is_constraint_error(&self) -> bool {
        match self {
            Self::InvalidConstraint { .. } | Self::InvalidVersion { .. } => true,
            Self::BatchResolution { source, .. } => source.is_constraint_error(),
            _ => false,
        }
    }
}
