//! Image vector engine
//!
//! This crate provides functionality for:
//! - Scoring image sources against runtime/target version and architecture constraints
//! - Merging a base image vector with operator-supplied overrides
//! - Resolving component names to concrete image references
//! - Validating image vectors
//!
//! # Example
//!
//! ```no_run
//! use imagevector::{FindOptions, ImageSource, ImageVector};
//!
//! fn main() -> imagevector::Result<()> {
//!     let vector = ImageVector::new(vec![
//!         ImageSource::new("etcd", "registry.k8s.io/etcd"),
//!         ImageSource::new("etcd", "registry.k8s.io/etcd")
//!             .with_target_version(">= 1.28")
//!             .with_tag("3.5.9-0"),
//!     ]);
//!
//!     let image = vector.find_image("etcd", &FindOptions::new().target_version("1.28.2"))?;
//!     println!("Resolved to: {}", image);
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod matcher;
pub mod merge;
pub mod overrides;
pub mod resolver;
pub mod types;
pub mod validation;
pub mod version;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use merge::{merge, IdentityKey};
pub use overrides::{
    read_with_env_override, with_env_override, with_override, CatalogReader, OVERRIDE_ENV,
};
pub use resolver::image_map_to_values;
pub use types::{
    FindOptions, Image, ImageSource, ImageVector, ARCHITECTURE_AMD64, ARCHITECTURE_ARM64,
};
pub use validation::validate;
pub use version::{check_version_meets_constraint, VersionConstraint};

/// Version of the imagevector crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
