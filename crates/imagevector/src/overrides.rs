//! Operator-supplied image vector overrides
//!
//! An override vector is located through the `IMAGEVECTOR_OVERWRITE` environment
//! variable and merged on top of the base vector. Reading the file is delegated to a
//! [`CatalogReader`], so this crate never deals with the file format itself.

use crate::error::{Error, Result};
use crate::merge::merge;
use crate::types::ImageVector;
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable holding the path of the override image vector
pub const OVERRIDE_ENV: &str = "IMAGEVECTOR_OVERWRITE";

/// Reads an image vector from a path.
///
/// This abstracts the catalog file format so that the engine only consumes
/// already-parsed vectors. Implementors live with the caller (or tests can
/// provide a mock).
pub trait CatalogReader: Send + Sync {
    /// Read the image vector stored at `path`
    fn read(&self, path: &Path) -> anyhow::Result<ImageVector>;
}

impl<F> CatalogReader for F
where
    F: Fn(&Path) -> anyhow::Result<ImageVector> + Send + Sync,
{
    fn read(&self, path: &Path) -> anyhow::Result<ImageVector> {
        self(path)
    }
}

/// Path of the override image vector, if one is configured
pub fn override_path_from_env() -> Option<PathBuf> {
    env::var_os(OVERRIDE_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Read and validate an image vector through `reader`
pub fn read_image_vector(path: &Path, reader: &dyn CatalogReader) -> Result<ImageVector> {
    let vector = reader
        .read(path)
        .map_err(|e| Error::catalog_load(path.display().to_string(), e))?;
    vector.validated()
}

/// Merge the vector at `path` on top of `vector`
///
/// Without a path the vector is returned unchanged.
pub fn with_override(
    vector: ImageVector,
    path: Option<&Path>,
    reader: &dyn CatalogReader,
) -> Result<ImageVector> {
    let Some(path) = path else {
        return Ok(vector);
    };

    let overlay = read_image_vector(path, reader)?;
    info!(
        "Applying image vector override from {} ({} entries)",
        path.display(),
        overlay.len()
    );

    Ok(merge([&vector, &overlay]))
}

/// Apply the override configured in `IMAGEVECTOR_OVERWRITE`, if any
pub fn with_env_override(vector: ImageVector, reader: &dyn CatalogReader) -> Result<ImageVector> {
    let path = override_path_from_env();
    if path.is_none() {
        debug!("{} is not set, using image vector as is", OVERRIDE_ENV);
    }
    with_override(vector, path.as_deref(), reader)
}

/// Read the base vector at `path` and apply the environment override
pub fn read_with_env_override(path: &Path, reader: &dyn CatalogReader) -> Result<ImageVector> {
    let vector = read_image_vector(path, reader)?;
    with_env_override(vector, reader)
}
