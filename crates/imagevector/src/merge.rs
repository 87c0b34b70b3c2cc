//! Merging of image vectors
//!
//! Later vectors override earlier ones for entries with the same identity key. The
//! position of an entry is fixed by the first vector that contains its key.

use crate::types::{ImageSource, ImageVector};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Key under which two entries count as the same logical image
///
/// Absent and empty version constraints share a key component.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityKey {
    name: String,
    runtime_version: String,
    target_version: String,
    architectures: Option<String>,
}

impl IdentityKey {
    pub fn of(source: &ImageSource) -> Self {
        let architectures = source.architectures.as_ref().map(|architectures| {
            let mut hasher = Sha256::new();
            for arch in architectures {
                hasher.update(arch.as_bytes());
                hasher.update([0u8]);
            }
            hex::encode(hasher.finalize())
        });

        Self {
            name: source.name.clone(),
            runtime_version: source.runtime_version.clone().unwrap_or_default(),
            target_version: source.target_version.clone().unwrap_or_default(),
            architectures,
        }
    }
}

/// Merge `old` and its `override_source` into a new entry
///
/// Name and repository come from the override. Tag, version constraints and
/// architectures come from the override when present and are inherited otherwise.
pub fn merge_image_sources(old: &ImageSource, override_source: &ImageSource) -> ImageSource {
    ImageSource {
        name: override_source.name.clone(),
        runtime_version: override_source
            .runtime_version
            .clone()
            .or_else(|| old.runtime_version.clone()),
        target_version: override_source
            .target_version
            .clone()
            .or_else(|| old.target_version.clone()),
        architectures: override_source
            .architectures
            .clone()
            .or_else(|| old.architectures.clone()),
        repository: override_source.repository.clone(),
        tag: override_source.tag.clone().or_else(|| old.tag.clone()),
    }
}

/// Merge image vectors in order into one
pub fn merge<'a, I>(vectors: I) -> ImageVector
where
    I: IntoIterator<Item = &'a ImageVector>,
{
    let mut out: Vec<ImageSource> = Vec::new();
    let mut key_to_index: HashMap<IdentityKey, usize> = HashMap::new();

    for vector in vectors {
        for source in vector {
            let key = IdentityKey::of(source);

            if let Some(&idx) = key_to_index.get(&key) {
                debug!(
                    "Overriding image source {} ({}) at position {}",
                    source.name, source.repository, idx
                );
                out[idx] = merge_image_sources(&out[idx], source);
                continue;
            }

            trace!("Adding image source {} at position {}", source.name, out.len());
            key_to_index.insert(key, out.len());
            out.push(source.clone());
        }
    }

    ImageVector::new(out)
}
