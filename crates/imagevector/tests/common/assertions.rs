//! Assertion helpers for resolution and merge tests

use imagevector::{Error, IdentityKey, Image, ImageVector};
use std::collections::HashSet;

/// Assert that an image renders to the expected reference
pub fn assert_image_ref(image: &Image, expected: &str) {
    assert_eq!(
        image.to_string(),
        expected,
        "Unexpected image reference for '{}': {:?}",
        image.name,
        image
    );
}

/// Assert that an error is a not-found error for `name`
pub fn assert_not_found(err: &Error, name: &str) {
    assert_eq!(
        err.not_found_name(),
        Some(name),
        "Expected not found error for '{}', got: {:?}",
        name,
        err
    );
}

/// Identity keys of a vector, in order
pub fn identity_keys(vector: &ImageVector) -> Vec<IdentityKey> {
    vector.iter().map(IdentityKey::of).collect()
}

/// Assert that no identity key occurs twice in a vector
pub fn assert_unique_keys(vector: &ImageVector) {
    let keys = identity_keys(vector);
    let unique: HashSet<_> = keys.iter().collect();
    assert_eq!(
        unique.len(),
        keys.len(),
        "Duplicate identity keys in merged vector: {:?}",
        vector
    );
}
