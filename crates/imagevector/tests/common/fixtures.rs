//! Test fixture helpers
//!
//! Fixtures are YAML image vectors under tests/fixtures/.

use std::path::PathBuf;

/// Get the path to the fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Path of a fixture file
pub fn fixture_path(filename: &str) -> PathBuf {
    fixtures_dir().join(filename)
}

/// Base image vector with constrained kube-proxy and pause entries
pub fn base_vector_path() -> PathBuf {
    fixture_path("images.yaml")
}

/// Override vector replacing the webhook repository, re-tagging pause and adding etcd
pub fn override_vector_path() -> PathBuf {
    fixture_path("override.yaml")
}

/// Vector failing validation
pub fn invalid_vector_path() -> PathBuf {
    fixture_path("invalid.yaml")
}
