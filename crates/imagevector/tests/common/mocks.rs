//! Catalog readers used in place of the external file parser

use anyhow::Context;
use imagevector::{CatalogReader, ImageVector};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

#[derive(Deserialize)]
struct ImageVectorFile {
    images: ImageVector,
}

/// Reads `images:` YAML documents from disk and records every path it read
#[derive(Debug, Default)]
pub struct YamlReader {
    reads: Mutex<Vec<PathBuf>>,
}

impl YamlReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths read so far, in order
    pub fn reads(&self) -> Vec<PathBuf> {
        self.reads.lock().unwrap().clone()
    }
}

impl CatalogReader for YamlReader {
    fn read(&self, path: &Path) -> anyhow::Result<ImageVector> {
        self.reads.lock().unwrap().push(path.to_path_buf());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let file: ImageVectorFile = serde_yaml_ng::from_str(&content)?;
        Ok(file.images)
    }
}

/// Write a YAML image vector into `dir` and return its path
pub fn write_vector_file(dir: &TempDir, file_name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(file_name);
    std::fs::write(&path, content).unwrap();
    path
}
