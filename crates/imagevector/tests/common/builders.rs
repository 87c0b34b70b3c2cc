//! Builder patterns for test data construction

use imagevector::{ImageSource, ImageVector};

/// Builder for constructing image vectors entry by entry
#[derive(Debug, Clone, Default)]
pub struct VectorBuilder {
    sources: Vec<ImageSource>,
}

impl VectorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fully specified source
    pub fn source(mut self, source: ImageSource) -> Self {
        self.sources.push(source);
        self
    }

    /// Add an unconstrained, untagged source
    pub fn image(self, name: &str, repository: &str) -> Self {
        self.source(ImageSource::new(name, repository))
    }

    /// Add an unconstrained source with a tag
    pub fn tagged(self, name: &str, repository: &str, tag: &str) -> Self {
        self.source(ImageSource::new(name, repository).with_tag(tag))
    }

    pub fn build(self) -> ImageVector {
        ImageVector::new(self.sources)
    }
}
