use serde::{Deserialize, Serialize};
use std::fmt;

/// Architecture tag for x86-64 machines
pub const ARCHITECTURE_AMD64: &str = "amd64";

/// Architecture tag for 64-bit ARM machines
pub const ARCHITECTURE_ARM64: &str = "arm64";

/// Architectures an image source may declare
pub const VALID_ARCHITECTURES: &[&str] = &[ARCHITECTURE_AMD64, ARCHITECTURE_ARM64];

/// Prefix of a tag that is really a content digest
pub const SHA256_TAG_PREFIX: &str = "sha256:";

/// One entry of an image vector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSource {
    /// Component name; several entries may share it
    pub name: String,

    /// Constraint on the runtime version the image runs on (e.g. ">= 1.20")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_version: Option<String>,

    /// Constraint on the version the image targets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_version: Option<String>,

    /// Supported architectures; absent means multi-arch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architectures: Option<Vec<String>>,

    /// Image repository (e.g. "registry.k8s.io/etcd")
    pub repository: String,

    /// Tag or digest; absent means derived from the target version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl ImageSource {
    /// Create an unconstrained, untagged source
    pub fn new(name: impl Into<String>, repository: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            runtime_version: None,
            target_version: None,
            architectures: None,
            repository: repository.into(),
            tag: None,
        }
    }

    /// Set the runtime version constraint
    pub fn with_runtime_version(mut self, constraint: impl Into<String>) -> Self {
        self.runtime_version = Some(constraint.into());
        self
    }

    /// Set the target version constraint
    pub fn with_target_version(mut self, constraint: impl Into<String>) -> Self {
        self.target_version = Some(constraint.into());
        self
    }

    /// Set the supported architectures
    pub fn with_architectures<I, S>(mut self, architectures: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.architectures = Some(architectures.into_iter().map(Into::into).collect());
        self
    }

    /// Set the tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

/// Ordered catalog of image sources
///
/// Order is significant: it decides positions when merging and breaks ties when
/// resolving. The vector is not mutated once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageVector(Vec<ImageSource>);

impl ImageVector {
    /// Create an image vector from sources in catalog order
    pub fn new(sources: Vec<ImageSource>) -> Self {
        Self(sources)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImageSource> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[ImageSource] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<ImageSource> {
        self.0
    }
}

impl From<Vec<ImageSource>> for ImageVector {
    fn from(sources: Vec<ImageSource>) -> Self {
        Self(sources)
    }
}

impl FromIterator<ImageSource> for ImageVector {
    fn from_iter<I: IntoIterator<Item = ImageSource>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ImageVector {
    type Item = &'a ImageSource;
    type IntoIter = std::slice::Iter<'a, ImageSource>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for ImageVector {
    type Item = ImageSource;
    type IntoIter = std::vec::IntoIter<ImageSource>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Constraints of a resolution query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindOptions {
    /// Version of the runtime the image will run on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_version: Option<String>,

    /// Version the image shall target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_version: Option<String>,

    /// Architecture of the machine; amd64 when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architecture: Option<String>,
}

impl FindOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the runtime version
    pub fn runtime_version(mut self, version: impl Into<String>) -> Self {
        self.runtime_version = Some(version.into());
        self
    }

    /// Set the target version
    pub fn target_version(mut self, version: impl Into<String>) -> Self {
        self.target_version = Some(version.into());
        self
    }

    /// Set the architecture
    pub fn architecture(mut self, architecture: impl Into<String>) -> Self {
        self.architecture = Some(architecture.into());
        self
    }
}

impl fmt::Display for FindOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(version) = &self.runtime_version {
            parts.push(format!("runtime version {}", version));
        }
        if let Some(version) = &self.target_version {
            parts.push(format!("target version {}", version));
        }
        if let Some(architecture) = &self.architecture {
            parts.push(format!("architecture {}", architecture));
        }
        write!(f, "{}", parts.join(" "))
    }
}

/// Image resolved from an image vector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub name: String,
    pub repository: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl fmt::Display for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            None => write!(f, "{}", self.repository),
            Some(tag) if tag.starts_with(SHA256_TAG_PREFIX) => {
                write!(f, "{}@{}", self.repository, tag)
            }
            Some(tag) => write!(f, "{}:{}", self.repository, tag),
        }
    }
}
