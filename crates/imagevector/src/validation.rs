//! Structural validation of image vectors

use crate::error::{Error, Result};
use crate::types::{ImageVector, VALID_ARCHITECTURES};
use crate::version::VersionConstraint;

/// Root of the field paths in validation messages
const ROOT_PATH: &str = "images";

/// Validate every source of `vector`, reporting all problems at once
pub fn validate(vector: &ImageVector) -> Result<()> {
    let mut errors = Vec::new();

    for (i, source) in vector.iter().enumerate() {
        let path = format!("{}[{}]", ROOT_PATH, i);

        if source.name.is_empty() {
            errors.push(format!("{}.name: Required value: image name is required", path));
        }

        if source.repository.is_empty() {
            errors.push(format!(
                "{}.repository: Required value: image repository is required",
                path
            ));
        }

        let constraints = [
            ("runtimeVersion", &source.runtime_version),
            ("targetVersion", &source.target_version),
        ];
        for (field, constraint) in constraints {
            if let Some(constraint) = constraint {
                if let Err(e) = VersionConstraint::parse(constraint) {
                    errors.push(format!(
                        "{}.{}: Invalid value: {:?}: {}",
                        path, field, constraint, e
                    ));
                }
            }
        }

        for (j, arch) in source.architectures.iter().flatten().enumerate() {
            if !VALID_ARCHITECTURES.contains(&arch.as_str()) {
                errors.push(format!(
                    "{}.architectures[{}]: Unsupported value: {:?}: supported values: {}",
                    path,
                    j,
                    arch,
                    VALID_ARCHITECTURES.join(", ")
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(Error::validation(errors))
    }
}

impl ImageVector {
    /// Validate and return the vector
    pub fn validated(self) -> Result<Self> {
        validate(&self)?;
        Ok(self)
    }
}
