//! Scoring of image sources against a query
//!
//! Each axis (runtime version, target version, architecture) contributes
//! independently; more specific constraints score higher. A source is eligible only
//! if every axis passes.

use crate::error::Result;
use crate::types::{FindOptions, ImageSource, ARCHITECTURE_AMD64, ARCHITECTURE_ARM64};
use crate::version::{parse_version, VersionConstraint};

/// Score of a satisfied range constraint
const RANGE_SCORE: u8 = 1;

/// Score of a satisfied equality constraint or single-architecture match
const EXACT_SCORE: u8 = 2;

/// Score `source` against a query for `name`
///
/// Returns `None` when the source is not eligible, otherwise the summed score of all
/// three axes (0 to 6).
pub fn score(source: &ImageSource, name: &str, options: &FindOptions) -> Result<Option<u8>> {
    if source.name != name {
        return Ok(None);
    }

    let Some(runtime_score) = check_version_constraint(
        source.runtime_version.as_deref(),
        options.runtime_version.as_deref(),
    )?
    else {
        return Ok(None);
    };

    let Some(target_score) = check_version_constraint(
        source.target_version.as_deref(),
        options.target_version.as_deref(),
    )?
    else {
        return Ok(None);
    };

    let Some(architecture_score) = check_architecture_constraint(
        source.architectures.as_deref(),
        options.architecture.as_deref(),
    ) else {
        return Ok(None);
    };

    Ok(Some(runtime_score + target_score + architecture_score))
}

/// Score one version axis
///
/// A missing constraint or a missing version skips the check with score 0.
pub fn check_version_constraint(
    constraint: Option<&str>,
    version: Option<&str>,
) -> Result<Option<u8>> {
    let (Some(constraint), Some(version)) = (constraint, version) else {
        return Ok(Some(0));
    };

    let constraint = VersionConstraint::parse(constraint)?;
    if !constraint.matches(&parse_version(version)?) {
        return Ok(None);
    }

    if constraint.is_exact() {
        Ok(Some(EXACT_SCORE))
    } else {
        Ok(Some(RANGE_SCORE))
    }
}

/// Score the architecture axis
///
/// Sources without architectures are multi-arch (amd64 and arm64); queries without
/// an architecture ask for amd64.
pub fn check_architecture_constraint(
    source: Option<&[String]>,
    desired: Option<&str>,
) -> Option<u8> {
    const MULTI_ARCH: &[&str] = &[ARCHITECTURE_AMD64, ARCHITECTURE_ARM64];

    let desired = desired.unwrap_or(ARCHITECTURE_AMD64);
    let (count, supported) = match source {
        Some(architectures) => (
            architectures.len(),
            architectures.iter().any(|arch| arch == desired),
        ),
        None => (MULTI_ARCH.len(), MULTI_ARCH.contains(&desired)),
    };

    match (count, supported) {
        (1, true) => Some(EXACT_SCORE),
        (n, true) if n > 1 => Some(RANGE_SCORE),
        _ => None,
    }
}
