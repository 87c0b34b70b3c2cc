//! Version parsing and constraint evaluation
//!
//! Constraints follow the range grammar used in image vectors:
//! - `||` separates alternatives, any one of them may hold
//! - `,` or whitespace separates comparators that must all hold
//! - operators `=`, `!=`, `>`, `>=`, `<`, `<=`, `~`, `~>`, `^` (plus `==`, `=>`, `=<`)
//! - a bare version means equality, wildcards `x`/`X`/`*` are allowed
//! - `A - B` is an inclusive range

use crate::error::{Error, Result};
use regex::Regex;
use semver::{Comparator, Version};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Constraints that pin a full version or use explicit equality
static EQUALITY_CONSTRAINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(v?[0-9]+\.[0-9]+\.[0-9]+|=)").expect("equality constraint pattern is valid")
});

static HYPHEN_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\S+)\s+-\s+(\S+)\s*$").expect("hyphen range pattern is valid")
});

const OPERATOR_CHARS: &[char] = &['<', '>', '=', '!', '~', '^'];

/// Parse a version leniently
///
/// A leading `v` is accepted, pre-release and build suffixes are dropped, and missing
/// minor/patch components default to zero (`v1.27-rc.1` parses as `1.27.0`).
pub fn parse_version(input: &str) -> Result<Version> {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);
    let core = trimmed.split(['-', '+']).next().unwrap_or_default();

    let parts: Vec<&str> = core.split('.').collect();
    if core.is_empty() || parts.len() > 3 {
        return Err(Error::invalid_version(
            input,
            "expected MAJOR[.MINOR[.PATCH]]",
        ));
    }

    let mut numbers = [0u64; 3];
    for (slot, part) in numbers.iter_mut().zip(&parts) {
        *slot = part.parse().map_err(|_| {
            Error::invalid_version(input, format!("{:?} is not a number", part))
        })?;
    }

    Ok(Version::new(numbers[0], numbers[1], numbers[2]))
}

/// Check whether `version` satisfies `constraint`
pub fn check_version_meets_constraint(version: &str, constraint: &str) -> Result<bool> {
    let constraint: VersionConstraint = constraint.parse()?;
    let version = parse_version(version)?;
    Ok(constraint.matches(&version))
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Term {
    Any,
    Req(Comparator),
    NotEqual(Comparator),
}

impl Term {
    fn matches(&self, version: &Version) -> bool {
        match self {
            Term::Any => true,
            Term::Req(comparator) => comparator.matches(version),
            Term::NotEqual(excluded) => !excluded.matches(version),
        }
    }
}

/// Parsed version constraint expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionConstraint {
    raw: String,
    alternatives: Vec<Vec<Term>>,
}

impl VersionConstraint {
    pub fn parse(expr: &str) -> Result<Self> {
        if expr.trim().is_empty() {
            return Err(Error::invalid_constraint(expr, "empty constraint"));
        }

        let alternatives = expr
            .split("||")
            .map(|group| parse_group(group, expr))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            raw: expr.to_string(),
            alternatives,
        })
    }

    /// Whether the version satisfies any alternative of the constraint
    pub fn matches(&self, version: &Version) -> bool {
        self.alternatives
            .iter()
            .any(|terms| terms.iter().all(|term| term.matches(version)))
    }

    /// Whether the constraint pins a full version or starts with `=`
    ///
    /// Such constraints are more specific than ranges and win over them when scoring.
    pub fn is_exact(&self) -> bool {
        EQUALITY_CONSTRAINT.is_match(self.raw.trim_start())
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for VersionConstraint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn parse_group(group: &str, expr: &str) -> Result<Vec<Term>> {
    if let Some(caps) = HYPHEN_RANGE.captures(group) {
        return Ok(vec![
            parse_term(&format!(">={}", &caps[1]), expr)?,
            parse_term(&format!("<={}", &caps[2]), expr)?,
        ]);
    }

    let mut terms = Vec::new();
    for part in group.split(',') {
        let mut pending_op = String::new();
        for token in part.split_whitespace() {
            if token.chars().all(|c| OPERATOR_CHARS.contains(&c)) {
                pending_op.push_str(token);
                continue;
            }
            terms.push(parse_term(&format!("{}{}", pending_op, token), expr)?);
            pending_op.clear();
        }
        if !pending_op.is_empty() {
            return Err(Error::invalid_constraint(
                expr,
                format!("operator {:?} is missing a version", pending_op),
            ));
        }
    }

    if terms.is_empty() {
        return Err(Error::invalid_constraint(expr, "empty alternative"));
    }

    Ok(terms)
}

fn parse_term(token: &str, expr: &str) -> Result<Term> {
    let split = token
        .find(|c: char| !OPERATOR_CHARS.contains(&c))
        .unwrap_or(token.len());
    let (op, version) = token.split_at(split);
    let version = version.strip_prefix('v').unwrap_or(version);

    if version.is_empty() {
        return Err(Error::invalid_constraint(
            expr,
            format!("operator {:?} is missing a version", op),
        ));
    }

    let op = match op {
        "" => "",
        "=" | "==" => "=",
        ">" => ">",
        ">=" | "=>" => ">=",
        "<" => "<",
        "<=" | "=<" => "<=",
        "~" | "~>" => "~",
        "^" => "^",
        "!=" => return parse_not_equal(version, expr),
        other => {
            return Err(Error::invalid_constraint(
                expr,
                format!("unknown operator {:?}", other),
            ))
        }
    };

    if op.is_empty() && matches!(version, "*" | "x" | "X") {
        return Ok(Term::Any);
    }

    // A bare version is an equality check, unless it carries a wildcard
    let has_wildcard = version
        .split('.')
        .any(|part| matches!(part, "*" | "x" | "X"));
    let op = if op.is_empty() && !has_wildcard { "=" } else { op };

    Comparator::parse(&format!("{}{}", op, version))
        .map(Term::Req)
        .map_err(|e| Error::invalid_constraint(expr, e.to_string()))
}

/// `!=` excludes everything the bare operand would match, so `!= 1.27` and
/// `!= 1.27.x` both exclude the whole 1.27 line.
fn parse_not_equal(version: &str, expr: &str) -> Result<Term> {
    let prefix: Vec<&str> = version
        .split('.')
        .take_while(|part| !matches!(*part, "*" | "x" | "X"))
        .collect();

    if prefix.is_empty() {
        return Err(Error::invalid_constraint(
            expr,
            format!("\"!={}\" excludes every version", version),
        ));
    }

    Comparator::parse(&format!("={}", prefix.join(".")))
        .map(Term::NotEqual)
        .map_err(|e| Error::invalid_constraint(expr, e.to_string()))
}
