//! API version as reported by `apiinfo.version`.
//!
//! Servers answer with `MAJOR.MINOR.PATCH` (`"2.0.4"`), older builds and
//! some proxies with `MAJOR.MINOR` only. Response shapes differ between
//! versions, so callers occasionally need to branch on it.
use std::cmp::Ordering;
use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A parsed API version.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiVersion {
    /// Version string exactly as the server sent it.
    pub version_string: String,
    /// Major component (`2` in `2.0.4`).
    pub major: u32,
    /// Minor component (`0` in `2.0.4`).
    pub minor: u32,
    /// Patch component, `0` when absent.
    pub patch: u32,
}

impl PartialOrd for ApiVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Ord for ApiVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch).cmp(&(other.major, other.minor, other.patch))
    }
}

/// Errors that can occur while parsing a version.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// The string is not `MAJOR.MINOR[.PATCH]`.
    #[error("Invalid API version format: {0}")]
    InvalidFormat(String),
    /// A component did not fit, or the pattern failed to compile.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ApiVersion {
    /// Parses `MAJOR.MINOR[.PATCH]`, ignoring surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, VersionError> {
        let re = Regex::new(r"^(\d+)\.(\d+)(?:\.(\d+))?$")
            .map_err(|e: regex::Error| VersionError::Parse(e.to_string()))?;
        let trimmed = s.trim();
        let caps = re.captures(trimmed).ok_or_else(|| VersionError::InvalidFormat(s.to_string()))?;

        let component = |text: &str| {
            text.parse::<u32>().map_err(|e: std::num::ParseIntError| VersionError::Parse(e.to_string()))
        };
        Ok(Self {
            version_string: trimmed.to_string(),
            major: component(&caps[1])?,
            minor: component(&caps[2])?,
            patch: match caps.get(3) {
                Some(m) => component(m.as_str())?,
                None => 0,
            },
        })
    }

    /// Return the version string as sent by the server.
    pub fn as_str(&self) -> &str { &self.version_string }

    /// Returns `true` if this version is `major.minor` or newer.
    pub fn at_least(&self, major: u32, minor: u32) -> bool {
        (self.major, self.minor) >= (major, minor)
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.version_string) }
}

impl std::str::FromStr for ApiVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::parse(s) }
}
