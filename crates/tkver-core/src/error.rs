//! Unified Error Model
use crate::version::Version;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised while building version records or loading policy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("PARSE/{0}")]
    Parse(String),

    #[error("AGES/interface age {interface_age} exceeds binary age {binary_age}")]
    InvalidAges { binary_age: u32, interface_age: u32 },

    #[error("POLICY/{0}")]
    Policy(String),
}

/// Which branch of the compatibility check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IncompatibilityKind {
    /// Required major differs from the linked major
    MajorMismatch,
    /// Required version is newer than the linked library
    TooNew,
    /// Required version predates the oldest version the linked library supports
    TooOld,
}

impl IncompatibilityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncompatibilityKind::MajorMismatch => "MAJOR_MISMATCH",
            IncompatibilityKind::TooNew => "TOO_NEW",
            IncompatibilityKind::TooOld => "TOO_OLD",
        }
    }
}

impl fmt::Display for IncompatibilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed compatibility check. `Display` gives the diagnostic text.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{}", describe(.kind, .required, .linked, .oldest_supported))]
pub struct Incompatibility {
    pub kind: IncompatibilityKind,
    pub required: Version,
    pub linked: Version,
    pub oldest_supported: Version,
}

impl Incompatibility {
    pub fn kind(&self) -> IncompatibilityKind {
        self.kind
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

fn describe(
    kind: &IncompatibilityKind,
    required: &Version,
    linked: &Version,
    oldest: &Version,
) -> String {
    match kind {
        IncompatibilityKind::MajorMismatch => format!(
            "incompatible major version: required {}, linked library is {}",
            required, linked
        ),
        IncompatibilityKind::TooNew => format!(
            "linked library too old: required {}, linked library is {}",
            required, linked
        ),
        IncompatibilityKind::TooOld => format!(
            "required version {} predates the oldest version supported by the linked library ({}, linked {})",
            required, oldest, linked
        ),
    }
}
