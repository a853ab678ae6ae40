//! Compatibility Policies
//!
//! Decides the oldest release a linked library still supports. The rule is
//! release-policy specific, so it is data rather than code: pick a preset by
//! name or load one from YAML.

use crate::error::VersionError;
use crate::version::{Version, VersionInfo};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming the process-wide policy preset
pub const POLICY_ENV: &str = "TKVER_COMPAT_POLICY";

/// Environment variable pointing at a YAML policy file; wins over [`POLICY_ENV`]
pub const POLICY_FILE_ENV: &str = "TKVER_COMPAT_POLICY_FILE";

/// How the oldest supported version is derived from the linked record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FloorRule {
    /// Oldest minor is `minor - (binary_age - interface_age)`
    AgeSpan,
    /// Oldest effective micro is `100 * minor + micro - binary_age`
    EffectiveMicro,
}

/// Minor-series convention applied to the computed floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Parity {
    /// Every minor series is a release series
    Any,
    /// Odd minors are development series; the floor never lands on one
    EvenStable,
}

/// A named floor rule plus parity convention
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatPolicy {
    /// Preset name (e.g., "age-span", "release-history")
    pub name: String,

    pub floor: FloorRule,

    #[serde(default = "default_parity")]
    pub parity: Parity,

    /// Pinned floor: minors below this are never supported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oldest_minor: Option<u32>,
}

fn default_parity() -> Parity {
    Parity::Any
}

impl CompatPolicy {
    /// Floor from the age span, any minor series allowed
    pub fn age_span() -> Self {
        Self {
            name: "age-span".to_string(),
            floor: FloorRule::AgeSpan,
            parity: Parity::Any,
            oldest_minor: None,
        }
    }

    /// Floor from the age span, rounded up to a stable (even) series
    pub fn stable_series() -> Self {
        Self {
            name: "stable-series".to_string(),
            floor: FloorRule::AgeSpan,
            parity: Parity::EvenStable,
            oldest_minor: None,
        }
    }

    /// Floor from the toolkit's release history, `100 * minor + micro`
    pub fn release_history() -> Self {
        Self {
            name: "release-history".to_string(),
            floor: FloorRule::EffectiveMicro,
            parity: Parity::Any,
            oldest_minor: None,
        }
    }

    /// Load policy from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, VersionError> {
        serde_yaml::from_str(yaml).map_err(|e| VersionError::Policy(e.to_string()))
    }

    /// Load policy from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, VersionError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| VersionError::Policy(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml(&yaml)
    }

    /// Look up a preset by name
    pub fn try_for_name(name: &str) -> Option<Self> {
        match name.trim() {
            "age-span" => Some(Self::age_span()),
            "stable-series" => Some(Self::stable_series()),
            "release-history" => Some(Self::release_history()),
            _ => None,
        }
    }

    /// Get preset by name, falling back to the default
    pub fn for_name(name: &str) -> Self {
        Self::try_for_name(name).unwrap_or_else(|| {
            tracing::warn!("unknown compat policy '{}', using default", name);
            Self::default()
        })
    }

    /// Policy from the file named by [`POLICY_FILE_ENV`], else the preset
    /// named by [`POLICY_ENV`], else the default.
    pub fn from_env() -> Self {
        if let Ok(path) = std::env::var(POLICY_FILE_ENV) {
            match Self::from_file(&path) {
                Ok(policy) => return policy,
                Err(e) => tracing::warn!("ignoring compat policy file: {}", e),
            }
        }
        match std::env::var(POLICY_ENV) {
            Ok(name) => Self::for_name(&name),
            Err(_) => Self::default(),
        }
    }

    /// Oldest version the library described by `linked` still supports.
    /// Never above the linked version itself.
    pub fn oldest_supported(&self, linked: &VersionInfo) -> Version {
        let computed = self.computed_floor(linked);
        let pinned = match self.oldest_minor {
            Some(minor) => computed.max(Version::new(linked.major(), minor, 0)),
            None => computed,
        };
        pinned.min(linked.version)
    }

    fn computed_floor(&self, linked: &VersionInfo) -> Version {
        let major = linked.major();
        match self.floor {
            FloorRule::AgeSpan => {
                let minor = linked.minor().saturating_sub(linked.age_span());
                Version::new(major, self.apply_parity(minor), 0)
            }
            FloorRule::EffectiveMicro => {
                let floor = linked
                    .version
                    .effective_micro()
                    .saturating_sub(u64::from(linked.binary_age));
                // floor / 100 <= linked minor
                let minor = u32::try_from(floor / 100).unwrap_or(linked.minor());
                let micro = (floor % 100) as u32;
                let even = self.apply_parity(minor);
                if even != minor {
                    Version::new(major, even, 0)
                } else {
                    Version::new(major, minor, micro)
                }
            }
        }
    }

    /// Whether `required` is at or above the floor for `linked`.
    pub fn supports(&self, linked: &VersionInfo, required: &Version) -> bool {
        let oldest = self.oldest_supported(linked);
        match self.floor {
            FloorRule::AgeSpan => required.minor >= oldest.minor,
            FloorRule::EffectiveMicro => required.effective_micro() >= oldest.effective_micro(),
        }
    }

    fn apply_parity(&self, minor: u32) -> u32 {
        match self.parity {
            Parity::Any => minor,
            Parity::EvenStable if minor % 2 == 1 => minor.saturating_add(1),
            Parity::EvenStable => minor,
        }
    }
}

impl Default for CompatPolicy {
    fn default() -> Self {
        Self::age_span()
    }
}
