//! Version triple and the full version record
//!
//! A [`Version`] is the `major.minor.micro` identity of a release. A
//! [`VersionInfo`] adds the two ABI counters that travel with it.

use crate::error::VersionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Release identity. Ordered lexicographically: major, then minor, then micro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Version {
    /// Bumped on changes that may break the ABI
    pub major: u32,
    /// Bumped when features are added
    pub minor: u32,
    /// Bumped for fixes
    pub micro: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, micro: u32) -> Self {
        Self { major, minor, micro }
    }

    /// `const` form of `self >= other`, for use in compile-time gates.
    pub const fn at_least(&self, other: &Version) -> bool {
        self.major > other.major
            || (self.major == other.major && self.minor > other.minor)
            || (self.major == other.major
                && self.minor == other.minor
                && self.micro >= other.micro)
    }

    /// Minor and micro folded into one counter, `100 * minor + micro`.
    pub fn effective_micro(&self) -> u64 {
        100 * u64::from(self.minor) + u64::from(self.micro)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('.').collect();
        if parts.len() != 3 {
            return Err(VersionError::Parse(format!(
                "expected major.minor.micro, got '{}'",
                s
            )));
        }

        let component = |name: &str, text: &str| {
            text.parse::<u32>().map_err(|e| {
                VersionError::Parse(format!("invalid {} component '{}': {}", name, text, e))
            })
        };

        Ok(Self {
            major: component("major", parts[0])?,
            minor: component("minor", parts[1])?,
            micro: component("micro", parts[2])?,
        })
    }
}

impl From<(u32, u32, u32)> for Version {
    fn from((major, minor, micro): (u32, u32, u32)) -> Self {
        Self::new(major, minor, micro)
    }
}

/// A release together with its ABI counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawVersionInfo")]
pub struct VersionInfo {
    pub version: Version,

    /// ABI revisions since the library's inception
    pub binary_age: u32,

    /// Revisions since the last ABI break, never above `binary_age`
    pub interface_age: u32,
}

impl VersionInfo {
    /// Build a record, rejecting an interface age above the binary age.
    pub fn new(version: Version, binary_age: u32, interface_age: u32) -> Result<Self, VersionError> {
        if interface_age > binary_age {
            return Err(VersionError::InvalidAges {
                binary_age,
                interface_age,
            });
        }
        Ok(Self::new_unchecked(version, binary_age, interface_age))
    }

    /// Caller guarantees `interface_age <= binary_age`.
    pub const fn new_unchecked(version: Version, binary_age: u32, interface_age: u32) -> Self {
        Self {
            version,
            binary_age,
            interface_age,
        }
    }

    pub fn major(&self) -> u32 {
        self.version.major
    }

    pub fn minor(&self) -> u32 {
        self.version.minor
    }

    pub fn micro(&self) -> u32 {
        self.version.micro
    }

    /// Releases since the last ABI break that are not part of the current interface.
    pub fn age_span(&self) -> u32 {
        self.binary_age.saturating_sub(self.interface_age)
    }
}

/// Wire form of [`VersionInfo`], validated on the way in
#[derive(Deserialize)]
struct RawVersionInfo {
    version: Version,
    binary_age: u32,
    interface_age: u32,
}

impl TryFrom<RawVersionInfo> for VersionInfo {
    type Error = VersionError;

    fn try_from(raw: RawVersionInfo) -> Result<Self, Self::Error> {
        VersionInfo::new(raw.version, raw.binary_age, raw.interface_age)
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (binary age {}, interface age {})",
            self.version, self.binary_age, self.interface_age
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_lexicographic() {
        assert!(Version::new(4, 18, 6) > Version::new(4, 9, 99));
        assert!(Version::new(5, 0, 0) > Version::new(4, 99, 99));
        assert!(Version::new(4, 18, 7) > Version::new(4, 18, 6));
    }

    #[test]
    fn test_at_least_agrees_with_ord() {
        let samples = [
            Version::new(3, 99, 99),
            Version::new(4, 0, 0),
            Version::new(4, 18, 5),
            Version::new(4, 18, 6),
            Version::new(4, 19, 0),
            Version::new(5, 0, 0),
        ];
        for a in &samples {
            for b in &samples {
                assert_eq!(a.at_least(b), a >= b, "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn test_parse() {
        let v: Version = "4.18.6".parse().unwrap();
        assert_eq!(v, Version::new(4, 18, 6));
        assert_eq!(v.to_string(), "4.18.6");
        assert_eq!(v, Version::from((4, 18, 6)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("4.18".parse::<Version>().is_err());
        assert!("4.18.x".parse::<Version>().is_err());
        assert!("4.-1.0".parse::<Version>().is_err());
        assert!("".parse::<Version>().is_err());
    }

    #[test]
    fn test_info_rejects_interface_age_above_binary_age() {
        let err = VersionInfo::new(Version::new(4, 18, 6), 6, 1806).unwrap_err();
        assert!(matches!(
            err,
            VersionError::InvalidAges {
                binary_age: 6,
                interface_age: 1806
            }
        ));
    }

    #[test]
    fn test_info_deserialize_rejects_interface_age_above_binary_age() {
        let json = r#"{"version":{"major":4,"minor":18,"micro":6},"binary_age":6,"interface_age":1806}"#;
        let err = serde_json::from_str::<VersionInfo>(json).unwrap_err();
        assert!(err.to_string().contains("interface age 1806 exceeds binary age 6"));
    }

    #[test]
    fn test_info_deserialize_valid() {
        let json = r#"{"version":{"major":4,"minor":18,"micro":6},"binary_age":1806,"interface_age":6}"#;
        let info: VersionInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info, VersionInfo::new(Version::new(4, 18, 6), 1806, 6).unwrap());
        assert_eq!(serde_json::to_string(&info).unwrap(), json);
    }

    #[test]
    fn test_age_span_saturates_on_unchecked_record() {
        let info = VersionInfo::new_unchecked(Version::new(4, 18, 6), 6, 1806);
        assert_eq!(info.age_span(), 0);
        assert!(info.check(Version::new(4, 18, 6), &crate::CompatPolicy::age_span()).is_ok());
    }

    #[test]
    fn test_info_age_span() {
        let info = VersionInfo::new(Version::new(4, 18, 6), 1806, 6).unwrap();
        assert_eq!(info.age_span(), 1800);
        assert_eq!(info.version.effective_micro(), 1806);
    }
}
