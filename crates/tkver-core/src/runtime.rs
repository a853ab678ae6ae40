//! Linked Library: run-time version accessors
//!
//! The values here describe the library instance linked into the running
//! process, which may differ from the headers a caller was compiled against.
//! They are resolved once and never change.

use crate::error::Incompatibility;
use crate::headers::HEADER_INFO;
use crate::policy::CompatPolicy;
use crate::version::{Version, VersionInfo};
use once_cell::sync::Lazy;

/// Process-wide record of the linked library and the policy used to check it
#[derive(Debug, Clone)]
pub struct LinkedLibrary {
    pub info: VersionInfo,
    pub policy: CompatPolicy,
}

impl LinkedLibrary {
    fn resolve() -> Self {
        let linked = Self {
            info: HEADER_INFO,
            policy: CompatPolicy::from_env(),
        };
        tracing::debug!(
            version = %linked.info.version,
            binary_age = linked.info.binary_age,
            interface_age = linked.info.interface_age,
            policy = %linked.policy.name,
            "linked library resolved"
        );
        linked
    }
}

static LINKED: Lazy<LinkedLibrary> = Lazy::new(LinkedLibrary::resolve);

/// The linked library record
pub fn linked_library() -> &'static LinkedLibrary {
    &LINKED
}

/// Version record of the linked library
pub fn linked() -> &'static VersionInfo {
    &LINKED.info
}

/// Major version of the linked library, e.g. 4 for 4.18.6
pub fn get_major_version() -> u32 {
    LINKED.info.major()
}

/// Minor version of the linked library, e.g. 18 for 4.18.6
pub fn get_minor_version() -> u32 {
    LINKED.info.minor()
}

/// Micro version of the linked library, e.g. 6 for 4.18.6
pub fn get_micro_version() -> u32 {
    LINKED.info.micro()
}

/// ABI revisions of the linked library since its inception
pub fn get_binary_age() -> u32 {
    LINKED.info.binary_age
}

/// Revisions of the linked library since its last ABI break
pub fn get_interface_age() -> u32 {
    LINKED.info.interface_age
}

/// Check that the linked library is compatible with the given required
/// version. `Ok(())` means compatible; the error names the failed branch and
/// carries a human-readable diagnostic.
///
/// Compatible means: same major, not newer than the linked library, and not
/// older than the oldest version the process-wide [`CompatPolicy`] allows.
pub fn check_version(
    required_major: u32,
    required_minor: u32,
    required_micro: u32,
) -> Result<(), Incompatibility> {
    let linked = linked_library();
    linked.info.check(
        Version::new(required_major, required_minor, required_micro),
        &linked.policy,
    )
}
