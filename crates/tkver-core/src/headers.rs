//! Compile-time version constants
//!
//! These describe the library the calling code was *built against*. They are
//! derived from the package version when this crate is compiled, so a
//! consumer sees them as plain `const` items. Use the accessors in
//! [`crate::runtime`] for the library actually linked at run time.

use crate::version::{Version, VersionInfo};

const fn parse_component(text: &str) -> u32 {
    let bytes = text.as_bytes();
    assert!(!bytes.is_empty(), "empty version component");
    let mut value: u32 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        assert!(b.is_ascii_digit(), "non-numeric version component");
        value = value * 10 + (b - b'0') as u32;
        i += 1;
    }
    value
}

/// Like [`crate::get_major_version`], but from the headers used at build time.
pub const MAJOR_VERSION: u32 = parse_component(env!("CARGO_PKG_VERSION_MAJOR"));

/// Like [`crate::get_minor_version`], but from the headers used at build time.
pub const MINOR_VERSION: u32 = parse_component(env!("CARGO_PKG_VERSION_MINOR"));

/// Like [`crate::get_micro_version`], but from the headers used at build time.
pub const MICRO_VERSION: u32 = parse_component(env!("CARGO_PKG_VERSION_PATCH"));

/// Like [`crate::get_binary_age`], but from the headers used at build time.
pub const BINARY_AGE: u32 = 100 * MINOR_VERSION + MICRO_VERSION;

/// Like [`crate::get_interface_age`], but from the headers used at build time.
pub const INTERFACE_AGE: u32 = MICRO_VERSION;

const _: () = assert!(INTERFACE_AGE <= BINARY_AGE);

/// The build-time version triple
pub const HEADER_VERSION: Version = Version::new(MAJOR_VERSION, MINOR_VERSION, MICRO_VERSION);

/// The build-time record
pub const HEADER_INFO: VersionInfo =
    VersionInfo::new_unchecked(HEADER_VERSION, BINARY_AGE, INTERFACE_AGE);

/// True if the build-time headers are the same as or newer than the given version.
pub const fn headers_at_least(major: u32, minor: u32, micro: u32) -> bool {
    HEADER_VERSION.at_least(&Version::new(major, minor, micro))
}

/// The build-time record as a value
pub fn headers() -> VersionInfo {
    HEADER_INFO
}

/// Evaluates to `true` if the headers this code is compiled against are the
/// same as or newer than `major.minor.micro`. Usable in `const` context.
///
/// ```
/// const HAS_4_10: bool = tkver_core::check_version!(4, 10, 0);
/// assert!(HAS_4_10);
/// ```
#[macro_export]
macro_rules! check_version {
    ($major:expr, $minor:expr, $micro:expr $(,)?) => {
        $crate::headers::headers_at_least($major, $minor, $micro)
    };
}
