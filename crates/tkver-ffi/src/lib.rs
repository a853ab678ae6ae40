//! C ABI: version accessors and compatibility check
//!
//! Exported symbols mirror the Rust accessors in `tkver_core`. The check
//! returns NULL when compatible, otherwise a static NUL-terminated message
//! owned by the library. Callers must not free it.

use std::ffi::{c_char, c_int, c_uint, CStr};
use tkver_core::IncompatibilityKind;

const MAJOR_MISMATCH: &CStr = c"toolkit version mismatch (incompatible major version)";
const TOO_NEW: &CStr = c"toolkit version too old (required version is newer than the linked library)";
const TOO_OLD: &CStr = c"toolkit version too new (required version predates the oldest supported interface)";

fn message(kind: IncompatibilityKind) -> &'static CStr {
    match kind {
        IncompatibilityKind::MajorMismatch => MAJOR_MISMATCH,
        IncompatibilityKind::TooNew => TOO_NEW,
        IncompatibilityKind::TooOld => TOO_OLD,
    }
}

fn kind_code(kind: Option<IncompatibilityKind>) -> c_int {
    match kind {
        None => 0,
        Some(IncompatibilityKind::MajorMismatch) => 1,
        Some(IncompatibilityKind::TooNew) => 2,
        Some(IncompatibilityKind::TooOld) => 3,
    }
}

fn check(major: c_uint, minor: c_uint, micro: c_uint) -> Option<IncompatibilityKind> {
    tkver_core::check_version(major, minor, micro)
        .err()
        .map(|e| {
            tracing::debug!(kind = %e.kind(), "{}", e);
            e.kind()
        })
}

#[no_mangle]
pub extern "C" fn tkver_get_major_version() -> c_uint {
    tkver_core::get_major_version()
}

#[no_mangle]
pub extern "C" fn tkver_get_minor_version() -> c_uint {
    tkver_core::get_minor_version()
}

#[no_mangle]
pub extern "C" fn tkver_get_micro_version() -> c_uint {
    tkver_core::get_micro_version()
}

#[no_mangle]
pub extern "C" fn tkver_get_binary_age() -> c_uint {
    tkver_core::get_binary_age()
}

#[no_mangle]
pub extern "C" fn tkver_get_interface_age() -> c_uint {
    tkver_core::get_interface_age()
}

/// NULL if the linked library is compatible with the required version,
/// otherwise a static diagnostic string.
#[no_mangle]
pub extern "C" fn tkver_check_version(
    required_major: c_uint,
    required_minor: c_uint,
    required_micro: c_uint,
) -> *const c_char {
    match check(required_major, required_minor, required_micro) {
        None => std::ptr::null(),
        Some(kind) => message(kind).as_ptr(),
    }
}

/// 0 if compatible; 1 major mismatch, 2 required too new, 3 required too old.
#[no_mangle]
pub extern "C" fn tkver_check_version_kind(
    required_major: c_uint,
    required_minor: c_uint,
    required_micro: c_uint,
) -> c_int {
    kind_code(check(required_major, required_minor, required_micro))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked(major: c_uint, minor: c_uint, micro: c_uint) -> Option<String> {
        let ptr = tkver_check_version(major, minor, micro);
        if ptr.is_null() {
            None
        } else {
            Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
        }
    }

    #[test]
    fn test_accessors() {
        assert_eq!(tkver_get_major_version(), 4);
        assert_eq!(tkver_get_minor_version(), 18);
        assert_eq!(tkver_get_micro_version(), 6);
        assert_eq!(tkver_get_binary_age(), 1806);
        assert_eq!(tkver_get_interface_age(), 6);
    }

    #[test]
    fn test_check_returns_null_when_compatible() {
        assert_eq!(checked(4, 18, 6), None);
        assert_eq!(tkver_check_version_kind(4, 18, 6), 0);
    }

    #[test]
    fn test_check_messages() {
        assert!(checked(5, 0, 0).unwrap().contains("major"));
        assert!(checked(3, 99, 99).unwrap().contains("major"));
        assert!(checked(4, 19, 0).unwrap().contains("too old"));
    }

    #[test]
    fn test_message_per_kind() {
        let too_old = message(IncompatibilityKind::TooOld).to_str().unwrap();
        assert!(too_old.contains("predates the oldest supported interface"));
        assert!(message(IncompatibilityKind::MajorMismatch).to_str().unwrap().contains("major"));
        assert!(message(IncompatibilityKind::TooNew).to_str().unwrap().contains("newer than the linked"));
    }

    #[test]
    fn test_check_kind_codes() {
        assert_eq!(tkver_check_version_kind(5, 0, 0), 1);
        assert_eq!(tkver_check_version_kind(4, 19, 0), 2);
        assert_eq!(kind_code(Some(IncompatibilityKind::TooOld)), 3);
    }

    #[test]
    fn test_message_pointers_are_stable() {
        assert_eq!(tkver_check_version(5, 0, 0), tkver_check_version(6, 0, 0));
    }
}
