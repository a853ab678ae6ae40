//! Process-wide policy loaded from a YAML file.
//!
//! Kept in its own test binary: the linked record is resolved once per
//! process, so the variable must be set before anything touches it.

use tkver_core::{check_version, linked_library, IncompatibilityKind, Version, POLICY_FILE_ENV};

#[test]
fn test_pinned_policy_file_reports_too_old() {
    let path = std::env::temp_dir().join(format!("tkver-file-policy-{}.yaml", std::process::id()));
    std::fs::write(
        &path,
        "name: pinned-4.12\nfloor: age-span\nparity: even-stable\noldest_minor: 12\n",
    )
    .unwrap();
    std::env::set_var(POLICY_FILE_ENV, &path);

    let linked = linked_library();
    let _ = std::fs::remove_file(&path);
    assert_eq!(linked.policy.name, "pinned-4.12");
    assert_eq!(linked.policy.oldest_minor, Some(12));

    assert!(check_version(4, 12, 0).is_ok());
    assert!(check_version(4, 18, 6).is_ok());

    let err = check_version(4, 11, 9).unwrap_err();
    assert_eq!(err.kind(), IncompatibilityKind::TooOld);
    assert_eq!(err.oldest_supported, Version::new(4, 12, 0));
    assert!(err.to_string().contains("predates"));

    // other branches still take precedence over the floor
    assert_eq!(check_version(3, 0, 0).unwrap_err().kind(), IncompatibilityKind::MajorMismatch);
    assert_eq!(check_version(4, 19, 0).unwrap_err().kind(), IncompatibilityKind::TooNew);
}
