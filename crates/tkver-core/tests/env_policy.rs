//! Process-wide policy selection through the environment.
//!
//! Kept in its own test binary: the linked record is resolved once per
//! process, so the variable must be set before anything touches it.

use tkver_core::{check_version, linked_library, CompatPolicy, POLICY_ENV};

#[test]
fn test_policy_selected_from_env() {
    std::env::set_var(POLICY_ENV, "release-history");

    assert_eq!(linked_library().policy, CompatPolicy::release_history());
    assert!(check_version(4, 0, 0).is_ok());

    // resolved once; later changes are not observed
    std::env::set_var(POLICY_ENV, "stable-series");
    assert_eq!(linked_library().policy, CompatPolicy::release_history());
}
