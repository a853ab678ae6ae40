//! Toolkit Version Registry
//!
//! Two views of the toolkit version:
//!
//! - **headers**: `const` items fixed when the calling code is compiled
//!   ([`MAJOR_VERSION`], [`check_version!`], ...)
//! - **linked**: accessors reporting the library instance in the running
//!   process ([`get_major_version`], [`check_version()`], ...)
//!
//! # Example
//!
//! ```
//! use tkver_core::{check_version, IncompatibilityKind};
//!
//! // Gate on the headers at compile time
//! const HAS_4_12: bool = tkver_core::check_version!(4, 12, 0);
//! assert!(HAS_4_12);
//!
//! // Check the linked library at run time
//! match check_version(4, 12, 0) {
//!     Ok(()) => {}
//!     Err(e) if e.kind() == IncompatibilityKind::TooNew => eprintln!("upgrade: {}", e),
//!     Err(e) => eprintln!("incompatible: {}", e),
//! }
//! ```

pub mod check;
pub mod error;
pub mod headers;
pub mod policy;
pub mod runtime;
pub mod version;

pub use error::{Incompatibility, IncompatibilityKind, VersionError};
pub use headers::{
    headers, headers_at_least, BINARY_AGE, HEADER_INFO, HEADER_VERSION, INTERFACE_AGE,
    MAJOR_VERSION, MICRO_VERSION, MINOR_VERSION,
};
pub use policy::{CompatPolicy, FloorRule, Parity, POLICY_ENV, POLICY_FILE_ENV};
pub use runtime::{
    check_version, get_binary_age, get_interface_age, get_major_version, get_micro_version,
    get_minor_version, linked, linked_library, LinkedLibrary,
};
pub use version::{Version, VersionInfo};
