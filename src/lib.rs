//! Mozilla toolkit version comparison
//!
//! Compares version strings such as `1.0`, `3.6b2`, `1.1pre10a`, `2.0+` and
//! `3.*` using the four-field toolkit order. Comparison is total: every pair
//! of strings has an ordering.
//!
//! ```
//! use std::cmp::Ordering;
//! use toolkit_version::{Version, compare};
//!
//! assert_eq!(compare("1.0", "1.0.0"), Ordering::Equal);
//! assert_eq!(compare("2.0b1", "2.0"), Ordering::Less);
//! assert!(Version::parse("3.*") > Version::parse("3.6.28"));
//! ```

pub mod config;
pub mod version;

pub use config::Config;
pub use version::comparator::{Version, compare, compare_spaceship, eq, ge, gt, le, lt};
pub use version::part::{Tag, VersionPart, compare_parts, parse_part};
pub use version::range::VersionRange;
