//! Toolkit version ordering
//!
//! This module implements the version order used for extension,
//! application and update-channel versions, plus the range and
//! latest-version helpers built on it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    Part     │────▶│ Comparator  │────▶│    Range    │
//! │ (1pre10a)   │     │ (1.0.0+)    │     │ (min..max)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │
//!                            ▼
//!                     ┌─────────────┐
//!                     │   Checker   │
//!                     │  (latest)   │
//!                     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`part`]: Parsing and ordering of one `.`-separated part
//! - [`comparator`]: Whole-version comparison and the [`Version`](comparator::Version) type
//! - [`range`]: Min/max ranges and add-on compatibility
//! - [`checker`]: Latest-version lookup and status of a current version
//! - [`error`]: Error types for range construction

pub mod checker;
pub mod comparator;
pub mod error;
pub mod part;
pub mod range;
