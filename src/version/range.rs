//! Min/max version ranges and add-on compatibility
//!
//! An add-on declares, per target application, the oldest and newest
//! application versions it supports:
//!
//! ```json
//! { "minVersion": "3.0", "maxVersion": "3.6.*" }
//! ```
//!
//! Whether the add-on is usable depends on the application version and on
//! the compatibility settings in [`CompatibilityConfig`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::CompatibilityConfig;
use crate::version::comparator::Version;
use crate::version::error::RangeError;

/// Inclusive range of versions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RangeSpec")]
pub struct VersionRange {
    min_version: Version,
    max_version: Version,
}

/// Unchecked form used while deserializing
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RangeSpec {
    min_version: Version,
    max_version: Version,
}

impl TryFrom<RangeSpec> for VersionRange {
    type Error = RangeError;

    fn try_from(spec: RangeSpec) -> Result<Self, Self::Error> {
        Self::new(spec.min_version, spec.max_version)
    }
}

impl VersionRange {
    /// Create a range, rejecting `min > max`
    pub fn new(min: impl Into<Version>, max: impl Into<Version>) -> Result<Self, RangeError> {
        let min_version = min.into();
        let max_version = max.into();

        if min_version > max_version {
            return Err(RangeError::Inverted {
                min: min_version.to_string(),
                max: max_version.to_string(),
            });
        }

        Ok(Self {
            min_version,
            max_version,
        })
    }

    /// Oldest version in the range
    pub fn min(&self) -> &Version {
        &self.min_version
    }

    /// Newest version in the range
    pub fn max(&self) -> &Version {
        &self.max_version
    }

    /// `min <= version <= max`
    pub fn contains(&self, version: &Version) -> bool {
        &self.min_version <= version && version <= &self.max_version
    }

    /// Check whether an application version can use something declaring
    /// this range
    ///
    /// - compatibility checking disabled: always compatible
    /// - below `min`: never compatible
    /// - strict mode: must not exceed `max`
    /// - otherwise `max` only matters when it is older than
    ///   `min_compatible_app_version`
    pub fn is_compatible_with(&self, app_version: &Version, config: &CompatibilityConfig) -> bool {
        if !config.check_compatibility {
            debug!("Compatibility checking disabled, accepting {}", app_version);
            return true;
        }

        if app_version < &self.min_version {
            debug!(
                "{} is older than min version {}",
                app_version, self.min_version
            );
            return false;
        }

        if config.strict_compatibility {
            let compatible = app_version <= &self.max_version;
            debug!(
                "Strict compatibility: {} against max version {}: {}",
                app_version, self.max_version, compatible
            );
            return compatible;
        }

        match &config.min_compatible_app_version {
            Some(floor) if &self.max_version < floor => {
                debug!(
                    "Max version {} is older than min compatible app version {}",
                    self.max_version, floor
                );
                false
            }
            _ => true,
        }
    }
}
