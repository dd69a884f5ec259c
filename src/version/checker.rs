//! Latest-version lookup and current-version status

use std::cmp::Ordering;

use tracing::debug;

use crate::config::CheckerConfig;
use crate::version::comparator::{Version, compare};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareResult {
    Latest,
    Outdated,
    Newer,
}

/// Result of checking a version against the available ones
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionCheck {
    /// Version being checked
    pub current_version: String,
    /// Greatest available version (if any)
    pub latest_version: Option<String>,
    /// Version status
    pub status: VersionStatus,
}

/// Status of the version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionStatus {
    /// Current version is the latest
    Latest,
    /// Current version is outdated
    Outdated,
    /// Current version is newer than latest (e.g. a prerelease while prereleases are ignored)
    Newer,
    /// Current version is not among the available versions
    NotFound,
    /// Nothing to compare against
    NoVersions,
}

/// Compare the current version to the latest version
pub fn compare_to_latest(current_version: &str, latest_version: &str) -> CompareResult {
    match compare(current_version, latest_version) {
        Ordering::Less => CompareResult::Outdated,
        Ordering::Equal => CompareResult::Latest,
        Ordering::Greater => CompareResult::Newer,
    }
}

/// Find the greatest version in toolkit order
///
/// Prereleases are skipped when `ignore_prerelease` is set. Among versions
/// that compare equal, the first one wins.
pub fn latest_version(available_versions: &[String], ignore_prerelease: bool) -> Option<&str> {
    let mut latest: Option<(&str, Version)> = None;

    for candidate in available_versions {
        let version = Version::parse(candidate);
        if ignore_prerelease && version.is_prerelease() {
            continue;
        }
        if latest.as_ref().is_none_or(|(_, best)| version > *best) {
            latest = Some((candidate.as_str(), version));
        }
    }

    latest.map(|(raw, _)| raw)
}

/// Check if any available version is equal to `version` in toolkit order
///
/// `1.0` exists if `1.0.0` is available.
pub fn version_exists(version: &str, available_versions: &[String]) -> bool {
    available_versions
        .iter()
        .any(|available| compare(version, available).is_eq())
}

/// Sort versions ascending in toolkit order, keeping equal versions in place
pub fn sort_versions(versions: &mut [String]) {
    versions.sort_by(|a, b| compare(a, b));
}

/// Determine the status of `current_version` against the available versions
pub fn check_version(
    current_version: &str,
    available_versions: &[String],
    config: &CheckerConfig,
) -> VersionCheck {
    let Some(latest) = latest_version(available_versions, config.ignore_prerelease) else {
        debug!("No versions to compare {} against", current_version);
        return VersionCheck {
            current_version: current_version.to_string(),
            latest_version: None,
            status: VersionStatus::NoVersions,
        };
    };

    let status = match compare_to_latest(current_version, latest) {
        _ if !version_exists(current_version, available_versions) => VersionStatus::NotFound,
        CompareResult::Latest => VersionStatus::Latest,
        CompareResult::Outdated => VersionStatus::Outdated,
        CompareResult::Newer => VersionStatus::Newer,
    };
    debug!(
        "Checked {} against latest {}: {:?}",
        current_version, latest, status
    );

    VersionCheck {
        current_version: current_version.to_string(),
        latest_version: Some(latest.to_string()),
        status,
    }
}
