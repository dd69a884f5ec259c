//! Ordering of whole version strings
//!
//! Versions are split on `.` without coalescing empty segments, the shorter
//! side is padded with empty parts, and the parts are compared in order.
//! An empty part equals `0`, so `1.0`, `1.0.0` and `1.0.0.0` are all equal.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::version::part::{EMPTY_PART, VersionPart};

/// Compare two version strings
///
/// `Ordering as i8` gives the classic `-1 / 0 / 1` value; see also
/// [`compare_spaceship`].
///
/// ```
/// use std::cmp::Ordering;
/// use toolkit_version::compare;
///
/// assert_eq!(compare("1.0pre1", "1.0pre2"), Ordering::Less);
/// assert_eq!(compare("1.1pre0", "1.0+"), Ordering::Equal);
/// assert_eq!(compare("1.*", "1.1pre10a"), Ordering::Greater);
/// ```
pub fn compare(left: &str, right: &str) -> Ordering {
    let mut left_parts = left.split('.');
    let mut right_parts = right.split('.');

    loop {
        let (l, r) = match (left_parts.next(), right_parts.next()) {
            (None, None) => return Ordering::Equal,
            (l, r) => (l.unwrap_or(""), r.unwrap_or("")),
        };

        let ordering = VersionPart::parse(l).cmp(&VersionPart::parse(r));
        if ordering.is_ne() {
            return ordering;
        }
    }
}

/// [`compare`] as an integer in `{-1, 0, 1}`
pub fn compare_spaceship(left: &str, right: &str) -> i32 {
    compare(left, right) as i32
}

/// `left < right`
pub fn lt(left: &str, right: &str) -> bool {
    compare(left, right).is_lt()
}

/// `left <= right`
pub fn le(left: &str, right: &str) -> bool {
    compare(left, right).is_le()
}

/// `left == right` (`1.0` equals `1.0.0`)
pub fn eq(left: &str, right: &str) -> bool {
    compare(left, right).is_eq()
}

/// `left >= right`
pub fn ge(left: &str, right: &str) -> bool {
    compare(left, right).is_ge()
}

/// `left > right`
pub fn gt(left: &str, right: &str) -> bool {
    compare(left, right).is_gt()
}

fn compare_part_slices(left: &[VersionPart], right: &[VersionPart]) -> Ordering {
    let len = left.len().max(right.len());
    (0..len)
        .map(|i| {
            let l = left.get(i).unwrap_or(&EMPTY_PART);
            let r = right.get(i).unwrap_or(&EMPTY_PART);
            l.cmp(r)
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// A parsed version string
///
/// Keeps the original text for display. Equality follows the toolkit order,
/// so `Version::parse("1.0") == Version::parse("1.0.0")`.
#[derive(Debug, Clone)]
pub struct Version {
    raw: String,
    parts: Vec<VersionPart>,
}

impl Version {
    /// Parse a version string. Never fails.
    pub fn parse(raw: &str) -> Self {
        Self::from(raw.to_string())
    }

    /// The text this version was parsed from
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Parsed parts, one per `.`-separated segment
    pub fn parts(&self) -> &[VersionPart] {
        &self.parts
    }

    /// Whether any part carries a tag such as `pre`, `a1` or `b2`
    pub fn is_prerelease(&self) -> bool {
        self.parts.iter().any(VersionPart::is_tagged)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_part_slices(&self.parts, &other.parts)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for Version {}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Version {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Version {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for Version {
    fn from(raw: String) -> Self {
        let parts = raw.split('.').map(VersionPart::parse).collect();
        Self { raw, parts }
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Version::from)
    }
}
