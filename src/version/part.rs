//! Parsing and ordering of a single dot-separated version part
//!
//! A part such as `1pre10a` is split into four fields:
//!
//! ```text
//!   1      pre     10      a
//! num_a   str_b   num_c  extra_d
//! ```
//!
//! Every string parses to some part. A missing tag sorts *after* any present
//! tag, so `1pre` comes before `1`.

use std::cmp::Ordering;

use tracing::trace;

/// `num_a` of the `*` part. Larger than any parsed number except a clamped one.
pub const INFINITY: i64 = i64::MAX;

/// The default part, shared by empty segments and padding
pub(crate) const EMPTY_PART: VersionPart = VersionPart {
    num_a: 0,
    str_b: Tag::Absent,
    num_c: 0,
    extra_d: Tag::Absent,
};

/// Textual field of a [`VersionPart`]
///
/// `Absent` orders after every `Present` value. Present values compare
/// byte-wise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Tag {
    /// A non-empty run of text
    Present(String),
    /// No text at this position
    #[default]
    Absent,
}

impl Tag {
    fn from_text(text: &str) -> Self {
        if text.is_empty() {
            Tag::Absent
        } else {
            Tag::Present(text.to_string())
        }
    }

    /// Returns the text, or `None` when absent
    pub fn as_deref(&self) -> Option<&str> {
        match self {
            Tag::Present(text) => Some(text),
            Tag::Absent => None,
        }
    }

    /// Whether there is text at this position
    pub fn is_present(&self) -> bool {
        matches!(self, Tag::Present(_))
    }
}

impl Ord for Tag {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Tag::Present(a), Tag::Present(b)) => a.as_bytes().cmp(b.as_bytes()),
            (Tag::Present(_), Tag::Absent) => Ordering::Less,
            (Tag::Absent, Tag::Present(_)) => Ordering::Greater,
            (Tag::Absent, Tag::Absent) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Tag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One parsed segment of a version string
///
/// Fields are private so that the parser's invariants hold for every value:
/// tags are never empty. A part like `1-2` has no tag text before its second
/// number, so an absent `str_b` may still carry `num_c` and `extra_d`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct VersionPart {
    num_a: i64,
    str_b: Tag,
    num_c: i64,
    extra_d: Tag,
}

impl VersionPart {
    /// Parse one segment. Never fails.
    ///
    /// Examples:
    /// - "" -> (0, -, 0, -)
    /// - "*" -> (i64::MAX, -, 0, -)
    /// - "5" -> (5, -, 0, -)
    /// - "1pre10a" -> (1, "pre", 10, "a")
    /// - "1+" -> (2, "pre", 0, -)
    pub fn parse(part: &str) -> Self {
        if part.is_empty() {
            return EMPTY_PART;
        }
        if part == "*" {
            return Self {
                num_a: INFINITY,
                ..EMPTY_PART
            };
        }

        let (num_a, rest) = split_leading_int(part);

        // "1+" is the first pre-release of 2
        if rest == "+" {
            return Self {
                num_a: num_a.saturating_add(1),
                str_b: Tag::Present("pre".to_string()),
                ..EMPTY_PART
            };
        }

        match rest.find(|c: char| c.is_ascii_digit() || c == '+' || c == '-') {
            None => Self {
                num_a,
                str_b: Tag::from_text(rest),
                ..EMPTY_PART
            },
            Some(index) => {
                let (tag, tail) = rest.split_at(index);
                let (num_c, extra) = split_leading_int(tail);
                Self {
                    num_a,
                    str_b: Tag::from_text(tag),
                    num_c,
                    extra_d: Tag::from_text(extra),
                }
            }
        }
    }

    /// Leading number
    pub fn num_a(&self) -> i64 {
        self.num_a
    }

    /// Tag after the leading number
    pub fn str_b(&self) -> Option<&str> {
        self.str_b.as_deref()
    }

    /// Number following the tag
    pub fn num_c(&self) -> i64 {
        self.num_c
    }

    /// Text after the second number
    pub fn extra_d(&self) -> Option<&str> {
        self.extra_d.as_deref()
    }

    /// All four fields in order, with absent tags as `None`
    pub fn as_tuple(&self) -> (i64, Option<&str>, i64, Option<&str>) {
        (self.num_a, self.str_b(), self.num_c, self.extra_d())
    }

    /// Whether this part carries a tag, e.g. `0b2` or `1pre`
    pub fn is_tagged(&self) -> bool {
        self.str_b.is_present()
    }
}

impl Ord for VersionPart {
    fn cmp(&self, other: &Self) -> Ordering {
        self.num_a
            .cmp(&other.num_a)
            .then_with(|| self.str_b.cmp(&other.str_b))
            .then_with(|| self.num_c.cmp(&other.num_c))
            .then_with(|| self.extra_d.cmp(&other.extra_d))
    }
}

impl PartialOrd for VersionPart {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<&str> for VersionPart {
    fn from(part: &str) -> Self {
        Self::parse(part)
    }
}

/// Parse a single version part
pub fn parse_part(part: &str) -> VersionPart {
    VersionPart::parse(part)
}

/// Compare two parsed parts
pub fn compare_parts(left: &VersionPart, right: &VersionPart) -> Ordering {
    left.cmp(right)
}

/// Split off the longest prefix matching `[+-]?[0-9]*` and return its value
/// with the remaining text. A prefix without digits is worth 0.
fn split_leading_int(text: &str) -> (i64, &str) {
    let bytes = text.as_bytes();
    let sign_len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digit_len = bytes[sign_len..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();

    // The prefix is ASCII, so the split lands on a char boundary
    let (number, rest) = text.split_at(sign_len + digit_len);
    if digit_len == 0 {
        return (0, rest);
    }

    // Only overflow can fail here
    let value = number.parse::<i64>().unwrap_or_else(|_| {
        let clamped = if number.starts_with('-') {
            i64::MIN
        } else {
            i64::MAX
        };
        trace!("Clamping out-of-range number '{}' to {}", number, clamped);
        clamped
    });
    (value, rest)
}
