use std::cmp::Ordering;

use proptest::prelude::*;
use rstest::rstest;
use toolkit_version::{Version, compare, compare_spaceship, parse_part};

/// A part drawn from the shapes real versions use: numbers, tags, trailing
/// text, plus suffixes and the star
fn part_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("*".to_string()),
        Just(String::new()),
        "[+-]?[0-9]{0,3}",
        "[0-9]{1,3}\\+",
        "[0-9]{0,3}(pre|a|b|rc|[a-z+ ]{1,3})([+-]?[0-9]{0,3}[a-z]{0,2})?",
    ]
}

fn version_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(part_strategy(), 1..5).prop_map(|parts| parts.join("."))
}

#[rstest]
#[case::s1("1", "2", -1)]
#[case::s2("1.0pre1", "1.0pre2", -1)]
#[case::s3("1.0", "1.0.0", 0)]
#[case::s4("1.1pre", "1.1pre0", 0)]
#[case::s5("1.1pre0", "1.0+", 0)]
#[case::s6("1.0+", "1.1pre1a", -1)]
#[case::s7("1.1pre10a", "1.*", -1)]
fn end_to_end_scenarios(#[case] left: &str, #[case] right: &str, #[case] expected: i32) {
    assert_eq!(compare_spaceship(left, right), expected);
    assert_eq!(compare_spaceship(right, left), -expected);
}

#[rstest]
#[case("", "", Ordering::Equal)]
#[case("", "0", Ordering::Equal)]
#[case("1", "", Ordering::Greater)]
#[case("*", "999999", Ordering::Greater)]
#[case("1.0pre2", "1.0", Ordering::Less)]
#[case("1.1pre10a", "1.1pre10", Ordering::Less)]
#[case("   ", "0", Ordering::Less)]
#[case("1.\0", "1", Ordering::Less)]
#[case("1.ü", "1.u", Ordering::Greater)]
#[case("1+10", "1+9", Ordering::Greater)]
#[case("1-10", "1-9", Ordering::Less)]
#[case("1+2", "1", Ordering::Greater)]
#[case("1.0-beta", "1.0", Ordering::Less)]
fn edge_cases(#[case] left: &str, #[case] right: &str, #[case] expected: Ordering) {
    assert_eq!(compare(left, right), expected);
}

#[test]
fn part_laws() {
    assert_eq!(parse_part(""), parse_part("0"));
    assert_eq!(parse_part("*").as_tuple(), (i64::MAX, None, 0, None));
    assert_eq!(parse_part("1pre10a").as_tuple(), (1, Some("pre"), 10, Some("a")));
    assert_eq!(parse_part("1+").as_tuple(), (2, Some("pre"), 0, None));
}

#[test]
fn sorting_a_release_history() {
    let mut versions: Vec<Version> = [
        "3.6", "3.5.19", "3.6b1", "4.0", "3.6a1", "3.6.28", "4.0b12", "3.5", "3.6pre", "3.*",
        "3.5+",
    ]
    .into_iter()
    .map(Version::parse)
    .collect();

    versions.sort();

    // 3.5+ equals 3.6pre, and the sort is stable
    let sorted: Vec<&str> = versions.iter().map(Version::as_str).collect();
    assert_eq!(
        sorted,
        [
            "3.5", "3.5.19", "3.6a1", "3.6b1", "3.6pre", "3.5+", "3.6", "3.6.28", "3.*", "4.0b12",
            "4.0",
        ]
    );
}

proptest! {
    #[test]
    fn compare_is_reflexive(a in any::<String>()) {
        prop_assert_eq!(compare(&a, &a), Ordering::Equal);
    }

    #[test]
    fn compare_is_reflexive_on_versions(a in version_strategy()) {
        prop_assert_eq!(compare(&a, &a), Ordering::Equal);
    }

    #[test]
    fn compare_is_antisymmetric(a in version_strategy(), b in version_strategy()) {
        prop_assert_eq!(compare(&a, &b), compare(&b, &a).reverse());
    }

    #[test]
    fn compare_is_antisymmetric_on_arbitrary_strings(a in any::<String>(), b in any::<String>()) {
        prop_assert_eq!(compare(&a, &b), compare(&b, &a).reverse());
    }

    #[test]
    fn compare_is_transitive(
        a in version_strategy(),
        b in version_strategy(),
        c in version_strategy(),
    ) {
        if compare(&a, &b).is_le() && compare(&b, &c).is_le() {
            prop_assert!(compare(&a, &c).is_le());
        }
    }

    #[test]
    fn sorted_versions_are_pairwise_ordered(versions in prop::collection::vec(version_strategy(), 0..12)) {
        let mut versions = versions;
        versions.sort_by(|a, b| compare(a, b));

        for (i, earlier) in versions.iter().enumerate() {
            for later in &versions[i + 1..] {
                prop_assert!(compare(earlier, later).is_le(), "{:?} > {:?}", earlier, later);
            }
        }
    }

    #[test]
    fn zero_padding_does_not_change_order(a in version_strategy(), k in 1usize..5) {
        let padded = format!("{}{}", a, ".0".repeat(k));
        prop_assert_eq!(compare(&a, &padded), Ordering::Equal);
    }

    #[test]
    fn star_is_never_below_a_single_part(a in "[^.*]{0,8}") {
        prop_assert!(compare("*", &a).is_ge());
    }

    #[test]
    fn star_dominates_after_common_prefix(prefix in version_strategy(), last in "[^.*]{0,8}") {
        let star = format!("{prefix}.*");
        let other = format!("{prefix}.{last}");
        prop_assert!(compare(&star, &other).is_ge());
    }

    #[test]
    fn plus_suffix_is_next_prerelease(n in 0u32..1_000_000) {
        let plus = format!("{n}+");
        let pre = format!("{}pre", u64::from(n) + 1);
        prop_assert_eq!(compare(&plus, &pre), Ordering::Equal);
    }

    #[test]
    fn prerelease_comes_before_release(n in 0u32..1_000_000) {
        prop_assert_eq!(compare(&format!("{n}pre"), &n.to_string()), Ordering::Less);
    }

    #[test]
    fn version_order_matches_compare(a in version_strategy(), b in version_strategy()) {
        prop_assert_eq!(Version::parse(&a).cmp(&Version::parse(&b)), compare(&a, &b));
    }
}
