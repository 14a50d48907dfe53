#![cfg(feature = "dev")]
//! Tests for the recursive comparison engine.
//!
//! These tests exercise the comparer directly, below the public API:
//! - Case-insensitive string comparison
//! - Kind dispatch and unsupported pairings
//! - Record key resolution order and depth tracking
//! - Direction application at leaves
//!
//! ## Test Organization
//!
//! 1. **String Folding** - Case folding, prefixes, non-ASCII behavior
//! 2. **Kind Dispatch** - Numbers, strings, unsupported kinds
//! 3. **Record Comparison** - Key order, presence scan, depth tracking
//! 4. **Direction** - Leaf application through nested records

use std::cmp::Ordering;

use keysort::internals::engine::compare::{compare_case_insensitive, ValueComparer};
use keysort::internals::primitives::direction::SortDirection;
use keysort::internals::primitives::errors::SortError;
use keysort::internals::primitives::keyspec::KeySpec;
use keysort::internals::primitives::value::{Value, ValueKind};

// ============================================================================
// Helper Functions
// ============================================================================

fn keys_of(paths: &[&str]) -> KeySpec {
    let mut keys = KeySpec::new();
    for path in paths {
        keys.add_path(path);
    }
    keys
}

// ============================================================================
// String Folding Tests
// ============================================================================

/// Test case folding produces ties.
///
/// Verifies that strings differing only in ASCII case compare equal.
#[test]
fn test_fold_equal_strings() {
    assert_eq!(compare_case_insensitive("Alpha", "alpha"), Ordering::Equal);
    assert_eq!(compare_case_insensitive("ALPHA", "alpha"), Ordering::Equal);
    assert_eq!(compare_case_insensitive("", ""), Ordering::Equal);
}

/// Test folded lexicographic ordering.
///
/// Verifies that ordering ignores case rather than grouping by it.
#[test]
fn test_fold_orders_across_case() {
    assert_eq!(compare_case_insensitive("apple", "Zebra"), Ordering::Less);
    assert_eq!(compare_case_insensitive("Zebra", "apple"), Ordering::Greater);
    assert_eq!(compare_case_insensitive("Mango", "apple"), Ordering::Greater);
}

/// Test prefix ordering.
///
/// Verifies that a string precedes any of its extensions.
#[test]
fn test_fold_prefix_precedes_extension() {
    assert_eq!(compare_case_insensitive("alpha", "alpha 2"), Ordering::Less);
    assert_eq!(compare_case_insensitive("alpha 2", "alphabet"), Ordering::Less);
    assert_eq!(compare_case_insensitive("", "a"), Ordering::Less);
}

/// Test non-ASCII characters.
///
/// Verifies that only ASCII letters fold; other characters compare by
/// code point.
#[test]
fn test_fold_non_ascii_by_code_point() {
    // U+00E9 sorts after every ASCII letter
    assert_eq!(compare_case_insensitive("r\u{e9}sum\u{e9}", "resume"), Ordering::Greater);
    assert_eq!(compare_case_insensitive("\u{e9}", "\u{e9}"), Ordering::Equal);
}

// ============================================================================
// Kind Dispatch Tests
// ============================================================================

/// Test numeric comparison.
///
/// Verifies ordering of finite values and infinities.
#[test]
fn test_compare_numbers() {
    let keys = KeySpec::new();
    let comparer = ValueComparer::new(SortDirection::Ascending, &keys);

    assert_eq!(
        comparer
            .compare(&Value::number(1.0), &Value::number(2.0))
            .expect("compare ok"),
        Ordering::Less
    );
    assert_eq!(
        comparer
            .compare(&Value::number(f64::NEG_INFINITY), &Value::number(1.0))
            .expect("compare ok"),
        Ordering::Less
    );
    assert_eq!(
        comparer
            .compare(&Value::number(f64::INFINITY), &Value::number(1.0))
            .expect("compare ok"),
        Ordering::Greater
    );
}

/// Test NaN pairs tie.
///
/// Verifies the NaN fallback in both operand positions.
#[test]
fn test_compare_nan_ties() {
    let keys = KeySpec::new();
    let comparer = ValueComparer::new(SortDirection::Ascending, &keys);

    assert_eq!(
        comparer
            .compare(&Value::number(f64::NAN), &Value::number(1.0))
            .expect("compare ok"),
        Ordering::Equal
    );
    assert_eq!(
        comparer
            .compare(&Value::number(1.0), &Value::number(f64::NAN))
            .expect("compare ok"),
        Ordering::Equal
    );
    assert_eq!(
        comparer
            .compare(&Value::number(f64::NAN), &Value::number(f64::NAN))
            .expect("compare ok"),
        Ordering::Equal
    );
}

/// Test unsupported pairings report both kinds.
///
/// Verifies the kinds appear in operand order at depth 0.
#[test]
fn test_unsupported_kind_pairings() {
    let keys = KeySpec::new();
    let comparer = ValueComparer::new(SortDirection::Ascending, &keys);

    let err = comparer
        .compare(&Value::<f64>::from("alpha"), &Value::number(1.0))
        .unwrap_err();
    assert_eq!(
        err,
        SortError::UnsupportedType {
            lhs: ValueKind::Str,
            rhs: ValueKind::Number,
            depth: 0,
        }
    );

    let err = comparer
        .compare(&Value::<f64>::Null, &Value::from(true))
        .unwrap_err();
    assert_eq!(
        err,
        SortError::UnsupportedType {
            lhs: ValueKind::Null,
            rhs: ValueKind::Bool,
            depth: 0,
        }
    );
}

// ============================================================================
// Record Comparison Tests
// ============================================================================

/// Test records tie when every key ties.
///
/// Verifies the all-keys-equal outcome.
#[test]
fn test_records_tie_on_all_keys() {
    let keys = keys_of(&["name", "score"]);
    let comparer = ValueComparer::new(SortDirection::Ascending, &keys);

    let a = Value::record([
        ("name", Value::from("Alpha")),
        ("score", Value::number(1.0)),
    ]);
    let b = Value::record([
        ("name", Value::from("alpha")),
        ("score", Value::number(1.0)),
    ]);

    assert_eq!(comparer.compare(&a, &b).expect("compare ok"), Ordering::Equal);
}

/// Test the first decisive key wins.
///
/// Verifies that later keys are irrelevant once a key decides.
#[test]
fn test_first_decisive_key_wins() {
    let keys = keys_of(&["name", "score"]);
    let comparer = ValueComparer::new(SortDirection::Ascending, &keys);

    let a = Value::record([
        ("name", Value::from("alpha")),
        ("score", Value::number(9.0)),
    ]);
    let b = Value::record([
        ("name", Value::from("bravo")),
        ("score", Value::number(1.0)),
    ]);

    assert_eq!(
        comparer.compare(&a, &b).expect("compare ok"),
        Ordering::Less,
        "Name decides before score is consulted"
    );
}

/// Test NaN ties fall through to the next key.
///
/// Verifies that a NaN tie on the first key is an exact tie.
#[test]
fn test_nan_tie_falls_to_next_key() {
    let keys = keys_of(&["score", "name"]);
    let comparer = ValueComparer::new(SortDirection::Ascending, &keys);

    let a = Value::record([
        ("score", Value::number(f64::NAN)),
        ("name", Value::from("alpha")),
    ]);
    let b = Value::record([
        ("score", Value::number(1.0)),
        ("name", Value::from("bravo")),
    ]);

    assert_eq!(
        comparer.compare(&a, &b).expect("compare ok"),
        Ordering::Less,
        "NaN tie on score should fall through to name"
    );
}

/// Test missing keys are reported in key order.
///
/// Verifies that the first missing key in tie-breaking order is named.
#[test]
fn test_missing_key_reported_in_key_order() {
    let keys = keys_of(&["k1", "k2", "k3"]);
    let comparer = ValueComparer::new(SortDirection::Ascending, &keys);

    let partial = Value::record([("k1", Value::number(1.0))]);
    let err = comparer.compare(&partial, &partial.clone()).unwrap_err();

    assert_eq!(
        err,
        SortError::MissingField {
            field: "k2".to_string(),
            depth: 0,
        }
    );
}

/// Test comparison at an explicit depth.
///
/// Verifies that `compare_at` consults the key set for that depth.
#[test]
fn test_compare_at_explicit_depth() {
    let keys = keys_of(&["a.b"]);
    let comparer = ValueComparer::new(SortDirection::Ascending, &keys);

    let lhs = Value::record([("b", Value::number(1.0))]);
    let rhs = Value::record([("b", Value::number(2.0))]);

    // Depth 1 keys are {b}, so these records compare directly.
    assert_eq!(
        comparer.compare_at(&lhs, &rhs, 1).expect("compare ok"),
        Ordering::Less
    );

    // Depth 0 keys are {a}, which neither record carries.
    assert_eq!(
        comparer.compare_at(&lhs, &rhs, 0).unwrap_err(),
        SortError::MissingField {
            field: "a".to_string(),
            depth: 0,
        }
    );
}

/// Test depth grows through nesting.
///
/// Verifies that errors inside nested records carry the nested depth.
#[test]
fn test_depth_grows_through_nesting() {
    let keys = keys_of(&["outer.inner"]);
    let comparer = ValueComparer::new(SortDirection::Ascending, &keys);

    let a = Value::record([(
        "outer",
        Value::record([("inner", Value::number(1.0))]),
    )]);
    let b = Value::record([(
        "outer",
        Value::record([("inner", Value::from("text"))]),
    )]);

    assert_eq!(
        comparer.compare(&a, &b).unwrap_err(),
        SortError::UnsupportedType {
            lhs: ValueKind::Number,
            rhs: ValueKind::Str,
            depth: 2,
        },
        "The mismatch sits two descents below the top level"
    );
}

/// Test empty key specification.
///
/// Verifies that record pairs error without any configured keys.
#[test]
fn test_records_need_configured_keys() {
    let keys = KeySpec::new();
    let comparer = ValueComparer::new(SortDirection::Ascending, &keys);

    let a = Value::record([("x", Value::number(1.0))]);
    let err = comparer.compare(&a, &a.clone()).unwrap_err();

    assert_eq!(err, SortError::NoKeysConfigured { depth: 0 });
}

// ============================================================================
// Direction Tests
// ============================================================================

/// Test descending reverses leaves.
///
/// Verifies reversal for plain numbers and strings.
#[test]
fn test_descending_reverses_leaves() {
    let keys = KeySpec::new();
    let comparer = ValueComparer::new(SortDirection::Descending, &keys);

    assert_eq!(
        comparer
            .compare(&Value::number(1.0), &Value::number(2.0))
            .expect("compare ok"),
        Ordering::Greater
    );
    assert_eq!(
        comparer
            .compare(&Value::<f64>::from("alpha"), &Value::from("bravo"))
            .expect("compare ok"),
        Ordering::Greater
    );
}

/// Test descending flows through records.
///
/// Verifies that record outcomes reverse because their leaves reverse.
#[test]
fn test_descending_flows_through_records() {
    let keys = keys_of(&["name"]);
    let comparer = ValueComparer::new(SortDirection::Descending, &keys);

    let a: Value = Value::record([("name", Value::from("alpha"))]);
    let b: Value = Value::record([("name", Value::from("bravo"))]);

    assert_eq!(comparer.compare(&a, &b).expect("compare ok"), Ordering::Greater);
}
