//! Comprehensive Comparator Examples
//!
//! This example demonstrates various sorting scenarios:
//! - Sorting plain numbers and strings without configuration
//! - Sorting records by a single field
//! - Nested key paths into sub-records
//! - Multi-key tie-breaking
//! - Descending order
//! - Error reporting for malformed data
//!
//! Each scenario includes the expected output as comments.

#[cfg(feature = "std")]
use keysort::prelude::*;

#[cfg(feature = "std")]
fn main() -> Result<(), SortError> {
    println!("{}", "=".repeat(80));
    println!("keysort - Comprehensive Examples");
    println!("{}", "=".repeat(80));
    println!();

    // Run all example scenarios
    example_1_primitives()?;
    example_2_single_key()?;
    example_3_nested_keys()?;
    example_4_multi_key_descending()?;
    example_5_error_reporting()?;

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
/// Example 1: Primitives
/// Numbers and strings sort without any key configuration.
fn example_1_primitives() -> Result<(), SortError> {
    println!("Example 1: Primitives");
    println!("{}", "-".repeat(80));

    let comparator = ComparatorBuilder::new().build()?;

    let mut numbers: Vec<Value> = [7.0, 67.0, 120.0, 1.0, 0.0, 40.0, 42.0]
        .into_iter()
        .map(Value::number)
        .collect();
    comparator.sort(&mut numbers)?;
    println!("Numbers ascending:  {numbers:?}");
    // Expected: 0, 1, 7, 40, 42, 67, 120

    let mut words: Vec<Value> = ["alpha 2", "bravo", "alpha", "charlie", "zulu", "delta"]
        .into_iter()
        .map(Value::from)
        .collect();
    comparator.sort(&mut words)?;
    println!("Strings ascending:  {words:?}");
    // Expected: alpha, alpha 2, bravo, charlie, delta, zulu
    println!();

    Ok(())
}

#[cfg(feature = "std")]
/// Example 2: Single Key
/// Records sort by one configured field.
fn example_2_single_key() -> Result<(), SortError> {
    println!("Example 2: Single Key");
    println!("{}", "-".repeat(80));

    let mut rows: Vec<Value> = [1.0, 10.0, 5.0, 3.0, 20.0]
        .into_iter()
        .map(|id| Value::record([("id", Value::number(id))]))
        .collect();

    let comparator = ComparatorBuilder::new().key("id").build()?;
    comparator.sort(&mut rows)?;

    println!("Records by id:      {rows:?}");
    // Expected: id = 1, 3, 5, 10, 20
    println!();

    Ok(())
}

#[cfg(feature = "std")]
/// Example 3: Nested Keys
/// Dotted paths address fields inside sub-records.
fn example_3_nested_keys() -> Result<(), SortError> {
    println!("Example 3: Nested Keys");
    println!("{}", "-".repeat(80));

    let row = |id: f64, name: &str| {
        Value::record([
            ("id", Value::number(id)),
            ("nested", Value::record([("name", Value::from(name))])),
        ])
    };
    let mut rows = vec![row(1.0, "zulu"), row(2.0, "alpha"), row(3.0, "zulu")];

    let comparator = ComparatorBuilder::new().key("nested.name").build()?;
    comparator.sort(&mut rows)?;

    println!("By nested.name:     {rows:?}");
    // Expected: alpha first, then the two zulu rows in input order
    println!();

    Ok(())
}

#[cfg(feature = "std")]
/// Example 4: Multi-Key Descending
/// Several keys break ties in order, all reversed by direction.
fn example_4_multi_key_descending() -> Result<(), SortError> {
    println!("Example 4: Multi-Key Descending");
    println!("{}", "-".repeat(80));

    let row = |id: f64, name: &str| {
        Value::record([
            ("id", Value::number(id)),
            ("nested", Value::record([("name", Value::from(name))])),
        ])
    };
    let mut rows = vec![row(1.0, "alpha"), row(2.0, "bravo"), row(3.0, "alpha")];

    let comparator = ComparatorBuilder::new()
        .direction(Descending)
        .keys(["nested.name", "id"])
        .build()?;
    comparator.sort(&mut rows)?;

    println!("Descending:         {rows:?}");
    // Expected: bravo, then alpha id=3, then alpha id=1
    println!();

    Ok(())
}

#[cfg(feature = "std")]
/// Example 5: Error Reporting
/// Malformed data fails the sort with a descriptive error.
fn example_5_error_reporting() -> Result<(), SortError> {
    println!("Example 5: Error Reporting");
    println!("{}", "-".repeat(80));

    let comparator = ComparatorBuilder::new().key("id").build()?;

    // Unsupported leaf kinds
    let mut nulls = vec![Value::<f64>::Null, Value::Null];
    match comparator.sort(&mut nulls) {
        Err(e) => println!("Null values:        {e}"),
        Ok(()) => println!("Null values:        unexpectedly sorted"),
    }
    // Expected: Unsupported comparison between Null and Null at depth 0

    // A record missing a configured key
    let mut rows = vec![
        Value::record([("id", Value::number(1.0))]),
        Value::record([("name", Value::from("no id"))]),
    ];
    match comparator.sort(&mut rows) {
        Err(e) => println!("Missing field:      {e}"),
        Ok(()) => println!("Missing field:      unexpectedly sorted"),
    }
    // Expected: Missing field 'id' at depth 0

    // Malformed key paths are caught at build time
    match ComparatorBuilder::new().key("a..b").build() {
        Err(e) => println!("Malformed path:     {e}"),
        Ok(_) => println!("Malformed path:     unexpectedly built"),
    }
    // Expected: Empty key segment at depth 1
    println!();

    Ok(())
}
