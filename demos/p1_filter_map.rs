//! Pattern 1: Transforming Sequences
//! Example: filter, map, map_values and max_by
//!
//! Run with: cargo run --example p1_filter_map

use colored::Colorize;
use indexmap::IndexMap;
use sequence_queries::query::{filter, map, map_values, max_by};
use sequence_queries::{Dataset, DatasetError, Person};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), DatasetError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .init();

    println!("{}", "=== filter and map on numbers ===\n".bold());

    let list = vec![1, 2, 3, 4];
    let evens = filter(&list, |x| x % 2 == 0);
    println!("filter([1, 2, 3, 4], even) = {:?}", evens);
    assert_eq!(evens, vec![2, 4]);

    let squares = map(&list, |x| x * x);
    println!("map([1, 2, 3, 4], square) = {:?}", squares);
    assert_eq!(squares, vec![1, 4, 9, 16]);

    println!("{}", "\n=== filter then map on people ===".bold());
    let people = vec![Person::new("Alice", 29), Person::new("Bob", 31)];

    let over_30 = filter(&people, |p| p.age > 30);
    println!("People over 30: {:?}", map(&over_30, |p| p.to_string()));

    // The pipeline is just one call feeding the next
    let names = map(&over_30, |p| p.name.clone());
    println!("Their names: {:?}", names);
    assert_eq!(names, vec!["Bob".to_string()]);

    println!("{}", "\n=== Oldest people from the roster ===".bold());
    let dataset = Dataset::from_toml_str(include_str!("data/library.toml"))?;

    // Compute the maximum once, not once per element
    let max_age = max_by(&dataset.people, |p| p.age).map(|p| p.age);
    println!("Max age: {:?}", max_age);
    let oldest = filter(&dataset.people, |p| Some(p.age) == max_age);
    for person in &oldest {
        println!("  {}", person);
    }

    let first_oldest = max_by(&dataset.people, |p| p.age);
    println!(
        "max_by picks the first of the tie: {}",
        first_oldest.map(|p| p.name.as_str()).unwrap_or("<nobody>").green()
    );

    println!("{}", "\n=== map_values ===".bold());
    let mut numbers: IndexMap<i32, &str> = IndexMap::new();
    numbers.insert(0, "zero");
    numbers.insert(1, "one");
    let upper = map_values(&numbers, |v| v.to_uppercase());
    println!("{:?}", upper);
    assert_eq!(upper.get(&1).map(String::as_str), Some("ONE"));

    println!("\n=== Key Points ===");
    println!("1. filter keeps the order of the elements it keeps");
    println!("2. map produces exactly one output per input");
    println!("3. map_values keeps every key and its position");
    println!("4. max_by returns the earliest element among tied maxima");
    Ok(())
}
