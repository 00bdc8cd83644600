//! Pattern 3: Grouping
//! Example: group_by with first-occurrence key order
//!
//! Run with: cargo run --example p3_group_by

use colored::Colorize;
use sequence_queries::query::group_by;
use sequence_queries::{Dataset, DatasetError, Person};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), DatasetError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .init();

    println!("{}", "=== Group people by age ===\n".bold());
    let people = vec![
        Person::new("Alice", 31),
        Person::new("Bob", 29),
        Person::new("Carol", 31),
    ];
    let by_age = group_by(&people, |p| p.age);
    println!("{}", by_age);
    // 31 was seen first, so it comes first
    let keys: Vec<u32> = by_age.keys().copied().collect();
    assert_eq!(keys, vec![31, 29]);

    println!("{}", "\n=== Group strings by first character ===".bold());
    let list = vec!["a", "ab", "b"];
    let by_initial = group_by(&list, |s| s.chars().next().unwrap_or(' '));
    println!("{}", by_initial);
    assert_eq!(by_initial.get(&'a'), Some(&["a", "ab"][..]));

    println!("{}", "\n=== Group sizes from the roster ===".bold());
    let roster = Dataset::from_toml_str(include_str!("data/library.toml"))?.people;
    let grouped = group_by(&roster, |p| p.age);
    for (age, size) in grouped.group_sizes() {
        println!("  age {}: {} {}", age.to_string().cyan(), size, if size == 1 { "person" } else { "people" });
    }

    println!("{}", "\n=== As JSON ===".bold());
    let names = grouped.map_values(|group| group.iter().map(|p| p.name.clone()).collect::<Vec<_>>());
    match serde_json::to_string(&names) {
        Ok(json) => println!("{}", json),
        Err(e) => println!("{}", format!("could not serialize: {}", e).red()),
    }

    println!("\n=== Key Points ===");
    println!("1. Keys keep the order in which they were first seen");
    println!("2. Each group keeps the original relative order");
    println!("3. A key only exists if at least one element produced it");
    println!("4. Concatenating the groups gives back every element");
    Ok(())
}
