//! Pattern 4: Flattening Nested Sequences
//! Example: flat_map, flatten and to_set
//!
//! Run with: cargo run --example p4_flat_map

use colored::Colorize;
use itertools::Itertools;
use sequence_queries::query::{flat_map, flatten, map, to_set};
use sequence_queries::{Dataset, DatasetError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), DatasetError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .init();

    println!("{}", "=== flat_map strings into characters ===\n".bold());
    let strings = vec!["abc", "def"];
    let chars = flat_map(&strings, |s| s.chars().collect::<Vec<_>>());
    println!("{:?}", chars);
    assert_eq!(chars, vec!['a', 'b', 'c', 'd', 'e', 'f']);

    println!("{}", "\n=== Every author, then the distinct ones ===".bold());
    let books = Dataset::from_toml_str(include_str!("data/library.toml"))?.books;
    let all_authors = flat_map(&books, |b| b.authors.clone());
    println!("flat_map: {:?}", all_authors);
    assert_eq!(all_authors.len(), 4);

    let distinct = to_set(&all_authors);
    // sets have no order; sort only for a stable printout
    println!("to_set:   {{{}}}", distinct.iter().sorted().join(", "));
    assert_eq!(distinct.len(), 3);

    println!("{}", "\n=== flatten ===".bold());
    let nested = map(&books, |b| b.authors.clone());
    let flat = flatten(&nested);
    println!("{:?} -> {:?}", nested, flat);
    assert_eq!(flat, all_authors);

    println!("\n=== Key Points ===");
    println!("1. flat_map = map + flatten, order kept at both levels");
    println!("2. Duplicates survive flat_map; to_set removes them");
    println!("3. flatten is flat_map with the identity projection");
    Ok(())
}
