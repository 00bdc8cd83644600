//! Pattern 5: Fallible Callables
//! Example: try_* queries that surface the first error
//!
//! Run with: cargo run --example p5_fallible

use colored::Colorize;
use sequence_queries::fallible::{try_count, try_filter, try_find, try_group_by, try_map};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Error, Debug, PartialEq)]
enum AgeError {
    #[error("'{0}' is not an age")]
    NotANumber(String),
    #[error("age {0} is out of range")]
    OutOfRange(u32),
}

/// A raw "name:age" entry, as it might arrive from a form.
fn parse_age(entry: &&str) -> Result<u32, AgeError> {
    let raw = entry.rsplit(':').next().unwrap_or_default().trim();
    let age: u32 = raw.parse().map_err(|_| AgeError::NotANumber(raw.to_string()))?;
    if age > 150 {
        return Err(AgeError::OutOfRange(age));
    }
    Ok(age)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .init();

    println!("{}", "=== All entries valid ===\n".bold());
    let entries = vec!["Alice:29", "Bob:31", "Carol:31"];

    let ages = try_map(&entries, parse_age);
    println!("try_map(parse_age) = {:?}", ages);
    assert_eq!(ages, Ok(vec![29, 31, 31]));

    let over_30 = try_filter(&entries, |e| parse_age(e).map(|age| age > 30));
    println!("try_filter(age > 30) = {:?}", over_30);

    let by_age = try_group_by(&entries, parse_age);
    match &by_age {
        Ok(grouping) => println!("try_group_by(age) = {}", grouping),
        Err(e) => println!("{}", e.to_string().red()),
    }

    println!("{}", "\n=== The first bad entry stops the pass ===".bold());
    let broken = vec!["Alice:29", "Bob:thirty", "Carol:200"];

    match try_count(&broken, |e| parse_age(e).map(|age| age > 30)) {
        Ok(n) => println!("count = {}", n),
        Err(e) => println!("try_count failed: {}", e.to_string().red()),
    }
    // Bob comes before Carol, so his error is the one reported
    assert_eq!(
        try_map(&broken, parse_age),
        Err(AgeError::NotANumber("thirty".to_string()))
    );

    println!("{}", "\n=== An error before the match wins ===".bold());
    let found = try_find(&broken, |e| parse_age(e).map(|age| age > 100));
    println!("try_find(age > 100) = {:?}", found);
    assert!(found.is_err());

    let found = try_find(&broken, |e| parse_age(e).map(|age| age < 30));
    println!("try_find(age < 30)  = {:?}", found);
    assert_eq!(found, Ok(Some(&"Alice:29")));

    println!("\n=== Key Points ===");
    println!("1. Callables return Result; the query returns Result too");
    println!("2. The first Err is returned as-is and evaluation stops");
    println!("3. Nothing is retried or swallowed");
}
