//! Pattern 6: Parallel Evaluation with Rayon
//! Example: par_* queries agree with the sequential ones
//!
//! Run with: cargo run --example p6_parallel

use std::time::Instant;

use colored::Colorize;
use sequence_queries::parallel::{par_all, par_any, par_count, par_filter, par_find, par_map, par_max_by};
use sequence_queries::query::{count, filter, find, map, max_by};
use sequence_queries::Person;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .init();

    println!("{}", "=== A large roster ===\n".bold());
    let people: Vec<Person> = (0..200_000u32)
        .map(|i| Person::new(format!("person-{}", i), (i * 37) % 90))
        .collect();
    println!("{} people on {} threads", people.len(), rayon::current_num_threads());

    println!("{}", "\n=== Same answers, sequential vs parallel ===".bold());
    let adult = |p: &Person| p.age >= 18;

    let start = Instant::now();
    let seq_adults = filter(&people, adult);
    let seq_time = start.elapsed();
    let start = Instant::now();
    let par_adults = par_filter(&people, adult);
    let par_time = start.elapsed();
    println!("filter:  {} adults (sequential {:?}, parallel {:?})", seq_adults.len(), seq_time, par_time);
    assert_eq!(seq_adults, par_adults);

    assert_eq!(count(&people, adult), par_count(&people, adult));
    assert_eq!(map(&people, |p| p.age), par_map(&people, |p| p.age));
    println!("count and map: {}", "identical".green());

    println!("{}", "\n=== Order-sensitive answers ===".bold());
    let first_89 = find(&people, |p| p.age == 89);
    let par_first_89 = par_find(&people, |p| p.age == 89);
    println!("first aged 89: {:?}", par_first_89.map(|p| p.name.as_str()));
    assert_eq!(first_89, par_first_89);

    let oldest = max_by(&people, |p| p.age);
    let par_oldest = par_max_by(&people, |p| p.age);
    println!("max_by age: {:?}", par_oldest.map(|p| p.to_string()));
    assert_eq!(oldest, par_oldest);

    println!("{}", "\n=== Short-circuiting ===".bold());
    println!("anyone over 100? {}", par_any(&people, |p| p.age > 100));
    println!("everyone under 90? {}", par_all(&people, |p| p.age < 90));

    println!("\n=== Key Points ===");
    println!("1. par_find uses find_first: the earliest match, like find");
    println!("2. par_max_by keeps the earliest of tied maxima, like max_by");
    println!("3. Callables must be Sync + Send and should be pure");
    println!("4. Parallelism pays off only for large inputs");
}
