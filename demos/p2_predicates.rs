//! Pattern 2: Predicates over Sequences
//! Example: all, any, count and find
//!
//! Run with: cargo run --example p2_predicates

use colored::Colorize;
use sequence_queries::query::{all, any, count, filter, find};
use sequence_queries::{Dataset, DatasetError, Person};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), DatasetError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .init();

    let people = Dataset::from_toml_str(include_str!("data/library.toml"))?.people;
    let can_be_in_club_27 = |p: &Person| p.age <= 27;

    println!("{}", "=== all / any ===\n".bold());
    println!("Everyone can join club 27? {}", all(&people, can_be_in_club_27));
    println!("Anyone can join club 27?   {}", any(&people, can_be_in_club_27));
    assert!(!all(&people, can_be_in_club_27));
    assert!(any(&people, can_be_in_club_27));

    println!("{}", "\n=== Negation: !all vs any ===".bold());
    let list = vec![1, 2, 3];
    // "not all are 3" reads worse than "some are not 3", but means the same
    let not_all_three = !all(&list, |&x| x == 3);
    let some_not_three = any(&list, |&x| x != 3);
    println!("!all(== 3) = {}", not_all_three);
    println!("any(!= 3)  = {}", some_not_three);
    assert_eq!(not_all_three, some_not_three);

    println!("{}", "\n=== count vs filter().len() ===".bold());
    let counted = count(&people, can_be_in_club_27);
    let filtered = filter(&people, can_be_in_club_27).len();
    println!("count:          {}", counted);
    println!("filter().len(): {} (allocates a Vec first)", filtered);
    assert_eq!(counted, filtered);

    println!("{}", "\n=== find ===".bold());
    match find(&people, can_be_in_club_27) {
        Some(person) => println!("First club 27 member: {}", person.to_string().green()),
        None => println!("{}", "Nobody qualifies".red()),
    }
    let nobody = find(&people, |p| p.age > 100);
    println!("First person over 100: {:?}", nobody);
    assert!(nobody.is_none());

    println!("\n=== Key Points ===");
    println!("1. all is true on an empty sequence, any is false");
    println!("2. Both stop as soon as the answer is known");
    println!("3. count never builds an intermediate collection");
    println!("4. find returns the earliest match or None");
    Ok(())
}
