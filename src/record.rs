//! Sample records and the dataset they are loaded from.
//!
//! Records are plain immutable data: equality and hashing are structural,
//! and nothing is mutated after construction.

use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::{DatasetError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Person {
            name: name.into(),
            age,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Person(name={}, age={})", self.name, self.age)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub authors: Vec<String>,
}

impl Book {
    pub fn new<I, S>(title: impl Into<String>, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Book {
            title: title.into(),
            authors: authors.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Book(title={}, authors=[{}])", self.title, self.authors.iter().format(", "))
    }
}

/// A roster of people and a shelf of books.
///
/// The TOML shape is:
///
/// ```toml
/// [[people]]
/// name = "Alice"
/// age = 29
///
/// [[books]]
/// title = "Mort"
/// authors = ["Terry Pratchett"]
/// ```
///
/// JSON uses the same field names. Either section may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub people: Vec<Person>,
    #[serde(default)]
    pub books: Vec<Book>,
}

impl Dataset {
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let dataset: Dataset = toml::from_str(input)?;
        dataset.validated()
    }

    pub fn from_json_str(input: &str) -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(input)?;
        dataset.validated()
    }

    /// The records the lambda chapter snippets work with.
    pub fn sample() -> Self {
        Dataset {
            people: vec![
                Person::new("Alice", 31),
                Person::new("Bob", 29),
                Person::new("Carol", 31),
            ],
            books: vec![
                Book::new("Thursday Next", ["Jasper Fforde"]),
                Book::new("Mort", ["Terry Pratchett"]),
                Book::new("Good Omens", ["Terry Pratchett", "Neil Gaiman"]),
            ],
        }
    }

    fn validated(self) -> Result<Self> {
        if let Some(index) = self.people.iter().position(|p| p.name.trim().is_empty()) {
            return Err(invalid("person", index, "name is blank"));
        }
        if let Some(index) = self.books.iter().position(|b| b.title.trim().is_empty()) {
            return Err(invalid("book", index, "title is blank"));
        }
        if let Some(index) = self.books.iter().position(|b| b.authors.is_empty()) {
            return Err(invalid("book", index, "no authors listed"));
        }
        tracing::debug!(
            people = self.people.len(),
            books = self.books.len(),
            "dataset loaded"
        );
        Ok(self)
    }
}

fn invalid(kind: &'static str, index: usize, reason: &'static str) -> DatasetError {
    tracing::warn!(kind, index, reason, "rejecting dataset");
    DatasetError::InvalidRecord { kind, index, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIBRARY: &str = r#"
        [[people]]
        name = "Alice"
        age = 29

        [[people]]
        name = "Bob"
        age = 31

        [[books]]
        title = "Good Omens"
        authors = ["Terry Pratchett", "Neil Gaiman"]
    "#;

    #[test]
    fn test_person_display() {
        assert_eq!(Person::new("Bob", 31).to_string(), "Person(name=Bob, age=31)");
    }

    #[test]
    fn test_book_display() {
        let book = Book::new("Good Omens", ["Terry Pratchett", "Neil Gaiman"]);
        assert_eq!(
            book.to_string(),
            "Book(title=Good Omens, authors=[Terry Pratchett, Neil Gaiman])"
        );
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(Person::new("Alice", 29), Person::new("Alice", 29));
        assert_ne!(Person::new("Alice", 29), Person::new("Alice", 30));
    }

    #[test]
    fn test_from_toml() {
        let dataset = Dataset::from_toml_str(LIBRARY).unwrap();
        assert_eq!(
            dataset.people,
            vec![Person::new("Alice", 29), Person::new("Bob", 31)]
        );
        assert_eq!(dataset.books.len(), 1);
        assert_eq!(dataset.books[0].authors.len(), 2);
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let dataset = Dataset::from_toml_str("").unwrap();
        assert_eq!(dataset, Dataset::default());
    }

    #[test]
    fn test_from_json() {
        let json = r#"{"people": [{"name": "Carol", "age": 31}]}"#;
        let dataset = Dataset::from_json_str(json).unwrap();
        assert_eq!(dataset.people, vec![Person::new("Carol", 31)]);
        assert!(dataset.books.is_empty());
    }

    #[test]
    fn test_toml_syntax_error() {
        let err = Dataset::from_toml_str("[[people]\nname = 1").unwrap_err();
        assert!(matches!(err, DatasetError::Toml(_)));
    }

    #[test]
    fn test_json_type_error() {
        let err = Dataset::from_json_str(r#"{"people": [{"name": "Bob", "age": "old"}]}"#)
            .unwrap_err();
        assert!(matches!(err, DatasetError::Json(_)));
    }

    #[test]
    fn test_blank_name_rejected() {
        let input = "[[people]]\nname = \"Alice\"\nage = 1\n\n[[people]]\nname = \"  \"\nage = 2\n";
        let err = Dataset::from_toml_str(input).unwrap_err();
        match err {
            DatasetError::InvalidRecord { kind, index, .. } => {
                assert_eq!(kind, "person");
                assert_eq!(index, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_book_without_authors_rejected() {
        let input = "[[books]]\ntitle = \"Anonymous\"\nauthors = []\n";
        let err = Dataset::from_toml_str(input).unwrap_err();
        assert_eq!(err.to_string(), "invalid book at index 0: no authors listed");
    }

    #[test]
    fn test_sample_round_trips_through_json() {
        let sample = Dataset::sample();
        let json = serde_json::to_string(&sample).unwrap();
        assert_eq!(Dataset::from_json_str(&json).unwrap(), sample);
    }
}
