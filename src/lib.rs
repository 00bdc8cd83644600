//! # Sequence Queries
//!
//! Declarative traversal operations over ordered sequences of records, the
//! toolbox behind every "filter the people, then map their names" snippet.
//!
//! ## Patterns Covered
//!
//! 1. **Transforming Sequences**
//!    - `filter`, `map`, `map_values`
//!    - Pipelines by composing calls
//!
//! 2. **Predicates over Sequences**
//!    - `all` / `any` (short-circuiting)
//!    - `count` without an intermediate collection
//!    - `find` for the earliest match
//!    - `max_by` with first-of-ties semantics
//!
//! 3. **Grouping**
//!    - `group_by` into an insertion-ordered [`Grouping`]
//!
//! 4. **Flattening Nested Sequences**
//!    - `flat_map`, `flatten`, `to_set`
//!
//! 5. **Fallible Callables**
//!    - `try_*` variants that surface the first error
//!
//! 6. **Parallel Evaluation with Rayon**
//!    - `par_*` variants that agree with the sequential results
//!
//! 7. **Default Methods and Name Collisions** (snippet only)
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --example p1_filter_map
//! cargo run --example p2_predicates
//! cargo run --example p3_group_by
//! cargo run --example p4_flat_map
//! cargo run --example p5_fallible
//! cargo run --example p6_parallel
//! cargo run --example p7_trait_defaults
//!
//! # Show library tracing output
//! RUST_LOG=sequence_queries=trace cargo run --example p3_group_by
//! ```

pub mod error;
pub mod ext;
pub mod fallible;
pub mod grouping;
pub mod parallel;
pub mod query;
pub mod record;

pub use error::DatasetError;
pub use ext::SliceQueryExt;
pub use grouping::{FxIndexMap, Grouping};
pub use record::{Book, Dataset, Person};
