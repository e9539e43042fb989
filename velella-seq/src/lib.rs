//! Sequence composition analysis for the Velella analytics ecosystem.
//!
//! Counts the symbol composition of query sequences:
//!
//! - **Composition counting** — [`count_symbols`] and the ordered [`Composition`] table
//! - **Query extraction** — [`parse_query`] for pasted query text with `>` headers
//!
//! # Example
//!
//! ```
//! use velella_seq::{count_symbols, parse_query};
//!
//! let record = parse_query(">query\nGAACAC").unwrap();
//! let composition = count_symbols(&record.sequence);
//! assert_eq!(composition.get('A'), 3);
//! assert_eq!(composition.rows(), vec![('A', 3), ('C', 2), ('G', 1)]);
//! ```

pub mod composition;
pub mod query;

pub use composition::{count_symbols, Composition};
pub use query::{parse_query, QueryRecord};
