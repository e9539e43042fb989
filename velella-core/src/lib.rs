//! Shared primitives and traits for the Velella analytics ecosystem.
//!
//! `velella-core` provides the foundation the other Velella crates build on:
//!
//! - **Error types** — [`VelellaError`] and [`Result`] for structured error handling
//! - **Traits** — [`Summarizable`] for one-line display summaries

pub mod error;
pub mod traits;

pub use error::{Result, VelellaError};
pub use traits::*;
