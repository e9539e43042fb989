//! Core trait definitions for the Velella ecosystem.
//!
//! These traits define the contracts that result types implement across
//! crates.

/// A type that can produce a summary of its contents.
pub trait Summarizable {
    /// A one-line summary suitable for display.
    fn summary(&self) -> String;
}
