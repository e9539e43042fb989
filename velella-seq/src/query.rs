//! Query-text extraction.
//!
//! Raw query input arrives as pasted text that may carry a `>`-prefixed
//! header line naming the record, with the sequence body wrapped across
//! several lines. [`parse_query`] strips the header and concatenates the
//! body into a single sequence string ready for composition counting.

use velella_core::{Result, VelellaError};

/// A single extracted query record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryRecord {
    /// Record name from the `>` header line, if one was present.
    pub name: Option<String>,
    /// The concatenated sequence body.
    pub sequence: String,
}

/// Extract a single query record from pasted text.
///
/// Lines are trimmed of surrounding whitespace and blank lines are skipped.
/// A leading `>` line becomes the record name. Exactly one record is
/// allowed: any further `>` header is a parse error. Empty input yields an
/// unnamed record with an empty sequence.
pub fn parse_query(text: &str) -> Result<QueryRecord> {
    let mut name = None;
    let mut sequence = String::new();
    let mut first = true;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(header) = line.strip_prefix('>') {
            if !first {
                return Err(VelellaError::Parse(
                    "query must contain a single record".into(),
                ));
            }
            name = Some(header.trim().to_string());
        } else {
            sequence.push_str(line);
        }
        first = false;
    }

    Ok(QueryRecord { name, sequence })
}
