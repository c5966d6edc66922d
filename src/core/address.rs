//! Sequence addresses of the form `DB:ID` or `DB:ID[START:STOP]`.
//!
//! `DB` and `ID` are non-empty runs of ASCII letters, digits and `_`.
//! `START` and `STOP` are optional unsigned decimal integers written in the
//! database's 1-based inclusive convention; either or both may be left empty,
//! and the bracket group itself is optional.

use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::core::sequence::Sequence;
use crate::utils::validation::is_valid_name;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("Invalid address: '{0}' (expected DB:ID or DB:ID[START:STOP])")]
    Invalid(String),
}

/// A database name, record id and optional subrange, plus the sequence once resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    /// Database name, identical to the database's directory name
    pub database: String,

    /// Record id within the database index
    pub id: String,

    /// START as written (1-based)
    #[serde(skip_serializing_if = "Option::is_none")]
    start: Option<u64>,

    /// STOP as written
    #[serde(skip_serializing_if = "Option::is_none")]
    stop: Option<u64>,

    /// Bases, set once the address has been resolved against a catalog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<Sequence>,
}

impl Address {
    /// Create an address from its components, with `start` and `stop` in the
    /// external 1-based convention.
    pub fn new(
        database: impl Into<String>,
        id: impl Into<String>,
        start: Option<u64>,
        stop: Option<u64>,
    ) -> Self {
        Self {
            database: database.into(),
            id: id.into(),
            start,
            stop,
            sequence: None,
        }
    }

    /// Attach resolved bases to this address
    #[must_use]
    pub fn with_sequence(mut self, sequence: impl Into<Sequence>) -> Self {
        self.sequence = Some(sequence.into());
        self
    }

    /// Internal 0-based start: START minus one when START is greater than zero.
    #[must_use]
    pub fn start(&self) -> Option<u64> {
        self.start.map(|start| start.saturating_sub(1))
    }

    /// STOP exactly as written. It is used as an exclusive bound when slicing.
    #[must_use]
    pub fn stop(&self) -> Option<u64> {
        self.stop
    }

    /// START as written in the address text (1-based)
    #[must_use]
    pub fn external_start(&self) -> Option<u64> {
        self.start
    }

    /// True when the address carries a subrange
    #[must_use]
    pub fn has_range(&self) -> bool {
        self.start.is_some() || self.stop.is_some()
    }

    /// True when resolving should slice the record: the internal start or the
    /// stop is non-zero. `[:0]`, `[0:0]` and `[1:0]` select the whole record.
    #[must_use]
    pub fn selects_subrange(&self) -> bool {
        self.start().is_some_and(|s| s > 0) || self.stop.is_some_and(|s| s > 0)
    }

    /// Length of the attached sequence, or `stop - start` on the internal
    /// coordinates when no sequence has been attached yet.
    #[must_use]
    pub fn len(&self) -> Option<u64> {
        match &self.sequence {
            Some(sequence) => Some(sequence.len() as u64),
            None => match (self.start(), self.stop) {
                (Some(start), Some(stop)) => Some(stop.saturating_sub(start)),
                _ => None,
            },
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.database, self.id)?;
        if self.has_range() {
            let bound = |b: Option<u64>| b.map(|b| b.to_string()).unwrap_or_default();
            write!(f, "[{}:{}]", bound(self.start), bound(self.stop))?;
        }
        Ok(())
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_address(s)
    }
}

/// Parse address text into an [`Address`] with no sequence attached.
///
/// Surrounding whitespace is ignored; everything else must match the grammar.
///
/// # Errors
///
/// Returns `AddressError::Invalid` if the text does not match `DB:ID` or
/// `DB:ID[START:STOP]`.
pub fn parse_address(text: &str) -> Result<Address, AddressError> {
    let text = text.trim();
    let invalid = || AddressError::Invalid(text.to_string());

    let (database, rest) = text.split_once(':').ok_or_else(invalid)?;
    let (id, range) = match rest.find('[') {
        Some(open) => (&rest[..open], Some(&rest[open..])),
        None => (rest, None),
    };

    if !is_valid_name(database) || !is_valid_name(id) {
        return Err(invalid());
    }

    let (start, stop) = match range {
        None => (None, None),
        Some(range) => {
            let inner = range
                .strip_prefix('[')
                .and_then(|r| r.strip_suffix(']'))
                .ok_or_else(invalid)?;
            let (start, stop) = inner.split_once(':').ok_or_else(invalid)?;
            (
                parse_bound(start).ok_or_else(invalid)?,
                parse_bound(stop).ok_or_else(invalid)?,
            )
        }
    };

    Ok(Address::new(database, id, start, stop))
}

/// Parse an optional bound. `Some(None)` means the bound was left empty,
/// `None` means it is not an unsigned decimal integer.
fn parse_bound(text: &str) -> Option<Option<u64>> {
    if text.is_empty() {
        return Some(None);
    }
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok().map(Some)
}
