//! Readers for the files that make up an indexed flat-file database.
//!
//! This module provides readers for:
//!
//! - **Index files (`.idx`)**: Binary id → byte-offset tables with a 300-byte header
//! - **Lookup files (`.lkp`)**: Binary files whose final 24 bytes name the sequence file
//! - **Sequence files**: Line-oriented text where each record starts with a `>` line
//!
//! ## Example
//!
//! ```rust,no_run
//! use seqret::parsing::{index, lookup, record};
//! use std::path::Path;
//!
//! let dir = Path::new("/data/dbs/embl");
//! let entries = index::read_index_file(&dir.join("entrynam.idx")).unwrap();
//! let sequence_file = lookup::read_lookup_file(&dir.join("division.lkp")).unwrap();
//!
//! let offset = entries["X12345"];
//! let bases = record::extract_record(&dir.join(sequence_file), offset).unwrap();
//! ```
//!
//! ## Integer encoding
//!
//! Multi-byte integers in index files are stored byte-reversed: the bytes are
//! read, reversed, and then interpreted as a big-endian unsigned integer.

use thiserror::Error;

pub mod index;
pub mod lookup;
pub mod record;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed index file: {0}")]
    MalformedIndex(String),

    #[error("Malformed lookup file: {0}")]
    MalformedLookup(String),

    #[error("Malformed sequence record: {0}")]
    MalformedRecord(String),
}
