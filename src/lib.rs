//! # seqret
//!
//! Read-only access to indexed flat-file sequence databases, plus open reading
//! frame detection on the retrieved sequences.
//!
//! A database is a directory holding a binary index of record offsets, a
//! binary lookup file naming the sequence file, and the sequence file itself.
//! Records are addressed with a compact string:
//!
//! - `DB:ID` retrieves the whole record `ID` from database `DB`
//! - `DB:ID[START:STOP]` retrieves a subrange, with 1-based positions and
//!   either bound optional
//!
//! ## Example
//!
//! ```rust,no_run
//! use seqret::{scan_orfs, DatabaseCatalog};
//!
//! // Root directory with one subdirectory per database
//! let catalog = DatabaseCatalog::open("/data/dbs").unwrap();
//!
//! let utr = catalog.fetch("utr:ENST00000335137[1:500]").unwrap();
//! println!("{utr}\n{}", utr.sequence.as_ref().unwrap());
//!
//! for orf in scan_orfs(&utr, Some(30), None) {
//!     println!("{orf}");
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Addresses and sequences
//! - [`parsing`]: Readers for index, lookup and sequence files
//! - [`catalog`]: Database discovery, caching and retrieval
//! - [`orf`]: Forward-strand ORF scanning
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod orf;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use catalog::store::{CatalogConfig, CatalogError, DatabaseCatalog};
pub use core::address::{parse_address, Address, AddressError};
pub use core::sequence::Sequence;
pub use orf::scanner::{scan_orfs, LengthBounds, Orf, OrfScanner};
pub use parsing::ParseError;
