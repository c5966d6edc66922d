//! Catalog of indexed flat-file sequence databases.
//!
//! A catalog is a root directory with one subdirectory per database, named
//! exactly like the database in addresses. Each database directory holds:
//!
//! - one index file (`*.idx`): record ids and the byte offset of each record
//! - one lookup file (`*.lkp`): the name of the sequence file
//! - the sequence file itself
//!
//! ## Example
//!
//! ```rust,no_run
//! use seqret::DatabaseCatalog;
//!
//! let catalog = DatabaseCatalog::open("/data/dbs").unwrap();
//!
//! // Whole record
//! let record = catalog.fetch("embl:X12345").unwrap();
//!
//! // Bases 10 through 20 in the database's 1-based convention
//! let region = catalog.fetch("embl:X12345[10:20]").unwrap();
//! println!("{region}\n{}", region.sequence.as_ref().unwrap());
//! ```
//!
//! Decoded index and lookup files are cached per database for the life of
//! the catalog instance.

pub mod layout;
pub mod store;
