//! Open reading frame detection on the forward strand.
//!
//! ORFs are found in frames 0, 1 and 2 (in that order) of a resolved
//! address. Each ORF is itself an [`Address`](crate::core::address::Address)
//! with an id of `<source id>_<ordinal>`, so it can be printed or compared
//! like any retrieved sequence.
//!
//! ## Example
//!
//! ```rust,no_run
//! use seqret::orf::scanner::{LengthBounds, OrfScanner};
//! use seqret::DatabaseCatalog;
//!
//! let catalog = DatabaseCatalog::open("/data/dbs").unwrap();
//! let utr = catalog.fetch("utr:ENST00000335137").unwrap();
//!
//! // ORFs of 30 to 300 bases, stop codon excluded
//! let scanner = OrfScanner::new(LengthBounds::new(Some(30), Some(300)));
//! for orf in scanner.scan(&utr) {
//!     println!("{orf}");
//! }
//! ```

pub mod scanner;
