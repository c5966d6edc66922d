//! Core data types for sequence retrieval.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Address`]: A database name, record id and optional subrange (`DB:ID[START:STOP]`)
//! - [`Sequence`]: The nucleotide bases attached to a resolved address
//!
//! ## Coordinates
//!
//! Addresses are written with the database's native convention:
//!
//! | Component | Basis | Notes |
//! |-----------|-------|-------|
//! | START (as written) | 1-based | Inclusive |
//! | STOP (as written)  | 1-based | Inclusive |
//! | [`Address::start`] | 0-based | START minus one when START > 0 |
//! | [`Address::stop`]  | as written | Applied as an exclusive slice bound |
//!
//! Slicing a resolved record uses the half-open range `[start(), stop())`.

pub mod address;
pub mod sequence;
