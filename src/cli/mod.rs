//! Command-line interface for seqret.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **fetch**: Retrieve sequences by address (`DB:ID` or `DB:ID[START:STOP]`)
//! - **getorf**: Retrieve a sequence and report its forward-strand ORFs
//! - **list**: List the databases available in the catalog
//!
//! ## Usage
//!
//! ```text
//! # Whole record
//! seqret --db-dir /data/dbs fetch embl:X12345
//!
//! # Subrange, as FASTA
//! seqret --db-dir /data/dbs --format fasta fetch 'embl:X12345[10:250]'
//!
//! # ORFs between 30 and 300 bases
//! SEQRET_DB_DIR=/data/dbs seqret getorf utr:ENST00000335137 --min-size 30 --max-size 300
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod fetch;
pub mod getorf;
pub mod list;
pub mod output;

/// Environment variable naming the catalog root when `--db-dir` is not given
pub const DB_DIR_ENV: &str = "SEQRET_DB_DIR";

#[derive(Parser)]
#[command(name = "seqret")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Retrieve sequences and ORFs from indexed flat-file sequence databases")]
#[command(
    long_about = "seqret reads indexed flat-file sequence databases: a directory per database holding an index (.idx), a lookup file (.lkp) and a sequence file.\n\nSequences are addressed as DB:ID or DB:ID[START:STOP] with 1-based positions."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Directory holding one subdirectory per database
    /// (defaults to $SEQRET_DB_DIR, then the current directory)
    #[arg(long, global = true)]
    pub db_dir: Option<PathBuf>,
}

impl Cli {
    /// Catalog root from `--db-dir`, then `$SEQRET_DB_DIR`, then the current directory
    pub fn catalog_root(&self) -> PathBuf {
        self.db_dir
            .clone()
            .or_else(|| {
                std::env::var_os(DB_DIR_ENV)
                    .filter(|v| !v.is_empty())
                    .map(PathBuf::from)
            })
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Retrieve one or more sequences by address
    Fetch(fetch::FetchArgs),

    /// Find open reading frames in a retrieved sequence
    Getorf(getorf::GetorfArgs),

    /// List the databases in the catalog
    List,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
    Fasta,
}
