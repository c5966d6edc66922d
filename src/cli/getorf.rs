use std::path::Path;

use clap::Args;
use tracing::info;

use crate::catalog::store::DatabaseCatalog;
use crate::cli::output::write_addresses;
use crate::cli::OutputFormat;
use crate::orf::scanner::{LengthBounds, OrfScanner};

#[derive(Args)]
pub struct GetorfArgs {
    /// Sequence address: DB:ID or DB:ID[START:STOP]
    #[arg(required = true)]
    pub address: String,

    /// Minimum ORF size in bases, stop codon excluded
    #[arg(long)]
    pub min_size: Option<usize>,

    /// Maximum ORF size in bases, stop codon excluded
    #[arg(long)]
    pub max_size: Option<usize>,
}

pub fn run(args: GetorfArgs, format: OutputFormat, root: &Path) -> anyhow::Result<()> {
    if let (Some(min), Some(max)) = (args.min_size, args.max_size) {
        anyhow::ensure!(
            min <= max,
            "--min-size ({min}) must not exceed --max-size ({max})"
        );
    }

    let catalog = DatabaseCatalog::open(root)?;
    let source = catalog.fetch(&args.address)?;

    let scanner = OrfScanner::new(LengthBounds::new(args.min_size, args.max_size));
    let orfs = scanner.scan(&source);
    info!("{source}: {} ORFs", orfs.len());

    let stdout = std::io::stdout();
    write_addresses(&mut stdout.lock(), &orfs, format)
}
