use std::path::Path;

use clap::Args;
use tracing::info;

use crate::catalog::store::DatabaseCatalog;
use crate::cli::output::write_addresses;
use crate::cli::OutputFormat;

#[derive(Args)]
pub struct FetchArgs {
    /// Sequence addresses: DB:ID or DB:ID[START:STOP] (1-based, either bound optional)
    #[arg(required = true, num_args = 1..)]
    pub addresses: Vec<String>,
}

pub fn run(args: FetchArgs, format: OutputFormat, root: &Path) -> anyhow::Result<()> {
    let catalog = DatabaseCatalog::open(root)?;

    let mut resolved = Vec::with_capacity(args.addresses.len());
    for text in &args.addresses {
        let address = catalog.fetch(text)?;
        info!(
            "{address}: {} bases",
            address.sequence.as_ref().map_or(0, |s| s.len())
        );
        resolved.push(address);
    }

    let stdout = std::io::stdout();
    write_addresses(&mut stdout.lock(), &resolved, format)
}
