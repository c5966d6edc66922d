use std::path::Path;

use crate::catalog::store::DatabaseCatalog;
use crate::cli::OutputFormat;

pub fn run(format: OutputFormat, root: &Path) -> anyhow::Result<()> {
    let catalog = DatabaseCatalog::open(root)?;
    let databases = catalog.databases()?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "root": catalog.root().display().to_string(),
                "databases": databases,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("database");
            for name in &databases {
                println!("{name}");
            }
        }
        OutputFormat::Text | OutputFormat::Fasta => {
            println!("Databases in {}", catalog.root().display());
            println!("{}", "=".repeat(60));
            for name in &databases {
                println!("  {name}");
            }
            println!("\nTotal: {} databases", databases.len());
        }
    }

    Ok(())
}
