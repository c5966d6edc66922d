use clap::Parser;
use tracing_subscriber::EnvFilter;

use seqret::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("seqret=debug,info")
    } else {
        EnvFilter::new("seqret=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let root = cli.catalog_root();

    match cli.command {
        cli::Commands::Fetch(args) => {
            cli::fetch::run(args, cli.format, &root)?;
        }
        cli::Commands::Getorf(args) => {
            cli::getorf::run(args, cli.format, &root)?;
        }
        cli::Commands::List => {
            cli::list::run(cli.format, &root)?;
        }
    }

    Ok(())
}
