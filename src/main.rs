use clap::Parser;
use tracing_subscriber::EnvFilter;

mod aggregate;
mod assemble;
mod cli;
mod config;
mod core;
mod parsing;
mod prepare;
mod store;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("domain_prep=debug,info")
    } else {
        EnvFilter::new("domain_prep=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Prepare => {
            cli::prepare::run(cli.manifest.as_deref(), cli.token_file.as_deref())?;
        }
        cli::Commands::Library(args) => {
            cli::library::run(args, cli.manifest.as_deref(), cli.token_file.as_deref())?;
        }
        cli::Commands::Set(args) => {
            cli::set::run(args, cli.manifest.as_deref(), cli.token_file.as_deref())?;
        }
        cli::Commands::Verify(args) => {
            cli::verify::run(args, cli.manifest.as_deref(), cli.token_file.as_deref())?;
        }
    }

    Ok(())
}
