mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = match &cli.command {
        Commands::Serve(args) if args.debug => "slang_translator=debug",
        _ => "slang_translator=info",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Commands::Serve(args) => {
            let config = args.to_config(&cli.dictionary);
            cli::run_server(config).await?;
        }
        Commands::Translate { text, format } => {
            cli::translate_once(&cli.dictionary, &text, &format)?;
        }
        Commands::List { search, format } => {
            cli::list_entries(&cli.dictionary, search, &format)?;
        }
        Commands::Export { output } => {
            cli::export_dictionary(&cli.dictionary, &output)?;
        }
    }

    Ok(())
}
