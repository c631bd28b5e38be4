use clap::Parser;
use market_client::adapters::token::StaticTokenProvider;
use market_client::config::cli::{CliConfig, Command};
use market_client::utils::{logger, validation::Validate};
use market_client::MarketClient;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting market-client CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.market_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let tokens = Arc::new(StaticTokenProvider::new(cli.token.clone()));
    let client = MarketClient::new(config.clone(), config.retry_policy(), tokens);

    // Accessor calls cannot fail by contract; a failed remote call prints
    // the empty result.
    match cli.command {
        Command::Listings { list_type } => {
            let listings = client.all_listings(&list_type).await;
            println!("{}", serde_json::to_string_pretty(&listings)?);
        }
        Command::Stock { stock_id } => match client.stock_by_id(stock_id).await {
            Some(stock) => println!("{}", serde_json::to_string_pretty(&stock)?),
            None => println!("null"),
        },
        Command::Stocks => {
            let stocks = client.all_stocks().await;
            println!("{}", serde_json::to_string_pretty(&stocks)?);
        }
        Command::WorkingHours { stock_id } => match client.working_hours_status(stock_id).await {
            Some(status) => println!("{}", serde_json::to_string(&status)?),
            None => println!("null"),
        },
    }

    Ok(())
}
