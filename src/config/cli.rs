use crate::config::MarketConfig;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "market-client")]
#[command(about = "Query the market service with retry and safe fallbacks")]
pub struct CliConfig {
    /// Base URL of the market service
    #[arg(long, default_value = "http://localhost:8080")]
    pub base_url: String,

    /// Bearer token attached to every request
    #[arg(long, default_value = "dev-token")]
    pub token: String,

    /// Optional TOML config file; when given, connection settings come from
    /// the file instead of the flags above
    #[arg(long)]
    pub config_file: Option<String>,

    #[arg(long, default_value = "10")]
    pub timeout_seconds: u64,

    #[arg(long, default_value = "3")]
    pub retry_attempts: u32,

    #[arg(long, default_value = "200")]
    pub retry_delay_ms: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List all listings of the given type
    Listings { list_type: String },
    /// Fetch a single stock by id
    Stock { stock_id: i64 },
    /// List all stocks
    Stocks,
    /// Working-hours status for a stock
    WorkingHours { stock_id: i64 },
}

impl CliConfig {
    pub fn market_config(&self) -> crate::utils::error::Result<MarketConfig> {
        if let Some(path) = &self.config_file {
            return MarketConfig::from_file(path);
        }
        Ok(MarketConfig {
            base_url: self.base_url.clone(),
            timeout_seconds: self.timeout_seconds,
            retry_attempts: self.retry_attempts,
            retry_delay_ms: self.retry_delay_ms,
        })
    }
}
