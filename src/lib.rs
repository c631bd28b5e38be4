pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::MarketConfig;
pub use crate::core::{client::MarketClient, retry::RetryPolicy};
pub use crate::domain::model::{ListingStockDto, WorkingHoursStatus};
pub use crate::utils::error::{MarketError, Result};
