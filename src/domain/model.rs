use crate::utils::error::{MarketError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Stock listing payload forwarded from the market service.
///
/// The client passes these through without interpreting them, so every field
/// is optional and partial payloads (including `{}`) decode cleanly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListingStockDto {
    pub listing_id: Option<i64>,
    pub ticker: Option<String>,
    pub name: Option<String>,
    pub exchange_name: Option<String>,
    pub last_refresh: Option<i64>,
    pub price: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub price_change: Option<f64>,
    pub volume: Option<i64>,
    pub outstanding_shares: Option<i64>,
    pub dividend_yield: Option<f64>,
}

/// Exchange working-hours state for a stock, decoded from a plain-string
/// body such as `"OPENED"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkingHoursStatus {
    Opened,
    Closed,
    AfterHours,
}

impl FromStr for WorkingHoursStatus {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self> {
        // Some deployments quote the string body, some do not.
        match s.trim().trim_matches('"') {
            "OPENED" => Ok(Self::Opened),
            "CLOSED" => Ok(Self::Closed),
            "AFTER_HOURS" => Ok(Self::AfterHours),
            other => Err(MarketError::Decode {
                context: "working hours status".to_string(),
                reason: format!("Unknown status '{}'", other),
            }),
        }
    }
}

/// Stored entity behind the keyed-lookup repository fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleEntity {
    pub example_id: i64,
    pub payload: String,
}

/// User record returned by the user-lookup fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: i64,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
