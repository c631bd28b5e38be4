use crate::config::MarketConfig;
use crate::core::retry::RetryPolicy;
use crate::domain::model::{ListingStockDto, WorkingHoursStatus};
use crate::domain::ports::TokenProvider;
use crate::utils::error::{MarketError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Outbound client for the market microservice.
///
/// Every public accessor follows the same contract: one GET per invocation,
/// bearer auth from the token provider, transient transport failures retried
/// per policy, and any failure (4xx, 5xx, network, decode) swallowed into a
/// type-appropriate empty result. No error ever crosses this boundary.
///
/// Holds only immutable collaborators, so a single instance can be shared
/// across concurrent tasks.
pub struct MarketClient {
    client: Client,
    config: MarketConfig,
    retry: RetryPolicy,
    tokens: Arc<dyn TokenProvider>,
}

impl MarketClient {
    pub fn new(config: MarketConfig, retry: RetryPolicy, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            client: Client::new(),
            config,
            retry,
            tokens,
        }
    }

    /// All listings of the given type, decoded verbatim (order and
    /// duplicates preserved). The type tag is not validated here; the remote
    /// service owns validation. Empty on any failure.
    pub async fn all_listings(&self, list_type: &str) -> Vec<Value> {
        let path = format!("market/listing/get/{}", list_type);
        match self.fetch_json::<Vec<Value>>(&path).await {
            Ok(listings) => listings,
            Err(err) => {
                log_fallback(&path, &err);
                Vec::new()
            }
        }
    }

    /// A single stock by id, or `None` on any failure.
    pub async fn stock_by_id(&self, stock_id: i64) -> Option<ListingStockDto> {
        let path = format!("market/listing/stock/{}", stock_id);
        match self.fetch_json::<ListingStockDto>(&path).await {
            Ok(stock) => Some(stock),
            Err(err) => {
                log_fallback(&path, &err);
                None
            }
        }
    }

    /// All stock listings. Elements that do not match the stock shape are
    /// skipped; the whole result is empty on any failure.
    pub async fn all_stocks(&self) -> Vec<ListingStockDto> {
        let path = "market/listing/get/stock";
        match self.fetch_json::<Vec<Value>>(path).await {
            Ok(items) => items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
            Err(err) => {
                log_fallback(path, &err);
                Vec::new()
            }
        }
    }

    /// Working-hours status for a stock, decoded from a plain-string body.
    /// `None` on any failure or an unrecognized status string.
    pub async fn working_hours_status(&self, stock_id: i64) -> Option<WorkingHoursStatus> {
        let path = format!("market/exchange/stock/{}/time", stock_id);
        let body = match self.fetch_text(&path).await {
            Ok(body) => body,
            Err(err) => {
                log_fallback(&path, &err);
                return None;
            }
        };

        match body.parse::<WorkingHoursStatus>() {
            Ok(status) => Some(status),
            Err(err) => {
                log_fallback(&path, &err);
                None
            }
        }
    }

    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self.fetch_text(path).await?;
        serde_json::from_str(&body).map_err(|e| MarketError::Decode {
            context: path.to_string(),
            reason: e.to_string(),
        })
    }

    /// The shared call path for all accessors: build the request, attach
    /// auth, execute under retry, and surface non-200 statuses as errors.
    async fn fetch_text(&self, path: &str) -> Result<String> {
        let url = self.config.endpoint(path)?;
        let token = self.tokens.current_token().await?;
        let timeout = self.config.request_timeout();

        self.retry
            .run(|| {
                let request = self
                    .client
                    .get(url.clone())
                    .bearer_auth(&token)
                    .timeout(timeout);
                let path = path.to_string();
                async move {
                    let response = request.send().await?;
                    let status = response.status();
                    tracing::debug!(%status, path = %path, "Market response");
                    if !status.is_success() {
                        return Err(MarketError::Status { status, path });
                    }
                    Ok(response.text().await?)
                }
            })
            .await
    }
}

fn log_fallback(path: &str, err: &MarketError) {
    tracing::warn!(
        path = %path,
        status = ?err.status(),
        "Market call failed, returning empty result: {}",
        err
    );
}
