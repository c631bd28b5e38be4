use httpmock::prelude::*;
use market_client::adapters::token::StaticTokenProvider;
use market_client::{MarketClient, MarketConfig, RetryPolicy};
use std::sync::Arc;
use std::time::Duration;

fn client_with_retries(base_url: &str, attempts: u32) -> MarketClient {
    let mut config = MarketConfig::new(base_url);
    config.timeout_seconds = 1;
    MarketClient::new(
        config,
        RetryPolicy::new(attempts, Duration::from_millis(10)),
        Arc::new(StaticTokenProvider::new("test-token")),
    )
}

#[tokio::test]
async fn http_status_errors_are_not_retried() {
    let server = MockServer::start();
    let not_found = server.mock(|when, then| {
        when.method(GET).path("/market/listing/stock/456");
        then.status(404);
    });

    let result = client_with_retries(&server.base_url(), 5)
        .stock_by_id(456)
        .await;

    assert!(result.is_none());
    // Terminal status, exactly one outbound call despite the retry budget.
    not_found.assert_hits(1);
}

#[tokio::test]
async fn server_errors_are_not_retried_either() {
    let server = MockServer::start();
    let unavailable = server.mock(|when, then| {
        when.method(GET).path("/market/listing/get/stock");
        then.status(500);
    });

    let stocks = client_with_retries(&server.base_url(), 5).all_stocks().await;

    assert!(stocks.is_empty());
    unavailable.assert_hits(1);
}

#[tokio::test]
async fn unreachable_service_yields_the_sentinel_after_retries() {
    // Nothing listens here; every attempt fails at connect time and the
    // caller still sees the plain empty result.
    let client = client_with_retries("http://127.0.0.1:1", 2);

    assert!(client.all_stocks().await.is_empty());
    assert!(client.stock_by_id(1).await.is_none());
    assert!(client.working_hours_status(1).await.is_none());
    assert!(client.all_listings("stock").await.is_empty());
}
