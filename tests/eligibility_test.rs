// Currency Eligibility Service tests - blacklist, caching, error paths

mod common;

use common::*;
use payrail::client::{MockOp, MockPaymentClient};
use payrail::PayoutError;

#[tokio::test]
async fn blacklisted_currencies_are_filtered_out() {
    let engine = engine(
        MockPaymentClient::new().with_pairs("USD", &["EUR", "BRL", "GBP", "BDT", "PKR", "UYU"]),
    )
    .with_account(resolved_account(100))
    .await;

    let currencies = engine.eligibility.available_currencies(&host()).await.unwrap();

    assert_eq!(currencies, vec!["EUR".to_string(), "GBP".to_string()]);
}

#[tokio::test]
async fn second_lookup_within_ttl_is_served_from_cache() {
    let engine = engine(MockPaymentClient::new().with_pairs("USD", &["EUR", "GBP"]))
        .with_account(resolved_account(100))
        .await;

    let first = engine.eligibility.available_currencies(&host()).await.unwrap();
    let second = engine.eligibility.available_currencies(&host()).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(engine.mock.count(MockOp::GetCurrencyPairs), 1);
}

#[tokio::test]
async fn missing_connected_account_fails_without_cache_write() {
    let engine = engine(MockPaymentClient::new().with_pairs("USD", &["EUR"]));

    let err = engine
        .eligibility
        .available_currencies(&host())
        .await
        .unwrap_err();

    assert!(matches!(err, PayoutError::NotConnected { host_id: HOST_ID }));
    assert!(engine.cache.is_empty().await);
    assert_eq!(engine.mock.count(MockOp::GetCurrencyPairs), 0);
}

#[tokio::test]
async fn unsupported_source_currency_fails_without_cache_write() {
    // Pair table has no USD source entry
    let engine = engine(MockPaymentClient::new().with_pairs("GBP", &["EUR"]))
        .with_account(resolved_account(100))
        .await;

    let err = engine
        .eligibility
        .available_currencies(&host())
        .await
        .unwrap_err();

    match err {
        PayoutError::UnsupportedCurrency(currency) => assert_eq!(currency, "USD"),
        other => panic!("expected UnsupportedCurrency, got {other:?}"),
    }
    assert!(engine.cache.is_empty().await);
}
