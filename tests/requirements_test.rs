// Bank Requirement Service tests - nominal quote, caching, error paths

mod common;

use common::*;
use payrail::client::{MockOp, MockPaymentClient, RequirementType};
use payrail::PayoutError;
use rust_decimal_macros::dec;

fn iban_schema() -> Vec<RequirementType> {
    vec![RequirementType {
        recipient_type: "iban".to_string(),
        title: "IBAN".to_string(),
        fields: vec![serde_json::json!({
            "name": "IBAN",
            "group": [{ "key": "IBAN", "required": true }],
        })],
    }]
}

#[tokio::test]
async fn nominal_quote_uses_one_hundred_units() {
    let engine = engine(MockPaymentClient::new().with_requirements(iban_schema()))
        .with_account(resolved_account(100))
        .await;

    engine
        .requirements
        .required_fields(&host(), "EUR")
        .await
        .unwrap();

    let requests = engine.mock.quote_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].source_currency, "USD");
    assert_eq!(requests[0].target_currency, "EUR");
    assert_eq!(requests[0].target_amount, dec!(100));
}

#[tokio::test]
async fn second_lookup_within_ttl_is_served_from_cache() {
    let engine = engine(MockPaymentClient::new().with_requirements(iban_schema()))
        .with_account(resolved_account(100))
        .await;

    let first = engine
        .requirements
        .required_fields(&host(), "EUR")
        .await
        .unwrap();
    let second = engine
        .requirements
        .required_fields(&host(), "EUR")
        .await
        .unwrap();

    assert_eq!(engine.mock.count(MockOp::GetAccountRequirements), 1);
    assert_eq!(engine.mock.count(MockOp::CreateQuote), 1);
    assert_eq!(first[0].recipient_type, second[0].recipient_type);
    assert_eq!(first[0].fields, second[0].fields);
}

#[tokio::test]
async fn different_currencies_are_cached_separately() {
    let engine = engine(MockPaymentClient::new().with_requirements(iban_schema()))
        .with_account(resolved_account(100))
        .await;

    engine
        .requirements
        .required_fields(&host(), "EUR")
        .await
        .unwrap();
    engine
        .requirements
        .required_fields(&host(), "GBP")
        .await
        .unwrap();

    assert_eq!(engine.mock.count(MockOp::GetAccountRequirements), 2);
}

#[tokio::test]
async fn missing_connected_account_fails_without_cache_write() {
    let engine = engine(MockPaymentClient::new());

    let err = engine
        .requirements
        .required_fields(&host(), "EUR")
        .await
        .unwrap_err();

    assert!(matches!(err, PayoutError::NotConnected { host_id: HOST_ID }));
    assert!(engine.cache.is_empty().await);
    assert_eq!(engine.mock.count(MockOp::CreateQuote), 0);
}

#[tokio::test]
async fn resolves_profile_before_the_nominal_quote() {
    let engine = engine(
        MockPaymentClient::new()
            .with_profiles(vec![business_profile(100)])
            .with_requirements(iban_schema()),
    )
    .with_account(unresolved_account())
    .await;

    engine
        .requirements
        .required_fields(&host(), "EUR")
        .await
        .unwrap();

    assert_eq!(engine.mock.count(MockOp::GetProfiles), 1);
    assert_eq!(engine.mock.quote_requests()[0].profile_id.0, 100);
}
