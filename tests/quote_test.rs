// Quote Engine tests - two-phase quoting arithmetic

mod common;

use common::*;
use payrail::client::{MockCall, MockOp, MockPaymentClient, ProfileId};
use rust_decimal_macros::dec;

#[tokio::test]
async fn final_quote_locks_amount_at_discovered_rate() {
    // 10000 minor units USD at rate 0.90 -> 100.00 * 0.90 = 90.00 EUR
    let engine = engine(
        MockPaymentClient::new()
            .with_profiles(vec![business_profile(100)])
            .with_rate(dec!(0.90)),
    )
    .with_account(unresolved_account())
    .await;

    let mut account = unresolved_account();
    let quote = engine
        .quotes
        .quote_expense(
            &mut account,
            &payout_method_eur(),
            &expense(1, 10000, "USD"),
        )
        .await
        .unwrap();

    let requests = engine.mock.quote_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].profile_id, ProfileId(100));
    assert_eq!(requests[0].source_currency, "USD");
    assert_eq!(requests[0].target_currency, "EUR");
    assert_eq!(requests[0].target_amount, dec!(90.00));
    assert_eq!(quote.target_amount, dec!(90.00));
}

#[tokio::test]
async fn temporary_quote_converts_minor_units() {
    let engine = engine(MockPaymentClient::new().with_rate(dec!(0.90)));
    let account = resolved_account(100);

    engine
        .quotes
        .temporary_quote(&account, &payout_method_eur(), &expense(1, 10000, "USD"))
        .await
        .unwrap();

    let calls = engine.mock.calls();
    match &calls[0] {
        MockCall::GetTemporaryQuote(request) => {
            assert_eq!(request.source_currency, "USD");
            assert_eq!(request.target_currency, "EUR");
            assert_eq!(request.target_amount, dec!(100));
        }
        other => panic!("expected temporary quote call, got {other:?}"),
    }
}

#[tokio::test]
async fn quoting_resolves_profile_before_rate_discovery() {
    let engine = engine(
        MockPaymentClient::new()
            .with_profiles(vec![business_profile(100)])
            .with_rate(dec!(0.92)),
    )
    .with_account(unresolved_account())
    .await;

    let mut account = unresolved_account();
    engine
        .quotes
        .quote_expense(&mut account, &payout_method_eur(), &expense(1, 5000, "USD"))
        .await
        .unwrap();

    let calls = engine.mock.calls();
    assert!(matches!(calls[0], MockCall::GetProfiles));
    assert!(matches!(calls[1], MockCall::GetTemporaryQuote(_)));
    assert!(matches!(calls[2], MockCall::CreateQuote(_)));
}

#[tokio::test]
async fn quoting_a_resolved_account_skips_profile_lookup() {
    let engine = engine(MockPaymentClient::new().with_rate(dec!(0.92)));
    let mut account = resolved_account(100);

    engine
        .quotes
        .quote_expense(&mut account, &payout_method_eur(), &expense(1, 5000, "USD"))
        .await
        .unwrap();

    assert_eq!(engine.mock.count(MockOp::GetProfiles), 0);
}
