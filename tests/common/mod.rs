// Shared fixtures for the integration tests

#![allow(dead_code)]

use payrail::cache::InMemoryCache;
use payrail::client::{MockPaymentClient, Profile, ProfileId, RemotePaymentClient};
use payrail::eligibility::CurrencyEligibilityService;
use payrail::model::{AccountData, ConnectedAccount, Expense, Host, PayoutMethod, ProfileType};
use payrail::payout::TransferOrchestrator;
use payrail::profile::ProfileResolver;
use payrail::quote::QuoteEngine;
use payrail::requirements::BankRequirementService;
use payrail::store::InMemoryAccountStore;
use std::sync::Arc;

pub const HOST_ID: i64 = 10;
pub const ACCOUNT_ID: i64 = 1;

pub fn host() -> Host {
    Host::new(HOST_ID, "USD")
}

pub fn business_profile(id: i64) -> Profile {
    Profile {
        id: ProfileId(id),
        profile_type: ProfileType::Business,
    }
}

pub fn personal_profile(id: i64) -> Profile {
    Profile {
        id: ProfileId(id),
        profile_type: ProfileType::Personal,
    }
}

/// Connected account with no resolved profile
pub fn unresolved_account() -> ConnectedAccount {
    ConnectedAccount {
        id: ACCOUNT_ID,
        host_id: HOST_ID,
        service: payrail::SERVICE.to_string(),
        token: "test-token".to_string(),
        account_type: ProfileType::Business,
        data: AccountData::default(),
        deleted_at: None,
    }
}

/// Connected account whose profile is already resolved
pub fn resolved_account(profile_id: i64) -> ConnectedAccount {
    let mut account = unresolved_account();
    account.data.merge_profile(&business_profile(profile_id));
    account
}

pub fn payout_method_eur() -> PayoutMethod {
    PayoutMethod {
        id: 55,
        recipient_type: "iban".to_string(),
        currency: "EUR".to_string(),
        details: serde_json::json!({
            "accountHolderName": "Ada Lovelace",
            "IBAN": "DE89370400440532013000",
        }),
    }
}

pub fn expense(id: i64, amount: i64, currency: &str) -> Expense {
    Expense::new(id, amount, currency)
}

/// Fully wired engine over a mock network, an in-memory cache, and an
/// in-memory account store
pub struct TestEngine {
    pub mock: Arc<MockPaymentClient>,
    pub cache: Arc<InMemoryCache>,
    pub accounts: Arc<InMemoryAccountStore>,
    pub resolver: Arc<ProfileResolver>,
    pub quotes: Arc<QuoteEngine>,
    pub eligibility: CurrencyEligibilityService,
    pub requirements: BankRequirementService,
    pub orchestrator: TransferOrchestrator,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

pub fn engine(mock: MockPaymentClient) -> TestEngine {
    init_tracing();
    let mock = Arc::new(mock);
    let client: Arc<dyn RemotePaymentClient> = mock.clone();
    let cache = Arc::new(InMemoryCache::new());
    let accounts = Arc::new(InMemoryAccountStore::new());

    let resolver = Arc::new(ProfileResolver::new(client.clone(), accounts.clone()));
    let quotes = Arc::new(QuoteEngine::new(client.clone(), resolver.clone()));
    let eligibility =
        CurrencyEligibilityService::new(client.clone(), cache.clone(), accounts.clone());
    let requirements = BankRequirementService::new(
        client.clone(),
        cache.clone(),
        accounts.clone(),
        resolver.clone(),
    );
    let orchestrator = TransferOrchestrator::new(client, quotes.clone());

    TestEngine {
        mock,
        cache,
        accounts,
        resolver,
        quotes,
        eligibility,
        requirements,
        orchestrator,
    }
}

impl TestEngine {
    /// Register a connected account for the fixture host
    pub async fn with_account(self, account: ConnectedAccount) -> Self {
        self.accounts.insert(account).await;
        self
    }
}
