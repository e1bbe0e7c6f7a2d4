// Currency Eligibility Service - which currencies a host may pay out in
//
// The network's pair table is filtered against a static blacklist and the
// host's source currency, then cached for a day per host.

use crate::cache::{self, CacheGateway, DISCOVERY_TTL};
use crate::client::RemotePaymentClient;
use crate::model::Host;
use crate::store::ConnectedAccountStore;
use crate::PayoutError;
use std::sync::Arc;
use tracing::{debug, info};

/// Target currencies excluded from eligibility, with the reason per entry.
/// Excluding them here fails fast instead of late during transfer creation.
pub const BLACKLISTED_CURRENCIES: &[&str] = &[
    // Business senders and business recipients are not supported yet for
    // these corridors; only private-to-private is allowed upstream.
    "BRL",
    "BDT",
    "PKR",
    // Incomplete account-requirements contract upstream.
    "UYU",
];

pub struct CurrencyEligibilityService {
    client: Arc<dyn RemotePaymentClient>,
    cache: Arc<dyn CacheGateway>,
    accounts: Arc<dyn ConnectedAccountStore>,
}

impl CurrencyEligibilityService {
    pub fn new(
        client: Arc<dyn RemotePaymentClient>,
        cache: Arc<dyn CacheGateway>,
        accounts: Arc<dyn ConnectedAccountStore>,
    ) -> Self {
        Self {
            client,
            cache,
            accounts,
        }
    }

    fn cache_key(host: &Host) -> String {
        format!("wise_available_currencies_{}", host.id)
    }

    /// Target currencies the host's connected account may pay out in.
    ///
    /// Fails with [`PayoutError::NotConnected`] when the host has no active
    /// connected account and [`PayoutError::UnsupportedCurrency`] when its
    /// source currency is absent from the network's pair table. Neither
    /// failure writes to the cache.
    pub async fn available_currencies(&self, host: &Host) -> Result<Vec<String>, PayoutError> {
        let key = Self::cache_key(host);
        if let Some(currencies) = cache::get_typed::<Vec<String>>(&*self.cache, &key).await? {
            debug!(host_id = host.id, "eligible currencies served from cache");
            return Ok(currencies);
        }

        let account = self
            .accounts
            .find_active(host.id, crate::SERVICE)
            .await?
            .ok_or(PayoutError::NotConnected { host_id: host.id })?;

        let pairs = self.client.get_currency_pairs(&account.token).await?;
        let source = pairs
            .for_source(&host.currency)
            .ok_or_else(|| PayoutError::UnsupportedCurrency(host.currency.clone()))?;

        let currencies: Vec<String> = source
            .target_currencies
            .iter()
            .map(|c| c.currency_code.clone())
            .filter(|code| !BLACKLISTED_CURRENCIES.contains(&code.as_str()))
            .collect();

        info!(
            host_id = host.id,
            count = currencies.len(),
            "cached eligible payout currencies"
        );
        cache::set_typed(&*self.cache, &key, &currencies, DISCOVERY_TTL).await?;
        Ok(currencies)
    }
}
