// Bank Requirement Service - fields a recipient account must supply
//
// The network describes required bank fields per quote, so a nominal
// throwaway quote is created purely to obtain a quote id. The schema changes
// rarely and is cached for a day per host/currency pair.

use crate::cache::{self, CacheGateway, DISCOVERY_TTL};
use crate::client::{QuoteRequest, RemotePaymentClient, RequirementType};
use crate::model::Host;
use crate::profile::ProfileResolver;
use crate::store::ConnectedAccountStore;
use crate::PayoutError;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, info};

/// Major-unit amount of the throwaway quote used for schema discovery
const NOMINAL_AMOUNT: Decimal = Decimal::ONE_HUNDRED;

pub struct BankRequirementService {
    client: Arc<dyn RemotePaymentClient>,
    cache: Arc<dyn CacheGateway>,
    accounts: Arc<dyn ConnectedAccountStore>,
    profiles: Arc<ProfileResolver>,
}

impl BankRequirementService {
    pub fn new(
        client: Arc<dyn RemotePaymentClient>,
        cache: Arc<dyn CacheGateway>,
        accounts: Arc<dyn ConnectedAccountStore>,
        profiles: Arc<ProfileResolver>,
    ) -> Self {
        Self {
            client,
            cache,
            accounts,
            profiles,
        }
    }

    fn cache_key(host: &Host, currency: &str) -> String {
        format!("wise_required_bank_info_{}_to_{}", host.id, currency)
    }

    /// Fields required to describe a valid recipient bank account for paying
    /// out from `host` in `currency`.
    pub async fn required_fields(
        &self,
        host: &Host,
        currency: &str,
    ) -> Result<Vec<RequirementType>, PayoutError> {
        let key = Self::cache_key(host, currency);
        if let Some(fields) = cache::get_typed::<Vec<RequirementType>>(&*self.cache, &key).await? {
            debug!(host_id = host.id, currency, "bank requirements served from cache");
            return Ok(fields);
        }

        let mut account = self
            .accounts
            .find_active(host.id, crate::SERVICE)
            .await?
            .ok_or(PayoutError::NotConnected { host_id: host.id })?;

        self.profiles.resolve(&mut account).await?;
        let profile_id = account
            .data
            .profile_id()
            .ok_or(PayoutError::MissingProfile {
                account_id: account.id,
            })?;

        // Throwaway quote, only needed for its id; never used for a transfer
        let quote = self
            .client
            .create_quote(
                &account.token,
                QuoteRequest {
                    profile_id,
                    source_currency: host.currency.clone(),
                    target_currency: currency.to_string(),
                    target_amount: NOMINAL_AMOUNT,
                },
            )
            .await?;

        let fields = self
            .client
            .get_account_requirements(&account.token, &quote.id)
            .await?;

        info!(host_id = host.id, currency, "cached bank requirement schema");
        cache::set_typed(&*self.cache, &key, &fields, DISCOVERY_TTL).await?;
        Ok(fields)
    }
}
