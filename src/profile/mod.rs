// Profile Resolver - ensures a connected account carries a network profile
//
// Every money-moving call needs the profile id of the sending entity. The
// resolver populates it once and persists it; afterwards resolution is a
// no-op with zero upstream calls.

use crate::client::RemotePaymentClient;
use crate::model::ConnectedAccount;
use crate::store::ConnectedAccountStore;
use crate::PayoutError;
use std::sync::Arc;
use tracing::debug;

pub struct ProfileResolver {
    client: Arc<dyn RemotePaymentClient>,
    accounts: Arc<dyn ConnectedAccountStore>,
}

impl ProfileResolver {
    pub fn new(
        client: Arc<dyn RemotePaymentClient>,
        accounts: Arc<dyn ConnectedAccountStore>,
    ) -> Self {
        Self { client, accounts }
    }

    /// Populate the account's profile data if it is not already set.
    ///
    /// Selection order: the profile matching the account's declared type,
    /// else a business profile, else the first one listed. An empty upstream
    /// list leaves the data unset and returns Ok; dependent calls fail with
    /// [`PayoutError::MissingProfile`] at their point of use.
    ///
    /// Safe to race: concurrent resolutions select deterministically from the
    /// same upstream list, so the last write is identical to the first.
    pub async fn resolve(&self, account: &mut ConnectedAccount) -> Result<(), PayoutError> {
        if account.data.has_profile() {
            debug!(account_id = account.id, "profile already resolved");
            return Ok(());
        }

        let profiles = self.client.get_profiles(&account.token).await?;
        let selected = profiles
            .iter()
            .find(|p| p.profile_type == account.account_type)
            .or_else(|| {
                profiles
                    .iter()
                    .find(|p| p.profile_type == crate::model::ProfileType::Business)
            })
            .or_else(|| profiles.first());

        if let Some(profile) = selected {
            debug!(
                account_id = account.id,
                profile_id = %profile.id,
                "resolved payment-network profile"
            );
            account.data.merge_profile(profile);
            self.accounts.update_data(account.id, &account.data).await?;
        }

        Ok(())
    }
}
