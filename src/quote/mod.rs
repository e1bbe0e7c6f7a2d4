// Quote Engine - two-phase quoting for an expense
//
// A temporary quote discovers the live rate without creating a profile-bound
// artifact; the final quote is then requested with the amount locked to that
// rate. Best-effort lock: the network's rate can still move between the two
// calls, acceptable because they happen back to back.

use crate::client::{Quote, QuoteRequest, RemotePaymentClient, TemporaryQuote, TemporaryQuoteRequest};
use crate::model::{ConnectedAccount, Expense, PayoutMethod};
use crate::profile::ProfileResolver;
use crate::PayoutError;
use std::sync::Arc;
use tracing::debug;

pub struct QuoteEngine {
    client: Arc<dyn RemotePaymentClient>,
    profiles: Arc<ProfileResolver>,
}

impl QuoteEngine {
    pub fn new(client: Arc<dyn RemotePaymentClient>, profiles: Arc<ProfileResolver>) -> Self {
        Self { client, profiles }
    }

    /// Unbound rate preview for paying `expense` through `payout_method`
    pub async fn temporary_quote(
        &self,
        account: &ConnectedAccount,
        payout_method: &PayoutMethod,
        expense: &Expense,
    ) -> Result<TemporaryQuote, PayoutError> {
        let quote = self
            .client
            .get_temporary_quote(
                &account.token,
                TemporaryQuoteRequest {
                    source_currency: expense.currency.clone(),
                    target_currency: payout_method.currency.clone(),
                    target_amount: expense.amount_major(),
                },
            )
            .await?;
        Ok(quote)
    }

    /// Profile-bound, amount-locked quote for the expense.
    ///
    /// Resolves the account's profile first, then locks the target amount to
    /// the rate discovered by a temporary quote.
    pub async fn quote_expense(
        &self,
        account: &mut ConnectedAccount,
        payout_method: &PayoutMethod,
        expense: &Expense,
    ) -> Result<Quote, PayoutError> {
        self.profiles.resolve(account).await?;
        let profile_id = account
            .data
            .profile_id()
            .ok_or(PayoutError::MissingProfile {
                account_id: account.id,
            })?;

        let temporary = self.temporary_quote(account, payout_method, expense).await?;
        let target_amount = expense.amount_major() * temporary.rate;
        debug!(
            expense_id = expense.id,
            rate = %temporary.rate,
            target_amount = %target_amount,
            "locking quote at discovered rate"
        );

        let quote = self
            .client
            .create_quote(
                &account.token,
                QuoteRequest {
                    profile_id,
                    source_currency: expense.currency.clone(),
                    target_currency: payout_method.currency.clone(),
                    target_amount,
                },
            )
            .await?;
        Ok(quote)
    }
}
