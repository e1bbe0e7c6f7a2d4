// Transfer Orchestrator - the full payout workflow
//
// Quote -> recipient -> transfer -> fund, expressed as typed linear states so
// no step can run before its predecessor succeeded. A failure at any step
// aborts the rest and leaves earlier artifacts in place; recovery belongs to
// an external reconciliation process, not this engine.

use crate::client::{
    Fund, ProfileId, Quote, Recipient, RecipientRequest, RemotePaymentClient, Transfer,
    TransferDetails, TransferRequest,
};
use crate::model::{ConnectedAccount, Expense, PayoutMethod};
use crate::quote::QuoteEngine;
use crate::PayoutError;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

// ============================================================================
// FLOW STATES
// ============================================================================

/// Expense quoted; profile known
#[derive(Clone, Debug)]
pub struct Quoted {
    pub profile_id: ProfileId,
    pub quote: Quote,
}

/// Recipient bank account registered on the network
#[derive(Clone, Debug)]
pub struct RecipientCreated {
    pub profile_id: ProfileId,
    pub quote: Quote,
    pub recipient: Recipient,
}

/// Transfer created, awaiting funding
#[derive(Clone, Debug)]
pub struct TransferCreated {
    pub profile_id: ProfileId,
    pub quote: Quote,
    pub recipient: Recipient,
    pub transfer: Transfer,
}

/// Completed payout: every artifact the orchestration produced. The engine
/// does not persist these; the caller records the identifiers.
#[derive(Clone, Debug)]
pub struct Payout {
    pub quote: Quote,
    pub recipient: Recipient,
    pub transfer: Transfer,
    pub fund: Fund,
}

// ============================================================================
// ORCHESTRATOR
// ============================================================================

pub struct TransferOrchestrator {
    client: Arc<dyn RemotePaymentClient>,
    quotes: Arc<QuoteEngine>,
}

impl TransferOrchestrator {
    pub fn new(client: Arc<dyn RemotePaymentClient>, quotes: Arc<QuoteEngine>) -> Self {
        Self { client, quotes }
    }

    /// Step 1: lock a profile-bound quote for the expense
    pub async fn quote(
        &self,
        account: &mut ConnectedAccount,
        payout_method: &PayoutMethod,
        expense: &Expense,
    ) -> Result<Quoted, PayoutError> {
        let quote = self
            .quotes
            .quote_expense(account, payout_method, expense)
            .await?;
        let profile_id = account
            .data
            .profile_id()
            .ok_or(PayoutError::MissingProfile {
                account_id: account.id,
            })?;
        Ok(Quoted { profile_id, quote })
    }

    /// Step 2: register the payout method's bank account as a recipient
    pub async fn create_recipient(
        &self,
        account: &ConnectedAccount,
        payout_method: &PayoutMethod,
        state: Quoted,
    ) -> Result<RecipientCreated, PayoutError> {
        let recipient = self
            .client
            .create_recipient_account(
                &account.token,
                RecipientRequest {
                    profile_id: state.profile_id,
                    recipient_type: payout_method.recipient_type.clone(),
                    currency: payout_method.currency.clone(),
                    details: payout_method.details.clone(),
                },
            )
            .await?;
        Ok(RecipientCreated {
            profile_id: state.profile_id,
            quote: state.quote,
            recipient,
        })
    }

    /// Step 3: create the transfer linking quote and recipient.
    ///
    /// The idempotency token is generated fresh per call, so a retried
    /// orchestration creates a new transfer; de-duplicating retries is the
    /// caller's responsibility.
    pub async fn create_transfer(
        &self,
        account: &ConnectedAccount,
        expense: &Expense,
        state: RecipientCreated,
    ) -> Result<TransferCreated, PayoutError> {
        let transfer = self
            .client
            .create_transfer(
                &account.token,
                TransferRequest {
                    account_id: state.recipient.id,
                    quote_id: state.quote.id.clone(),
                    uuid: Uuid::new_v4(),
                    details: TransferDetails {
                        reference: expense.reference(),
                    },
                },
            )
            .await?;
        Ok(TransferCreated {
            profile_id: state.profile_id,
            quote: state.quote,
            recipient: state.recipient,
            transfer,
        })
    }

    /// Step 4: fund the transfer from the profile's balance.
    /// A `REJECTED` status fails with the network's error code; any other
    /// status, pending included, is success.
    pub async fn fund(
        &self,
        account: &ConnectedAccount,
        state: TransferCreated,
    ) -> Result<Payout, PayoutError> {
        let fund = self
            .client
            .fund_transfer(&account.token, state.profile_id, state.transfer.id)
            .await?;
        if fund.is_rejected() {
            return Err(PayoutError::FundingRejected {
                error_code: fund
                    .error_code
                    .unwrap_or_else(|| "unknown".to_string()),
            });
        }
        Ok(Payout {
            quote: state.quote,
            recipient: state.recipient,
            transfer: state.transfer,
            fund,
        })
    }

    /// Execute the full payout for one (account, payout method, expense)
    /// triple. Strictly sequential; the first failure aborts the rest and
    /// already-created artifacts are not rolled back.
    pub async fn pay_expense(
        &self,
        account: &mut ConnectedAccount,
        payout_method: &PayoutMethod,
        expense: &Expense,
    ) -> Result<Payout, PayoutError> {
        let quoted = self.quote(account, payout_method, expense).await?;
        let with_recipient = self
            .create_recipient(account, payout_method, quoted)
            .await?;
        let with_transfer = self
            .create_transfer(account, expense, with_recipient)
            .await?;
        let payout = self.fund(account, with_transfer).await?;
        info!(
            expense_id = expense.id,
            transfer_id = %payout.transfer.id,
            "expense payout funded"
        );
        Ok(payout)
    }
}
