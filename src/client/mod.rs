// Remote Payment Client - typed access to the payment network
//
// The network is an external collaborator with a fixed request/response
// contract; this module owns that contract. Two implementations: an HTTP
// client for production and a configurable mock for tests.

mod http;
mod mock;
mod types;

pub use http::HttpPaymentClient;
pub use mock::{MockCall, MockOp, MockPaymentClient};
pub use types::*;

use async_trait::async_trait;
use thiserror::Error;

/// Failures surfaced by the remote payment client.
///
/// Never wrapped or retried by the engine; callers see these as-is through
/// [`crate::PayoutError::Upstream`].
#[derive(Error, Debug)]
pub enum ClientError {
    /// Request never produced a response (connect, timeout, TLS)
    #[error("payment network request failed: {0}")]
    Transport(String),

    /// The network answered with a non-success status
    #[error("payment network returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The response body did not match the expected shape
    #[error("could not decode payment network response: {0}")]
    Decode(String),
}

/// Operations the engine consumes from the payment network.
/// Every call carries the connected account's bearer token.
#[async_trait]
pub trait RemotePaymentClient: Send + Sync {
    /// List the profiles (sending entities) under the token
    async fn get_profiles(&self, token: &str) -> Result<Vec<Profile>, ClientError>;

    /// Unbound rate preview; creates no profile-bound artifact
    async fn get_temporary_quote(
        &self,
        token: &str,
        request: TemporaryQuoteRequest,
    ) -> Result<TemporaryQuote, ClientError>;

    /// Profile-bound, amount-locked quote usable to create a transfer
    async fn create_quote(&self, token: &str, request: QuoteRequest) -> Result<Quote, ClientError>;

    /// Register a recipient bank account under the profile
    async fn create_recipient_account(
        &self,
        token: &str,
        request: RecipientRequest,
    ) -> Result<Recipient, ClientError>;

    /// Create a transfer linking a quote and a recipient
    async fn create_transfer(
        &self,
        token: &str,
        request: TransferRequest,
    ) -> Result<Transfer, ClientError>;

    /// Attempt to settle a created transfer from the profile's balance
    async fn fund_transfer(
        &self,
        token: &str,
        profile_id: ProfileId,
        transfer_id: TransferId,
    ) -> Result<Fund, ClientError>;

    /// Schema of bank fields required for the quote's currency pairing
    async fn get_account_requirements(
        &self,
        token: &str,
        quote_id: &QuoteId,
    ) -> Result<Vec<RequirementType>, ClientError>;

    /// All source/target currency pairings the network supports
    async fn get_currency_pairs(&self, token: &str) -> Result<CurrencyPairs, ClientError>;
}
