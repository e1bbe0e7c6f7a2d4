// Top-level error taxonomy for the payout engine
//
// Nothing here is caught or retried internally; every variant propagates to
// the embedding API layer, which owns the user-facing translation.

use crate::cache::CacheError;
use crate::client::ClientError;
use crate::store::StoreError;
use thiserror::Error;

/// Errors surfaced by the payout engine's services
#[derive(Error, Debug)]
pub enum PayoutError {
    /// No active connected account exists for the host (configuration error)
    #[error("host {host_id} has no active connected account for the payment network")]
    NotConnected { host_id: i64 },

    /// The connected account has no resolved payment-network profile.
    /// Raised at the point of use, never by the resolver itself.
    #[error("connected account {account_id} has no payment-network profile")]
    MissingProfile { account_id: i64 },

    /// The host's source currency has no entry in the network's pair table
    #[error("currency {0} is not a supported source currency on the payment network")]
    UnsupportedCurrency(String),

    /// The network refused to fund an otherwise-created transfer
    #[error("payment network rejected transfer funding: {error_code}")]
    FundingRejected { error_code: String },

    /// Failure surfaced directly from the remote payment client
    #[error(transparent)]
    Upstream(#[from] ClientError),

    /// Connected-account persistence failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Cache backend failure (a miss is never an error)
    #[error(transparent)]
    Cache(#[from] CacheError),
}
