// Wire types for the payment network contract
//
// Field names follow the network's camelCase JSON. Ids get newtypes so a
// profile id can never slot into a transfer id parameter.

use crate::model::ProfileType;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// IDENTIFIERS
// ============================================================================

/// Network id of a sending profile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(pub i64);

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Network id of a quote (opaque string)
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteId(pub String);

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Network id of a recipient bank account
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipientId(pub i64);

impl fmt::Display for RecipientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Network id of a transfer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransferId(pub i64);

impl fmt::Display for TransferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// PROFILES
// ============================================================================

/// A sending entity registered under a connected account
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    #[serde(rename = "type")]
    pub profile_type: ProfileType,
}

// ============================================================================
// QUOTES
// ============================================================================

/// Request for an unbound rate preview
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemporaryQuoteRequest {
    pub source_currency: String,
    pub target_currency: String,
    pub target_amount: Decimal,
}

/// Rate preview returned without a profile association
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemporaryQuote {
    pub rate: Decimal,
    pub source_currency: String,
    pub target_currency: String,
    pub target_amount: Decimal,
}

/// Request for a profile-bound, amount-locked quote
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub profile_id: ProfileId,
    pub source_currency: String,
    pub target_currency: String,
    pub target_amount: Decimal,
}

/// A quote usable to create a transfer
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: QuoteId,
    pub rate: Decimal,
    pub source_currency: String,
    pub target_currency: String,
    pub target_amount: Decimal,
}

// ============================================================================
// RECIPIENTS AND TRANSFERS
// ============================================================================

/// Request to register a recipient bank account
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientRequest {
    pub profile_id: ProfileId,
    /// Recipient type, e.g. "iban" or "sort_code"
    #[serde(rename = "type")]
    pub recipient_type: String,
    pub currency: String,
    /// Bank fields per the requirement schema for the currency
    pub details: serde_json::Value,
}

/// A registered recipient bank account
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    pub id: RecipientId,
    pub currency: String,
}

/// Request to create a transfer from a quote to a recipient
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    /// Destination recipient account
    pub account_id: RecipientId,
    pub quote_id: QuoteId,
    /// Idempotency token, fresh per orchestration call
    pub uuid: Uuid,
    pub details: TransferDetails,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransferDetails {
    /// Human-readable reference shown to the recipient, e.g. "Expense 42"
    pub reference: String,
}

/// A created, not-yet-settled transfer
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub id: TransferId,
    /// Network-side status at creation time, e.g. "incoming_payment_waiting"
    pub status: String,
}

// ============================================================================
// FUNDING
// ============================================================================

/// Outcome of a funding attempt. Only `Rejected` fails the payout; anything
/// else (including pending states) counts as success, since settlement
/// confirmation arrives out of band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FundStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "REJECTED")]
    Rejected,
    #[serde(other)]
    Pending,
}

/// Result of attempting to settle a transfer
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fund {
    pub status: FundStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl Fund {
    pub fn ok() -> Self {
        Self {
            status: FundStatus::Ok,
            error_code: None,
        }
    }

    pub fn rejected(error_code: impl Into<String>) -> Self {
        Self {
            status: FundStatus::Rejected,
            error_code: Some(error_code.into()),
        }
    }

    pub fn is_rejected(&self) -> bool {
        self.status == FundStatus::Rejected
    }
}

// ============================================================================
// DISCOVERY
// ============================================================================

/// One entry of the account-requirements schema: a recipient type and the
/// fields it demands. Field definitions stay loosely typed; the engine only
/// caches and forwards them.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementType {
    #[serde(rename = "type")]
    pub recipient_type: String,
    pub title: String,
    pub fields: Vec<serde_json::Value>,
}

/// Currencies payable from a given source currency
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceCurrencyPairs {
    pub currency_code: String,
    pub target_currencies: Vec<TargetCurrency>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetCurrency {
    pub currency_code: String,
}

/// Full pair table the network supports
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyPairs {
    pub source_currencies: Vec<SourceCurrencyPairs>,
}

impl CurrencyPairs {
    /// Pair list whose source matches `currency`, if the network supports it
    pub fn for_source(&self, currency: &str) -> Option<&SourceCurrencyPairs> {
        self.source_currencies
            .iter()
            .find(|s| s.currency_code == currency)
    }
}
