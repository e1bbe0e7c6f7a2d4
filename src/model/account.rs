// Host organizations and their payment-network connected accounts

use crate::client::{Profile, ProfileId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A host organization that pays out expenses
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Host {
    pub id: i64,
    /// Source currency for all of the host's payouts (ISO 4217)
    pub currency: String,
}

impl Host {
    pub fn new(id: i64, currency: impl Into<String>) -> Self {
        Self {
            id,
            currency: currency.into(),
        }
    }
}

/// Entity kind a payment-network profile represents
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileType {
    Personal,
    Business,
}

/// Network-specific data stored on a connected account.
///
/// Structured merge target for profile resolution: the profile id and type
/// are first-class fields, everything else the upstream sends rides along in
/// `extra` untouched.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AccountData {
    /// Resolved payment-network profile id, if any
    pub id: Option<ProfileId>,
    /// Type of the resolved profile
    #[serde(rename = "type")]
    pub profile_type: Option<ProfileType>,
    /// Other upstream metadata, preserved as-is
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl AccountData {
    /// Whether a profile has been resolved onto this account
    pub fn has_profile(&self) -> bool {
        self.id.is_some()
    }

    /// Resolved profile id, if any
    pub fn profile_id(&self) -> Option<ProfileId> {
        self.id
    }

    /// Merge a selected upstream profile into the account data.
    /// Idempotent: merging the same profile twice is a no-op.
    pub fn merge_profile(&mut self, profile: &Profile) {
        self.id = Some(profile.id);
        self.profile_type = Some(profile.profile_type);
    }
}

/// A host's connection to the payment network: bearer token plus the
/// network-side profile data resolved onto it
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConnectedAccount {
    pub id: i64,
    pub host_id: i64,
    /// Service this connection belongs to (see [`crate::SERVICE`])
    pub service: String,
    /// Bearer token for the payment network
    pub token: String,
    /// Entity type the host declared when connecting
    pub account_type: ProfileType,
    pub data: AccountData,
    /// Soft-delete marker (Unix timestamp); deleted accounts are never active
    pub deleted_at: Option<u64>,
}

impl ConnectedAccount {
    /// Whether this account may be used for payouts
    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }
}
