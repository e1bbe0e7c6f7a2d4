// Payrail - Cross-border payout orchestration engine
//
// Turns an approved expense plus a payout method into a funded transfer on a
// remote payment network: profile resolution, two-phase quoting, recipient and
// transfer creation, funding, plus TTL-cached discovery of supported
// currencies and required bank fields.

pub mod cache;
pub mod client;
pub mod eligibility;
pub mod error;
pub mod model;
pub mod payout;
pub mod profile;
pub mod quote;
pub mod requirements;
pub mod store;

pub use error::PayoutError;

/// Service name under which connected accounts for the payment network are
/// registered in persistence.
pub const SERVICE: &str = "wise";
