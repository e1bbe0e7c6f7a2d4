// Model module - Domain records owned by the embedding application
//
// ConnectedAccount and PayoutMethod live in external persistence; the engine
// reads them and (for the account's profile data) writes one field back.

mod account;
mod expense;

pub use account::*;
pub use expense::*;
