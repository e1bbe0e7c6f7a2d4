// Expenses and the payout methods they are paid through

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An approved expense awaiting payout
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    /// Amount in minor units of `currency` (e.g. cents)
    pub amount: i64,
    /// Source currency, typically the host's
    pub currency: String,
}

impl Expense {
    pub fn new(id: i64, amount: i64, currency: impl Into<String>) -> Self {
        Self {
            id,
            amount,
            currency: currency.into(),
        }
    }

    /// Amount in major units, as the network's quote endpoints expect
    pub fn amount_major(&self) -> Decimal {
        Decimal::from(self.amount) / Decimal::from(100)
    }

    /// Human-readable reference attached to the network transfer
    pub fn reference(&self) -> String {
        format!("Expense {}", self.id)
    }
}

/// A payee's registered way of receiving money: a recipient type, a target
/// currency, and the bank fields the network requires for that pairing.
/// Immutable once used in a funded transfer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PayoutMethod {
    pub id: i64,
    /// Network recipient type, e.g. "iban" or "sort_code"
    pub recipient_type: String,
    /// Target currency of the payout (ISO 4217)
    pub currency: String,
    /// Bank account fields, shaped by the requirement schema for the currency
    pub details: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn amount_major_divides_minor_units() {
        let expense = Expense::new(1, 10000, "USD");
        assert_eq!(expense.amount_major(), dec!(100));
    }

    #[test]
    fn amount_major_keeps_cents() {
        let expense = Expense::new(1, 12345, "USD");
        assert_eq!(expense.amount_major(), dec!(123.45));
    }

    #[test]
    fn reference_tags_the_expense_id() {
        let expense = Expense::new(982, 5000, "USD");
        assert_eq!(expense.reference(), "Expense 982");
    }
}
