//! Bill model
//!
//! Bills are fixed obligations funded strictly in the order they are listed.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// A named, fixed monetary obligation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bill {
    pub name: String,
    pub amount: Money,
}

impl Bill {
    /// Create a bill for `amount`
    pub fn new(name: impl Into<String>, amount: Money) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// How much of a bill one paycheck covered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillResult {
    pub name: String,
    /// The bill's full amount
    pub required: Money,
    /// What this paycheck put toward it
    pub allocated: Money,
    /// Still owed after this paycheck
    pub remaining: Money,
}

impl BillResult {
    /// Fund `bill` from `available`, taking at most the bill's amount
    pub fn fund(bill: &Bill, available: Money) -> Self {
        let allocated = available.min(bill.amount);
        Self {
            name: bill.name.clone(),
            required: bill.amount,
            allocated,
            remaining: bill.amount - allocated,
        }
    }

    /// Whether the bill was paid in full
    pub fn is_covered(&self) -> bool {
        self.remaining <= Money::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fund_fully() {
        let bill = Bill::new("Rent", Money::from_cents(100000));
        let result = BillResult::fund(&bill, Money::from_cents(150000));

        assert_eq!(result.name, "Rent");
        assert_eq!(result.required.cents(), 100000);
        assert_eq!(result.allocated.cents(), 100000);
        assert!(result.remaining.is_zero());
        assert!(result.is_covered());
    }

    #[test]
    fn test_fund_partially() {
        let bill = Bill::new("Rent", Money::from_cents(100000));
        let result = BillResult::fund(&bill, Money::from_cents(90000));

        assert_eq!(result.allocated.cents(), 90000);
        assert_eq!(result.remaining.cents(), 10000);
        assert!(!result.is_covered());
    }

    #[test]
    fn test_fund_negative_bill_passes_through() {
        let bill = Bill::new("Refund", Money::from_cents(-5000));
        let result = BillResult::fund(&bill, Money::from_cents(1000));

        assert_eq!(result.allocated.cents(), -5000);
        assert!(result.remaining.is_zero());
    }

    #[test]
    fn test_deserialize() {
        let bill: Bill = serde_json::from_str(r#"{"name": "Utilities", "amount": 200}"#).unwrap();
        assert_eq!(bill, Bill::new("Utilities", Money::from_cents(20000)));
    }
}
