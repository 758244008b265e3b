use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A whole-peso amount. Prices in the studio never carry centavos.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub const fn new(pesos: u64) -> Self {
        Amount(pesos)
    }

    pub fn pesos(&self) -> u64 {
        self.0
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, Add::add)
    }
}

// ₱25,000
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        write!(f, "₱{grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Amount::new(0).to_string(), "₱0");
        assert_eq!(Amount::new(999).to_string(), "₱999");
        assert_eq!(Amount::new(5000).to_string(), "₱5,000");
        assert_eq!(Amount::new(25000).to_string(), "₱25,000");
        assert_eq!(Amount::new(1234567).to_string(), "₱1,234,567");
    }

    #[test]
    fn test_sum() {
        let total: Amount = [Amount::new(15000), Amount::new(25000)].into_iter().sum();
        assert_eq!(total, Amount::new(40000));
        assert_eq!(std::iter::empty::<Amount>().sum::<Amount>(), Amount::ZERO);
    }
}
