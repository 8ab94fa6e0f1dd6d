//! Money type for BRL amounts.
//!
//! Uses centavo-based integer representation to avoid floating-point
//! precision issues. On the wire the amount is a decimal number of reais,
//! matching the product feed and the persisted cart.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A BRL amount stored in centavos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Money {
    cents: i64,
}

impl Money {
    /// Create a Money value from centavos.
    pub fn new(cents: i64) -> Self {
        Self { cents }
    }

    /// Create a Money value from a decimal amount of reais.
    ///
    /// ```
    /// use eco_commerce::money::Money;
    /// let price = Money::from_reais(49.9);
    /// assert_eq!(price.cents(), 4990);
    /// ```
    pub fn from_reais(amount: f64) -> Self {
        Self::new((amount * 100.0).round() as i64)
    }

    /// A zero amount.
    pub fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Get the amount in centavos.
    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Convert to a decimal amount of reais.
    pub fn to_reais(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Format as a display string with currency prefix (e.g., "R$ 1.234,56").
    pub fn display(&self) -> String {
        format!("R$ {}", self.display_amount())
    }

    /// Format the bare amount (e.g., "1.234,56").
    ///
    /// Always two fraction digits, comma decimal separator, dot grouping.
    pub fn display_amount(&self) -> String {
        let cents = self.cents.abs();
        let reais = (cents / 100).to_string();
        let frac = cents % 100;

        let mut grouped = String::with_capacity(reais.len() + reais.len() / 3);
        for (i, digit) in reais.chars().enumerate() {
            if i > 0 && (reais.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(digit);
        }

        let sign = if self.cents < 0 { "-" } else { "" };
        format!("{sign}{grouped},{frac:02}")
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::new(self.cents + other.cents)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.cents += other.cents;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_reais())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Ok(Money::from_reais(amount))
    }
}
