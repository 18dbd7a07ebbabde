//! Rupee amounts.
//!
//! Prices are whole rupees held as unsigned integers. Arithmetic saturates
//! rather than wrapping so a pathological cart can't produce a tiny total.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// Rupee sign used by [`Rupees::display`].
pub const RUPEE_SIGN: char = '\u{20b9}';

/// A non-negative amount in whole rupees.
///
/// Serializes as a bare JSON number.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct Rupees(u64);

impl Rupees {
    /// Create an amount.
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Zero rupees.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// The raw amount.
    pub const fn amount(&self) -> u64 {
        self.0
    }

    /// Check if this is zero.
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Add, clamping at `u64::MAX`.
    pub const fn saturating_add(self, other: Rupees) -> Rupees {
        Rupees(self.0.saturating_add(other.0))
    }

    /// Subtract, clamping at zero.
    pub const fn saturating_sub(self, other: Rupees) -> Rupees {
        Rupees(self.0.saturating_sub(other.0))
    }

    /// Multiply by a quantity, clamping at `u64::MAX`.
    pub const fn saturating_mul(self, factor: u64) -> Rupees {
        Rupees(self.0.saturating_mul(factor))
    }

    /// Format with Indian digit grouping, e.g. `₹1,23,456`.
    pub fn display(&self) -> String {
        format!("{}{}", RUPEE_SIGN, group_indian(self.0))
    }
}

/// Group digits the Indian way: last three, then pairs.
fn group_indian(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

impl Add for Rupees {
    type Output = Rupees;

    fn add(self, other: Rupees) -> Rupees {
        self.saturating_add(other)
    }
}

impl Mul<u64> for Rupees {
    type Output = Rupees;

    fn mul(self, factor: u64) -> Rupees {
        self.saturating_mul(factor)
    }
}

impl Sum for Rupees {
    fn sum<I: Iterator<Item = Rupees>>(iter: I) -> Rupees {
        iter.fold(Rupees::zero(), Rupees::saturating_add)
    }
}

impl From<u64> for Rupees {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Rupees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
