//! Fixed-point money type.

use serde::{Deserialize, Serialize};

/// Number of basis points in one whole (100%).
const BASIS_POINTS_PER_UNIT: i128 = 10_000;

/// Money amount represented in cents to avoid floating point issues.
///
/// The system is single-currency, so no currency code is carried. Addition,
/// subtraction and multiplication by a quantity are exact within the `i64`
/// range; [`Money::apply_rate`] is the only operation that rounds. Use the
/// `checked_*` variants where an amount outside that range must be rejected.
/// The operators saturate at the bounds instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money {
    /// Amount in cents (e.g., 1000 = $10.00)
    cents: i64,
}

impl Money {
    /// Creates a new Money amount from cents.
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Returns zero money.
    pub fn zero() -> Self {
        Self { cents: 0 }
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Returns the whole-unit portion.
    pub fn dollars(&self) -> i64 {
        self.cents / 100
    }

    /// Returns the cents portion (remainder after dollars).
    pub fn cents_part(&self) -> i64 {
        self.cents.abs() % 100
    }

    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Multiplies by a quantity, saturating at the `i64` bounds.
    pub fn multiply(&self, quantity: u32) -> Money {
        Money {
            cents: self.cents.saturating_mul(i64::from(quantity)),
        }
    }

    /// Multiplies by a quantity, returning `None` on overflow.
    pub fn checked_multiply(&self, quantity: u32) -> Option<Money> {
        self.cents
            .checked_mul(i64::from(quantity))
            .map(Money::from_cents)
    }

    /// Adds two amounts, returning `None` on overflow.
    pub fn checked_add(&self, rhs: Money) -> Option<Money> {
        self.cents.checked_add(rhs.cents).map(Money::from_cents)
    }

    /// Applies a rate expressed in basis points (2300 = 23%).
    ///
    /// The product is computed in 128-bit integers and rounded half away
    /// from zero to the nearest cent. Results outside the `i64` range
    /// saturate.
    pub fn apply_rate(&self, basis_points: u32) -> Money {
        let scaled = i128::from(self.cents) * i128::from(basis_points);
        let mut quotient = scaled / BASIS_POINTS_PER_UNIT;
        let remainder = scaled % BASIS_POINTS_PER_UNIT;

        if remainder.abs() * 2 >= BASIS_POINTS_PER_UNIT {
            quotient += scaled.signum();
        }

        let cents = i64::try_from(quotient).unwrap_or(if quotient < 0 {
            i64::MIN
        } else {
            i64::MAX
        });
        Money { cents }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.cents < 0 {
            write!(f, "-${}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            write!(f, "${}.{:02}", self.dollars(), self.cents_part())
        }
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money {
            cents: self.cents.saturating_add(rhs.cents),
        }
    }
}

impl std::ops::Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Self) -> Self::Output {
        Money {
            cents: self.cents.saturating_sub(rhs.cents),
        }
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::ops::SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}
