use crate::error::{AtmError, Result};
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

const CURRENCY_SYMBOL: &str = "R$";
const MINOR_UNITS_PER_UNIT: f64 = 100.0;

/// A monetary value in currency units.
///
/// Amounts are floating point, so they are compared with a tolerance of
/// [`Amount::EPSILON`] (one cent) through [`Amount::approx_eq`] instead of `==`.
/// Ordering is the plain numeric ordering of [`Amount::value`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Amount(f64);

impl Amount {
    pub const EPSILON: f64 = 0.01;
    pub const ZERO: Self = Self(0.0);

    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> f64 {
        self.0
    }

    /// True iff both amounts differ by less than one cent.
    pub fn approx_eq(&self, other: Amount) -> bool {
        (self.0 - other.0).abs() < Self::EPSILON
    }

    pub fn is_approx_zero(&self) -> bool {
        self.approx_eq(Self::ZERO)
    }

    /// The value rounded to whole cents.
    pub fn minor_units(&self) -> i64 {
        (self.0 * MINOR_UNITS_PER_UNIT).round() as i64
    }

    /// Converts to a two-place decimal for output, normalized so `100.00` prints as `100`.
    ///
    /// Values a `Decimal` cannot hold (NaN, infinities, beyond ~7.9e28) convert
    /// to zero. Machine totals are built from validated finite denominations.
    pub fn to_decimal(&self) -> Decimal {
        debug_assert!(self.0.is_finite(), "non-finite amount {}", self.0);
        Decimal::from_f64(self.0)
            .map(|d| d.round_dp(2).normalize())
            .unwrap_or_default()
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = AtmError;

    fn try_from(value: Decimal) -> Result<Self> {
        value
            .to_f64()
            .map(Self)
            .ok_or_else(|| AtmError::Validation(format!("Amount {value} is out of range")))
    }
}

impl Add for Amount {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Amount {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul<u32> for Amount {
    type Output = Self;
    fn mul(self, count: u32) -> Self::Output {
        Self(self.0 * f64::from(count))
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted = format!("{:.2}", self.0).replace('.', ",");
        write!(f, "{CURRENCY_SYMBOL} {formatted}")
    }
}

/// A bill value the machine can stock.
///
/// Denominations are keyed by their value in whole cents, so two values that
/// round to the same cent are the same denomination. Equality, hashing and
/// ordering all go through that key.
#[derive(Debug, Clone, Copy)]
pub struct Denomination {
    amount: Amount,
    minor_units: i64,
}

impl Denomination {
    pub fn new(amount: Amount) -> Result<Self> {
        if !amount.value().is_finite() || amount.value() < Amount::EPSILON {
            return Err(AtmError::Validation(format!(
                "Denomination must be at least {}, got {}",
                Amount::new(Amount::EPSILON),
                amount
            )));
        }
        Ok(Self {
            amount,
            minor_units: amount.minor_units(),
        })
    }

    /// Builds a denomination of a whole number of currency units.
    pub(crate) const fn whole(units: u32) -> Self {
        Self {
            amount: Amount::new(units as f64),
            minor_units: units as i64 * 100,
        }
    }

    pub const fn amount(&self) -> Amount {
        self.amount
    }

    pub const fn minor_units(&self) -> i64 {
        self.minor_units
    }
}

impl TryFrom<Decimal> for Denomination {
    type Error = AtmError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(Amount::try_from(value)?)
    }
}

impl PartialEq for Denomination {
    fn eq(&self, other: &Self) -> bool {
        self.minor_units == other.minor_units
    }
}

impl Eq for Denomination {}

impl Hash for Denomination {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.minor_units.hash(state);
    }
}

impl PartialOrd for Denomination {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Denomination {
    fn cmp(&self, other: &Self) -> Ordering {
        self.minor_units.cmp(&other.minor_units)
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.amount, f)
    }
}
