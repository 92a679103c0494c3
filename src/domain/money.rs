use crate::error::PricingError;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// A monetary value backed by `rust_decimal::Decimal`.
///
/// Fee arithmetic is exact and saturates at `Decimal::MAX` instead of
/// panicking. Rounding only happens when a caller asks for it through
/// [`Money::round_dp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(pub Decimal);

/// A fractional rate, e.g. `0.01` for 1%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Rate(pub Decimal);

/// The applied principal of a loan application.
///
/// Always strictly positive and at most [`Amount::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd)]
pub struct Amount(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Largest magnitude accepted when a configured amount is deserialized.
    pub const LIMIT: Decimal = dec!(1000000000000000000);

    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Rounds half away from zero to `scale` decimal places.
    pub fn round_dp(self, scale: u32) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Renders the value with comma thousands separators and at most three
    /// fraction digits, trailing zeros dropped (`1200000` -> `1,200,000`).
    pub fn grouped(&self) -> String {
        group_digits(self.0)
    }
}

impl Rate {
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Largest magnitude accepted when a configured rate is deserialized.
    pub const LIMIT: Decimal = dec!(1000);

    pub fn new(value: Decimal) -> Self {
        Self(value)
    }
}

impl Amount {
    /// 10^15, the largest principal the engine will price.
    pub const MAX: Decimal = dec!(1000000000000000);

    pub fn new(value: Decimal) -> Result<Self, PricingError> {
        if value <= Decimal::ZERO {
            Err(PricingError::ValidationError(
                "Amount must be positive".to_string(),
            ))
        } else if value > Self::MAX {
            Err(PricingError::ValidationError(format!(
                "Amount must not exceed {}",
                Self::MAX
            )))
        } else {
            Ok(Self(value))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn money(&self) -> Money {
        Money(self.0)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = PricingError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<Decimal> for Money {
    type Error = PricingError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value.abs() > Self::LIMIT {
            Err(PricingError::ValidationError(format!(
                "Monetary value {value} exceeds {}",
                Self::LIMIT
            )))
        } else {
            Ok(Self(value))
        }
    }
}

impl TryFrom<Decimal> for Rate {
    type Error = PricingError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value.abs() > Self::LIMIT {
            Err(PricingError::ValidationError(format!(
                "Rate {value} exceeds {}",
                Self::LIMIT
            )))
        } else {
            Ok(Self(value))
        }
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl From<Rate> for Decimal {
    fn from(rate: Rate) -> Self {
        rate.0
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Mul<Rate> for Money {
    type Output = Money;
    fn mul(self, rhs: Rate) -> Self::Output {
        Self(self.0.saturating_mul(rhs.0))
    }
}

impl Mul<Rate> for Amount {
    type Output = Money;
    fn mul(self, rhs: Rate) -> Self::Output {
        Money(self.0.saturating_mul(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn group_digits(value: Decimal) -> String {
    let rendered = value
        .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string();
    let (sign, unsigned) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}
