use std::fmt;

use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use thiserror::Error;

pub type QuantityResult<T, E = QuantityError> = std::result::Result<T, E>;

#[derive(Error, Debug, PartialEq)]
pub enum QuantityError {
    #[error("empty-quantity")]
    Empty,

    #[error("invalid-number: {0:?}")]
    InvalidNumber(String),

    #[error("unknown-suffix: {0:?}")]
    UnknownSuffix(String),

    #[error("quantity-overflow")]
    Overflow,
}

const BINARY_SUFFIXES: [(&str, u32); 6] = [("Ki", 10), ("Mi", 20), ("Gi", 30), ("Ti", 40), ("Pi", 50), ("Ei", 60)];

const DECIMAL_SUFFIXES: [(&str, i32); 10] = [
    ("n", -9),
    ("u", -6),
    ("m", -3),
    ("", 0),
    ("k", 3),
    ("M", 6),
    ("G", 9),
    ("T", 12),
    ("P", 15),
    ("E", 18),
];

/// A single resource amount: CPU cores, bytes, or a plain count.
///
/// The value is held exactly in base units, so sums do not depend on the
/// suffixes the addends were written with or on the order they are added in.
/// Anything that does not fit is an error, never a rounded result.
#[derive(Clone, Copy, Debug, Default)]
pub struct Amount {
    value: Decimal,
    // Set once any addend used a binary (`Ki`..`Ei`) suffix; only affects display.
    binary: bool,
}

impl Amount {
    pub fn zero() -> Amount {
        return Amount::default();
    }

    pub fn parse(quantity: &Quantity) -> QuantityResult<Amount> {
        return parse_amount(&quantity.0);
    }

    pub fn from_count(count: usize) -> Amount {
        return Amount { value: Decimal::from(count), binary: false };
    }

    /// Exact `self + other`; fails instead of rounding when the sum overflows.
    pub fn checked_add(&self, other: &Amount) -> QuantityResult<Amount> {
        let value = self.value.checked_add(other.value).ok_or(QuantityError::Overflow)?;
        return Ok(Amount { value, binary: self.binary || other.binary });
    }

    pub fn add(&mut self, other: &Amount) -> QuantityResult<()> {
        *self = self.checked_add(other)?;
        return Ok(());
    }

    /// Lossy conversion to a float in base units (cores, bytes, count).
    pub fn approximate_f64(&self) -> f64 {
        return self.value.to_f64().unwrap_or_default();
    }

    /// `numerator / denominator`, or `None` when the denominator is zero.
    /// The division is done exactly and only the result is converted.
    pub fn approximate_ratio(numerator: &Amount, denominator: &Amount) -> Option<f64> {
        if denominator.value.is_zero() {
            return None;
        }

        return numerator.value.checked_div(denominator.value)?.to_f64();
    }
}

impl PartialEq for Amount {
    fn eq(&self, other: &Amount) -> bool {
        return self.value == other.value;
    }
}

// Canonical form: the largest suffix that divides the value exactly, binary
// suffixes first when any addend used one.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_zero() {
            return write!(f, "0");
        }

        if self.binary && self.value.is_integer() {
            for (suffix, shift) in BINARY_SUFFIXES.iter().rev() {
                if let Some(scaled) = scaled_by(self.value, Decimal::from(1i64 << *shift)) {
                    return write!(f, "{}{}", scaled, suffix);
                }
            }
        }

        for (suffix, exponent) in DECIMAL_SUFFIXES.iter().rev() {
            if let Some(scaled) = power_of_ten(*exponent).and_then(|unit| scaled_by(self.value, unit)) {
                return write!(f, "{}{}", scaled, suffix);
            }
        }

        return write!(f, "{}", self.value.normalize());
    }
}

impl TryFrom<&str> for Amount {
    type Error = QuantityError;

    fn try_from(value: &str) -> QuantityResult<Amount> {
        return parse_amount(value);
    }
}

fn scaled_by(value: Decimal, unit: Decimal) -> Option<Decimal> {
    if !value.checked_rem(unit)?.is_zero() {
        return None;
    }
    return Some(value.checked_div(unit)?.normalize());
}

fn power_of_ten(exponent: i32) -> Option<Decimal> {
    if exponent < 0 {
        return Decimal::try_new(1, exponent.unsigned_abs()).ok();
    }

    let mut value = Decimal::ONE;
    for _ in 0..exponent {
        value = value.checked_mul(Decimal::TEN)?;
    }
    return Some(value);
}

/// Parses `<sign><digits>[.<digits>]<suffix>`, where the suffix is a binary SI
/// suffix, a decimal SI suffix, or an `e<exp>` / `E<exp>` exponent.
fn parse_amount(text: &str) -> QuantityResult<Amount> {
    let text = text.trim();
    if text.is_empty() {
        return Err(QuantityError::Empty);
    }

    let split = text
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '+' || c == '-'))
        .unwrap_or(text.len());
    let (number, suffix) = text.split_at(split);
    let number = Decimal::from_str_exact(number.strip_prefix('+').unwrap_or(number))
        .map_err(|_| QuantityError::InvalidNumber(number.to_string()))?;

    let (multiplier, binary) = suffix_multiplier(suffix)?;
    let value = number.checked_mul(multiplier).ok_or(QuantityError::Overflow)?;

    return Ok(Amount { value, binary });
}

fn suffix_multiplier(suffix: &str) -> QuantityResult<(Decimal, bool)> {
    if let Some((_, shift)) = BINARY_SUFFIXES.iter().find(|(s, _)| *s == suffix) {
        return Ok((Decimal::from(1i64 << *shift), true));
    }

    let exponent = match DECIMAL_SUFFIXES.iter().find(|(s, _)| *s == suffix) {
        Some((_, exponent)) => *exponent,
        None => suffix
            .strip_prefix(|c: char| c == 'e' || c == 'E')
            .and_then(|e| e.parse::<i32>().ok())
            .ok_or_else(|| QuantityError::UnknownSuffix(suffix.to_string()))?,
    };

    let multiplier = power_of_ten(exponent).ok_or(QuantityError::Overflow)?;
    return Ok((multiplier, false));
}
