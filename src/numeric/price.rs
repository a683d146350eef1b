// ============================================================================
// Rational Price
// Continued-fraction approximation into a 32-bit numerator/denominator pair
// ============================================================================

use super::errors::{NumericError, NumericResult};
use crate::xdr;
use rust_decimal::Decimal;
use smallvec::SmallVec;
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Upper bound for both numerator and denominator on the wire.
const LIMIT: u128 = i32::MAX as u128;

/// Price stored as an integer fraction `n / d`.
///
/// Invariants: `n > 0` and `d > 0`. Every constructor enforces them, so a
/// `Price` value is always ready to be written into an operation record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawPrice")
)]
pub struct Price {
    n: i32,
    d: i32,
}

/// Unchecked `{n, d}` pair, only ever turned into a [`Price`] through
/// [`Price::new`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawPrice {
    n: i32,
    d: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPrice> for Price {
    type Error = NumericError;

    fn try_from(raw: RawPrice) -> Result<Self, Self::Error> {
        Price::new(raw.n, raw.d)
    }
}

/// Convergents produced by [`convergents`]. The bound on both terms keeps
/// the expansion short (Fibonacci growth), so it stays on the stack.
pub type Convergents = SmallVec<[Price; 64]>;

impl Price {
    /// Price of exactly one (1:1)
    pub const ONE: Self = Self { n: 1, d: 1 };

    /// Create from an explicit fraction.
    ///
    /// # Errors
    /// - `ZeroDenominator` if `d == 0`
    /// - `NonPositive` if `n <= 0` or `d < 0`
    pub fn new(n: i32, d: i32) -> NumericResult<Self> {
        if d == 0 {
            return Err(NumericError::ZeroDenominator);
        }
        if n <= 0 || d < 0 {
            return Err(NumericError::NonPositive);
        }
        Ok(Self { n, d })
    }

    #[inline]
    pub const fn numerator(self) -> i32 {
        self.n
    }

    #[inline]
    pub const fn denominator(self) -> i32 {
        self.d
    }

    /// Convert to rust_decimal::Decimal (rounded to 28 digits).
    ///
    /// Intended for display and comparisons only.
    pub fn to_decimal(self) -> Decimal {
        Decimal::from(self.n) / Decimal::from(self.d)
    }
}

// ============================================================================
// Approximation
// ============================================================================

/// Parse a price string into a fraction.
///
/// Two shapes are accepted:
/// - `"n:d"`: an explicit fraction, both sides 32-bit integers
/// - a plain decimal (`"3.14159265"`), approximated by [`approximate_decimal`]
///
/// # Examples
/// - "2:1" -> 2/1
/// - "0.1" -> 1/10
/// - "1.25" -> 5/4
pub fn approximate(s: &str) -> NumericResult<Price> {
    if s.is_empty() {
        return Err(NumericError::Empty);
    }

    if let Some((n, d)) = s.split_once(':') {
        return Price::new(parse_term(n)?, parse_term(d)?);
    }

    approximate_decimal(parse_decimal(s)?)
}

/// Approximate a decimal value with the last continued-fraction convergent
/// whose terms both fit into `i32`.
///
/// # Errors
/// - `NonPositive` for zero or negative values
/// - `Unrepresentable` if the value is too large (> 2^31 - 1) or too small
///   for any convergent to fit
pub fn approximate_decimal(value: Decimal) -> NumericResult<Price> {
    if value.is_zero() || value.is_sign_negative() {
        return Err(NumericError::NonPositive);
    }

    convergents(value)
        .last()
        .copied()
        .ok_or(NumericError::Unrepresentable)
}

/// Expand `value` as a continued fraction and return every convergent with
/// a positive numerator that fits into two `i32`, in order of increasing
/// accuracy.
///
/// Expansion starts from the seeds `0/1` and `1/0` and stops when the
/// remaining value exceeds `i32::MAX`, when the next convergent would
/// overflow, or when the expansion terminates exactly.
pub fn convergents(value: Decimal) -> Convergents {
    convergents_within(value, LIMIT)
}

fn convergents_within(value: Decimal, limit: u128) -> Convergents {
    let mut out = Convergents::new();

    // value == p / q exactly; q <= 10^28 so limit * q stays below 2^125.
    let mut p: u128 = value.mantissa().unsigned_abs();
    let mut q: u128 = 10u128.pow(value.scale());

    let (mut h_prev, mut k_prev) = (0u128, 1u128);
    let (mut h, mut k) = (1u128, 0u128);

    while q != 0 && p <= limit * q {
        let a = p / q;
        let r = p % q;

        let h_next = a * h + h_prev;
        let k_next = a * k + k_prev;
        if h_next > limit || k_next > limit {
            tracing::trace!(
                "continued fraction stopped at {}/{}: next term overflows i32",
                h,
                k
            );
            break;
        }

        (h_prev, k_prev, h, k) = (h, k, h_next, k_next);
        if h != 0 {
            out.push(Price {
                n: h as i32,
                d: k as i32,
            });
        }

        if r == 0 {
            break;
        }
        (p, q) = (q, r);
    }

    out
}

fn parse_term(s: &str) -> NumericResult<i32> {
    s.parse::<i32>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => NumericError::Overflow,
        _ => NumericError::Malformed,
    })
}

fn parse_decimal(s: &str) -> NumericResult<Decimal> {
    let (sign, unsigned) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s),
    };
    let (int_str, frac_str) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if (int_str.is_empty() && frac_str.is_empty()) || !is_digits(int_str) || !is_digits(frac_str)
    {
        return Err(NumericError::Malformed);
    }

    // Canonical "<int>.<frac>" form; ".5" and "5." are accepted on input.
    let int_str = if int_str.is_empty() { "0" } else { int_str };
    let canonical = if frac_str.is_empty() {
        format!("{}{}", sign, int_str)
    } else {
        format!("{}{}.{}", sign, int_str, frac_str)
    };

    // Only an integer part wider than 96 bits is refused here; excess
    // fractional digits are rounded and handled by the approximation.
    Decimal::from_str(&canonical).map_err(|_| NumericError::Overflow)
}

impl From<Price> for xdr::Price {
    fn from(price: Price) -> Self {
        xdr::Price {
            n: price.n,
            d: price.d,
        }
    }
}

impl FromStr for Price {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        approximate(s)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.n, self.d)
    }
}

// ============================================================================
// Tests
// ============================================================================
