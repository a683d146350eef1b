// ============================================================================
// Fixed-Point Amount
// Non-negative quantity scaled by 10^7, exact parsing with no rounding
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of fractional digits carried by every amount on the wire.
pub const DECIMALS: u32 = 7;

/// Non-negative fixed-point quantity.
///
/// Internally stores `value × 10^7` as an i64, which is exactly the
/// 8-byte integer written into the operation record.
///
/// # Value Range
/// - Minimum: 0.0000000
/// - Maximum: 922,337,203,685.4775807
/// - Precision: 0.0000001 (one stroop)
///
/// # Example
/// ```
/// use manage_offer::numeric::Amount;
///
/// let amount: Amount = "100.5".parse().unwrap();
/// assert_eq!(amount.raw_value(), 1_005_000_000);
/// assert_eq!(amount.to_string(), "100.5000000");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "i64")
)]
#[repr(transparent)]
pub struct Amount(i64);

/// Compute 10^n at compile time
const fn pow10(n: u32) -> i64 {
    let mut result: i64 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

impl Amount {
    /// The scale factor (10^7)
    pub const SCALE: i64 = pow10(DECIMALS);

    /// Zero value, used by offer deletion
    pub const ZERO: Self = Self(0);

    /// One whole unit (1.0000000)
    pub const ONE: Self = Self(pow10(DECIMALS));

    /// Maximum representable value
    pub const MAX: Self = Self(i64::MAX);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from an already scaled value.
    ///
    /// # Errors
    /// Returns `Negative` for values below zero.
    #[inline]
    pub fn from_raw(raw: i64) -> NumericResult<Self> {
        if raw < 0 {
            return Err(NumericError::Negative);
        }
        Ok(Self(raw))
    }

    /// Create from a whole number of units.
    ///
    /// # Errors
    /// Returns `Negative` or `Overflow` when the value is out of range.
    #[inline]
    pub fn from_integer(value: i64) -> NumericResult<Self> {
        if value < 0 {
            return Err(NumericError::Negative);
        }
        value
            .checked_mul(Self::SCALE)
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    /// Convert from rust_decimal::Decimal.
    ///
    /// Trailing zeros beyond the seventh digit are accepted; any other
    /// digit there is refused rather than rounded.
    ///
    /// # Errors
    /// - `Negative` for values below zero
    /// - `PrecisionLoss` if significant digits would be lost
    /// - `Overflow` if the scaled value does not fit in an i64
    pub fn from_decimal(d: Decimal) -> NumericResult<Self> {
        if d.is_sign_negative() && !d.is_zero() {
            return Err(NumericError::Negative);
        }

        let normalized = d.normalize();
        if normalized.scale() > DECIMALS {
            return Err(NumericError::PrecisionLoss);
        }

        normalized
            .checked_mul(Decimal::from(Self::SCALE))
            .and_then(|scaled| scaled.to_i64())
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the scaled value (`value × 10^7`).
    #[inline]
    pub const fn raw_value(self) -> i64 {
        self.0
    }

    /// Get the whole-unit part.
    #[inline]
    pub const fn integer_part(self) -> i64 {
        self.0 / Self::SCALE
    }

    /// Get the fractional part in stroops.
    #[inline]
    pub const fn fractional_part(self) -> i64 {
        self.0 % Self::SCALE
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Convert to rust_decimal::Decimal (scale 7).
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, DECIMALS)
    }
}

// ============================================================================
// Parsing and Formatting
// ============================================================================

/// Parse a decimal string into a scaled amount.
///
/// Accepts an optional leading `+`, at most one decimal point and at most
/// seven fractional digits. Nothing is ever rounded.
///
/// # Examples
/// - "100" -> 1_000_000_000
/// - "+0.5" -> 5_000_000
/// - ".0000001" -> 1
pub fn parse(s: &str) -> NumericResult<Amount> {
    if s.is_empty() {
        return Err(NumericError::Empty);
    }

    if let Some(rest) = s.strip_prefix('-') {
        // Report the shape problem first, then the sign.
        parse_unsigned(rest)?;
        return Err(NumericError::Negative);
    }

    let digits = s.strip_prefix('+').unwrap_or(s);
    parse_unsigned(digits).map(Amount)
}

fn parse_unsigned(s: &str) -> NumericResult<i64> {
    let (int_str, frac_str) = s.split_once('.').unwrap_or((s, ""));

    if int_str.is_empty() && frac_str.is_empty() {
        return Err(NumericError::Malformed);
    }

    let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(int_str) || !is_digits(frac_str) {
        return Err(NumericError::Malformed);
    }

    if frac_str.len() > DECIMALS as usize {
        return Err(NumericError::PrecisionLoss);
    }

    let mut raw: i64 = 0;
    for digit in int_str.bytes().chain(frac_str.bytes()) {
        raw = raw
            .checked_mul(10)
            .and_then(|v| v.checked_add(i64::from(digit - b'0')))
            .ok_or(NumericError::Overflow)?;
    }

    // Pad the fractional part out to exactly seven digits.
    let padding = DECIMALS - frac_str.len() as u32;
    raw.checked_mul(pow10(padding)).ok_or(NumericError::Overflow)
}

/// Format an amount with exactly seven fractional digits.
///
/// Inverse of [`parse`]: `parse(&format(a)) == Ok(a)` for every amount.
pub fn format(amount: Amount) -> String {
    amount.to_string()
}

impl TryFrom<i64> for Amount {
    type Error = NumericError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

impl FromStr for Amount {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:0>width$}",
            self.integer_part(),
            self.fractional_part(),
            width = DECIMALS as usize
        )
    }
}

impl fmt::Debug for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Amount({}, raw={})", self, self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_constants() {
        assert_eq!(Amount::SCALE, 10_000_000);
        assert_eq!(Amount::ZERO.raw_value(), 0);
        assert_eq!(Amount::ONE.raw_value(), 10_000_000);
    }

    #[test]
    fn test_parse_whole_and_fractional() {
        assert_eq!(parse("100").unwrap().raw_value(), 1_000_000_000);
        assert_eq!(parse("100.0000000").unwrap().raw_value(), 1_000_000_000);
        assert_eq!(parse("0.1234567").unwrap().raw_value(), 1_234_567);
        assert_eq!(parse(".5").unwrap().raw_value(), 5_000_000);
        assert_eq!(parse("5.").unwrap().raw_value(), 50_000_000);
        assert_eq!(parse("+1.25").unwrap().raw_value(), 12_500_000);
        assert_eq!(parse("0").unwrap(), Amount::ZERO);
    }

    #[test]
    fn test_parse_limits() {
        assert_eq!(parse("922337203685.4775807").unwrap(), Amount::MAX);
        assert_eq!(
            parse("922337203685.4775808"),
            Err(NumericError::Overflow)
        );
        assert_eq!(parse("922337203686"), Err(NumericError::Overflow));
        assert_eq!(
            parse("99999999999999999999999999"),
            Err(NumericError::Overflow)
        );
    }

    #[test]
    fn test_parse_rejects_excess_precision() {
        assert_eq!(parse("0.12345678"), Err(NumericError::PrecisionLoss));
        assert_eq!(parse("1.00000000"), Err(NumericError::PrecisionLoss));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(parse(""), Err(NumericError::Empty));
        assert_eq!(parse("."), Err(NumericError::Malformed));
        assert_eq!(parse("+"), Err(NumericError::Malformed));
        assert_eq!(parse("1.2.3"), Err(NumericError::Malformed));
        assert_eq!(parse("12a"), Err(NumericError::Malformed));
        assert_eq!(parse(" 1"), Err(NumericError::Malformed));
        assert_eq!(parse("1e5"), Err(NumericError::Malformed));
        assert_eq!(parse("++1"), Err(NumericError::Malformed));
    }

    #[test]
    fn test_parse_rejects_negative() {
        assert_eq!(parse("-1"), Err(NumericError::Negative));
        assert_eq!(parse("-0.5"), Err(NumericError::Negative));
        assert_eq!(parse("-x"), Err(NumericError::Malformed));
    }

    #[test]
    fn test_display() {
        assert_eq!(format(Amount::ZERO), "0.0000000");
        assert_eq!(format(Amount::from_raw(1).unwrap()), "0.0000001");
        assert_eq!(format(parse("100").unwrap()), "100.0000000");
        assert_eq!(Amount::MAX.to_string(), "922337203685.4775807");
    }

    #[test]
    fn test_from_raw_rejects_negative() {
        assert_eq!(Amount::from_raw(-1), Err(NumericError::Negative));
        assert_eq!(Amount::try_from(-1i64), Err(NumericError::Negative));
        assert_eq!(Amount::try_from(5i64).unwrap().raw_value(), 5);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_goes_through_validation() {
        let amount: Amount = serde_json::from_str("1005000000").unwrap();
        assert_eq!(amount, parse("100.5").unwrap());
        assert_eq!(serde_json::to_string(&amount).unwrap(), "1005000000");

        assert!(serde_json::from_str::<Amount>("-5").is_err());
    }

    #[test]
    fn test_from_integer() {
        assert_eq!(Amount::from_integer(3).unwrap().raw_value(), 30_000_000);
        assert_eq!(
            Amount::from_integer(i64::MAX),
            Err(NumericError::Overflow)
        );
    }

    #[test]
    fn test_from_decimal() {
        let d = Decimal::new(12345, 2); // 123.45
        assert_eq!(Amount::from_decimal(d).unwrap().raw_value(), 1_234_500_000);

        // trailing zeros past the seventh digit are harmless
        let d = Decimal::new(1_000_000_000, 9); // 1.000000000
        assert_eq!(Amount::from_decimal(d).unwrap(), Amount::ONE);

        let d = Decimal::new(123_456_789, 8); // 1.23456789
        assert_eq!(Amount::from_decimal(d), Err(NumericError::PrecisionLoss));

        let d = Decimal::new(-1, 0);
        assert_eq!(Amount::from_decimal(d), Err(NumericError::Negative));

        assert_eq!(
            Amount::from_decimal(Decimal::MAX),
            Err(NumericError::Overflow)
        );
    }

    #[test]
    fn test_to_decimal() {
        let x = parse("123.456").unwrap();
        assert_eq!(x.to_decimal().to_string(), "123.4560000");
    }

    proptest! {
        #[test]
        fn prop_format_parse_roundtrip(raw in 0i64..=i64::MAX) {
            let amount = Amount::from_raw(raw).unwrap();
            prop_assert_eq!(parse(&format(amount)), Ok(amount));
        }

        #[test]
        fn prop_parse_format_numeric_equality(s in "[0-9]{1,11}(\\.[0-9]{1,7})?") {
            let amount = parse(&s).unwrap();
            let original = Decimal::from_str(&s).unwrap();
            let formatted = Decimal::from_str(&format(amount)).unwrap();
            prop_assert_eq!(original, formatted);
        }

        #[test]
        fn prop_excess_fraction_rejected(int in "[0-9]{1,6}", frac in "[0-9]{8,12}") {
            let s = format!("{}.{}", int, frac);
            prop_assert_eq!(parse(&s), Err(NumericError::PrecisionLoss));
        }
    }
}
