//! Token amounts and decimal unit conversion.
//!
//! ## Overview
//!
//! Amounts are integer base units (`u128`), exactly as the token service
//! counts them. Human-readable values such as `"0.1"` are converted with
//! `rust_decimal` so that no floating-point rounding ever reaches a balance.
//!
//! ## Scale
//!
//! Assets default to 18 decimals: `"1"` is `10^18` base units.
//!
//! ## Examples
//!
//! ```
//! use dark_pool::types::amount::{to_units, from_units};
//!
//! let amount = to_units("0.1").unwrap();
//! assert_eq!(amount, 100_000_000_000_000_000);
//! assert_eq!(from_units(amount).unwrap(), "0.1");
//! ```

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// An amount of one asset, in base units
pub type Amount = u128;

/// Default number of decimals for an asset
pub const DECIMALS: u32 = 18;

/// Largest supported decimals value (10^18 still fits in u64)
pub const MAX_DECIMALS: u32 = 18;

// ============================================================================
// Conversion Functions
// ============================================================================

/// Convert a decimal string into base units for an asset with `decimals`.
///
/// # Returns
///
/// * `Some(Amount)` - The base unit representation
/// * `None` - If parsing fails, the value is negative, has more fractional
///   digits than the asset supports, or is out of range
///
/// # Example
///
/// ```
/// use dark_pool::types::amount::parse_units;
///
/// assert_eq!(parse_units("1.5", 6), Some(1_500_000));
/// assert_eq!(parse_units("0.0000001", 6), None);
/// assert_eq!(parse_units("-1", 6), None);
/// ```
pub fn parse_units(s: &str, decimals: u32) -> Option<Amount> {
    if decimals > MAX_DECIMALS {
        return None;
    }

    let decimal = Decimal::from_str(s.trim()).ok()?;
    if decimal.is_sign_negative() && !decimal.is_zero() {
        return None;
    }

    let scaled = decimal.checked_mul(Decimal::from(10u64.pow(decimals)))?;
    // Sub-unit precision cannot be represented by the token
    if scaled.fract() != Decimal::ZERO {
        return None;
    }
    scaled.trunc().to_u128()
}

/// Convert base units into a trimmed decimal string.
///
/// # Returns
///
/// `None` if the value exceeds the 96-bit mantissa `rust_decimal` supports.
///
/// # Example
///
/// ```
/// use dark_pool::types::amount::format_units;
///
/// assert_eq!(format_units(1_500_000, 6).as_deref(), Some("1.5"));
/// assert_eq!(format_units(0, 6).as_deref(), Some("0"));
/// ```
pub fn format_units(value: Amount, decimals: u32) -> Option<String> {
    if decimals > MAX_DECIMALS {
        return None;
    }
    let raw = i128::try_from(value).ok()?;
    let decimal = Decimal::try_from_i128_with_scale(raw, decimals).ok()?;
    Some(decimal.normalize().to_string())
}

/// [`parse_units`] at the default 18 decimals
pub fn to_units(s: &str) -> Option<Amount> {
    parse_units(s, DECIMALS)
}

/// [`format_units`] at the default 18 decimals
pub fn from_units(value: Amount) -> Option<String> {
    format_units(value, DECIMALS)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const ONE: Amount = 1_000_000_000_000_000_000;

    #[test]
    fn test_to_units_basic() {
        assert_eq!(to_units("1"), Some(ONE));
        assert_eq!(to_units("1.0"), Some(ONE));
        assert_eq!(to_units("0.1"), Some(ONE / 10));
        assert_eq!(to_units("0.3"), Some(3 * ONE / 10));
        assert_eq!(to_units("1000"), Some(1000 * ONE));
        assert_eq!(to_units("0.000000000000000001"), Some(1));
    }

    #[test]
    fn test_to_units_edge_cases() {
        assert_eq!(to_units("0"), Some(0));
        assert_eq!(to_units(" 2 "), Some(2 * ONE));

        assert_eq!(to_units("-1.0"), None);
        assert_eq!(to_units("abc"), None);
        assert_eq!(to_units(""), None);

        // More precision than the asset has
        assert_eq!(to_units("0.0000000000000000001"), None);
    }

    #[test]
    fn test_parse_units_rejects_large_decimals() {
        assert_eq!(parse_units("1", MAX_DECIMALS + 1), None);
        assert_eq!(format_units(1, MAX_DECIMALS + 1), None);
    }

    #[test]
    fn test_from_units() {
        assert_eq!(from_units(ONE).as_deref(), Some("1"));
        assert_eq!(from_units(ONE / 10).as_deref(), Some("0.1"));
        assert_eq!(from_units(700 * ONE).as_deref(), Some("700"));
        assert_eq!(from_units(1).as_deref(), Some("0.000000000000000001"));
        assert_eq!(from_units(0).as_deref(), Some("0"));
    }

    #[test]
    fn test_from_units_out_of_range() {
        assert_eq!(from_units(u128::MAX), None);
    }

    #[test]
    fn test_six_decimal_asset() {
        assert_eq!(parse_units("250.125", 6), Some(250_125_000));
        assert_eq!(format_units(250_125_000, 6).as_deref(), Some("250.125"));
    }
}
