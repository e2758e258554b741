// SPDX-License-Identifier: AGPL-3.0-or-later

//! Conversion between smallest-unit token amounts and decimal strings.

use alloy::primitives::U256;

/// Format a smallest-unit amount as a decimal string with the given number
/// of decimals.
///
/// Full precision: every fractional digit is kept (trailing zeros trimmed),
/// so `parse_units(format_units(x, d), d) == Ok(x)` for any `U256`.
pub fn format_units(amount: U256, decimals: u8) -> String {
    if amount.is_zero() {
        return "0".to_string();
    }
    if decimals == 0 {
        return amount.to_string();
    }

    let divisor = U256::from(10u64).pow(U256::from(decimals));
    let whole = amount / divisor;
    let remainder = amount % divisor;

    if remainder.is_zero() {
        whole.to_string()
    } else {
        let frac = format!("{remainder:0>width$}", width = decimals as usize);
        format!("{}.{}", whole, frac.trim_end_matches('0'))
    }
}

/// Parse a decimal string into a smallest-unit amount.
pub fn parse_units(s: &str, decimals: u8) -> Result<U256, ParseAmountError> {
    let (whole, frac) = match s.split_once('.') {
        Some((w, f)) => (w, f),
        None => (s, ""),
    };

    if whole.is_empty() && frac.is_empty() {
        return Err(ParseAmountError::Invalid);
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseAmountError::Invalid);
    }
    if frac.len() > decimals as usize {
        return Err(ParseAmountError::TooManyFractionalDigits);
    }

    let scale = U256::from(10u64).pow(U256::from(decimals));
    let whole_units = if whole.is_empty() {
        U256::ZERO
    } else {
        // Digits are already validated, so a parse failure means overflow.
        U256::from_str_radix(whole, 10).map_err(|_| ParseAmountError::Overflow)?
    };
    let frac_units = if frac.is_empty() {
        U256::ZERO
    } else {
        let padding = U256::from(10u64).pow(U256::from(decimals as usize - frac.len()));
        U256::from_str_radix(frac, 10)
            .map_err(|_| ParseAmountError::Overflow)?
            * padding
    };

    whole_units
        .checked_mul(scale)
        .and_then(|v| v.checked_add(frac_units))
        .ok_or(ParseAmountError::Overflow)
}

/// Errors from [`parse_units`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseAmountError {
    #[error("invalid decimal amount")]
    Invalid,

    #[error("too many fractional digits")]
    TooManyFractionalDigits,

    #[error("amount does not fit in 256 bits")]
    Overflow,
}
