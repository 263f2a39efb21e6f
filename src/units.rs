//! Fixed-point rendering and parsing for token amounts.
//!
//! Amounts stay in `U256` end to end; the string forms are derived by
//! integer arithmetic only, so values beyond 2^53 survive untouched and
//! parsing never routes through a float.

use crate::error::VerifierError;
use ethers::types::U256;

/// Renders a raw amount as a human decimal string, trailing zeros trimmed
/// (`1_500_000` at 6 decimals -> `"1.5"`, whole amounts lose the point).
pub fn format_units(raw: U256, decimals: u32) -> String {
    let scale = U256::from(10u64).pow(U256::from(decimals));
    let whole = raw / scale;
    let frac = raw % scale;

    if frac.is_zero() {
        return whole.to_string();
    }

    let frac_str = format!("{:0>width$}", frac.to_string(), width = decimals as usize);
    format!("{}.{}", whole, frac_str.trim_end_matches('0'))
}

/// Parses a human decimal string into the raw smallest-unit amount.
/// Fractional digits beyond `decimals` are truncated toward zero.
pub fn parse_units(amount: &str, decimals: u32) -> Result<U256, VerifierError> {
    let invalid = || VerifierError::InvalidAmount(amount.to_string());

    let trimmed = amount.trim();
    if trimmed.is_empty() {
        return Err(invalid());
    }

    let (whole_str, frac_str) = match trimmed.split_once('.') {
        Some((w, f)) => (w, f),
        None => (trimmed, ""),
    };
    if whole_str.is_empty() && frac_str.is_empty() {
        return Err(invalid());
    }
    if !whole_str.chars().all(|c| c.is_ascii_digit())
        || !frac_str.chars().all(|c| c.is_ascii_digit())
    {
        return Err(invalid());
    }

    let scale = U256::from(10u64).pow(U256::from(decimals));
    let whole = if whole_str.is_empty() {
        U256::zero()
    } else {
        U256::from_dec_str(whole_str).map_err(|_| invalid())?
    };

    // Truncate past the token scale, right-pad short inputs.
    let frac_digits: String = frac_str.chars().take(decimals as usize).collect();
    let frac = if frac_digits.is_empty() {
        U256::zero()
    } else {
        let padded = format!("{:0<width$}", frac_digits, width = decimals as usize);
        U256::from_dec_str(&padded).map_err(|_| invalid())?
    };

    whole
        .checked_mul(scale)
        .and_then(|w| w.checked_add(frac))
        .ok_or_else(invalid)
}
