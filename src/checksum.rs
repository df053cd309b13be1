//! Weighted modulus 11 check over the 10 digits of a CPR number.

use crate::consts::{CPR_DIGITS, MOD11_WEIGHTS};

/// Error type for check digit calculation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChecksumError {
    /// Input must hold the first 9 digits (a full 10-digit number is truncated).
    #[error("Check digit needs 9 or 10 digits, got {0}")]
    WrongLength(usize),
}

/// Weighted digit sum modulo 11 over all 10 digits.
/// The number passes the check iff the remainder is 0; a nonzero
/// remainder is reported in diagnostics.
pub fn remainder(digits: &[u8; CPR_DIGITS]) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip(MOD11_WEIGHTS)
        .map(|(&d, w)| u32::from(d) * u32::from(w))
        .sum();
    (sum % 11) as u8
}

/// Calculates the expected 10th digit from the first 9 digits.
///
/// Accepts 9 digits, or 10 of which the last is ignored. Returns
/// `11 - (weighted sum mod 11)`; when the remainder is 0 the raw value 11
/// is returned and stands for check digit 0.
///
/// # Errors
/// Returns `ChecksumError::WrongLength` for any other input length.
pub fn check_digit(digits: &[u8]) -> Result<u8, ChecksumError> {
    let digits = match digits.len() {
        9 => digits,
        10 => &digits[..9],
        n => return Err(ChecksumError::WrongLength(n)),
    };

    let sum: u32 = digits
        .iter()
        .zip(MOD11_WEIGHTS)
        .map(|(&d, w)| u32::from(d) * u32::from(w))
        .sum();
    Ok((11 - sum % 11) as u8)
}
