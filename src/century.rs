//! Century resolution for the two-digit year field.
//!
//! The first digit of the serial number selects which century the two-digit
//! year belongs to. The ranges are fixed by the CPR office and keep every
//! resolvable year inside 1858-2057.

use tracing::trace;

use crate::consts::{BASE_YEAR, MAX_FULL_YEAR, MIN_FULL_YEAR};
use crate::ValidationError;

/// Resolves a two-digit year and serial-range digit to a full year.
///
/// # Errors
/// `IllegalSerialDigit` when the digit is outside 0-9 (cannot happen for
/// input that came out of the parser) and `YearOutOfRange` when the
/// adjusted year leaves the 1858-2057 window.
pub fn resolve_full_year(year: u8, serial_range: u8, serial: u16) -> Result<u16, ValidationError> {
    let mut full_year = BASE_YEAR + u16::from(year);

    match serial_range {
        0..=3 => {} // 1900 - 1999: default
        4 => {
            if year < 37 {
                full_year += 100; // 2000 - 2036
            }
        }
        5..=8 => {
            if year > 57 {
                full_year -= 100; // 1858 - 1899
            } else if year < 57 {
                full_year += 100; // 2000 - 2056
            }
            // exactly 57 stays 1957
        }
        9 => {
            if year < 36 {
                full_year += 100; // 2000 - 2035
            }
        }
        _ => return Err(ValidationError::IllegalSerialDigit { serial }), // just in case
    }
    trace!(serial_range, full_year, "resolved century");

    if !(MIN_FULL_YEAR..=MAX_FULL_YEAR).contains(&full_year) {
        return Err(ValidationError::YearOutOfRange { year: full_year });
    }
    Ok(full_year)
}
