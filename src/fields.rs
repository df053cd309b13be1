//! Syntax check and field decomposition of the raw input string.

use crate::consts::{CPR_DIGITS, SHORT_DATE_DIGITS};
use crate::ValidationError;

/// The decomposed fields of a syntactically well-formed CPR number.
/// Values are raw: the day may still be a replacement encoding and the
/// year is the two-digit form before century resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Fields {
    normalized: String,
    pub digits: [u8; CPR_DIGITS],
    pub day: u8,
    pub month: u8,
    pub year: u8,
    pub serial: u16,
    pub serial_range: u8,
}

impl Fields {
    /// Accepts 10 contiguous digits, or 6 digits + one non-digit separator
    /// + 4 digits. The separator is stripped before the fields are read.
    ///
    /// # Errors
    /// `EmptyInput` for empty or blank input, `IllegalPattern` for any
    /// other shape, `MustBeTenDigits` if stripping did not leave 10 digits
    /// (unreachable after the shape check, kept as a guard).
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if input.trim().is_empty() {
            return Err(ValidationError::EmptyInput);
        }

        let chars: Vec<char> = input.chars().collect();
        let shape_ok = match chars.len() {
            10 => chars.iter().all(char::is_ascii_digit),
            11 => {
                chars[..SHORT_DATE_DIGITS].iter().all(char::is_ascii_digit)
                    && !chars[SHORT_DATE_DIGITS].is_ascii_digit()
                    && chars[SHORT_DATE_DIGITS + 1..]
                        .iter()
                        .all(char::is_ascii_digit)
            }
            _ => false,
        };
        if !shape_ok {
            return Err(ValidationError::IllegalPattern {
                input: input.to_owned(),
            });
        }

        let normalized: String = chars.iter().filter(|c| c.is_ascii_digit()).collect();
        if normalized.len() != CPR_DIGITS {
            return Err(ValidationError::MustBeTenDigits);
        }

        let mut digits = [0u8; CPR_DIGITS];
        for (slot, byte) in digits.iter_mut().zip(normalized.bytes()) {
            *slot = byte - b'0';
        }

        Ok(Self {
            day: digits[0] * 10 + digits[1],
            month: digits[2] * 10 + digits[3],
            year: digits[4] * 10 + digits[5],
            serial: digits[6..]
                .iter()
                .fold(0u16, |acc, &d| acc * 10 + u16::from(d)),
            serial_range: digits[6],
            digits,
            normalized,
        })
    }

    /// The DDMMYY prefix, used for the checksum exception lookup.
    pub fn short_date(&self) -> &str {
        &self.normalized[..SHORT_DATE_DIGITS]
    }

    /// The full number as 10 contiguous digits.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_contiguous() {
        let fields = Fields::parse("2310450637").unwrap();
        assert_eq!(fields.day, 23);
        assert_eq!(fields.month, 10);
        assert_eq!(fields.year, 45);
        assert_eq!(fields.serial, 637);
        assert_eq!(fields.serial_range, 0);
        assert_eq!(fields.short_date(), "231045");
        assert_eq!(fields.normalized(), "2310450637");
        assert_eq!(fields.digits, [2, 3, 1, 0, 4, 5, 0, 6, 3, 7]);
    }

    #[test]
    fn test_parse_with_separator() {
        let fields = Fields::parse("231045-0637").unwrap();
        assert_eq!(fields.normalized(), "2310450637");
    }

    #[test]
    fn test_any_non_digit_separator() {
        assert!(Fields::parse("231045/0637").is_ok());
        assert!(Fields::parse("231045 0637").is_ok());
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(Fields::parse(""), Err(ValidationError::EmptyInput));
        assert_eq!(Fields::parse("   "), Err(ValidationError::EmptyInput));
    }

    #[test]
    fn test_illegal_patterns() {
        for input in ["240495", "231045--0637", "23104506371", "23104506a7"] {
            assert_eq!(
                Fields::parse(input),
                Err(ValidationError::IllegalPattern {
                    input: input.to_owned()
                }),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_separator_only_after_sixth_digit() {
        assert!(matches!(
            Fields::parse("2310-450637"),
            Err(ValidationError::IllegalPattern { .. })
        ));
    }
}
