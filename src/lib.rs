//! Validation of Danish CPR numbers.
//!
//! A CPR number is 10 digits: birth date as DDMMYY, then a 4-digit serial
//! of which the first digit selects the century and the last is a
//! modulus 11 check digit. An optional separator may appear between the
//! date and serial parts (`999999-9999`).
//!
//! ```
//! use cpr_validate::validate;
//!
//! let cpr = validate("231045-0637").unwrap();
//! assert_eq!(cpr.date_of_birth(), "1945-10-23");
//!
//! let err = validate("1613414199").unwrap_err();
//! assert_eq!(err.messages()[0], "Illegal month [13]");
//! ```

mod calendar;
mod century;
mod checksum;
mod consts;
mod fields;
mod prelude;

pub use calendar::{days_in_month, is_leap_year};
pub use century::resolve_full_year;
pub use checksum::{check_digit, remainder, ChecksumError};
pub use consts::*;

use crate::fields::Fields;
use crate::prelude::*;
use std::str::FromStr;
use tracing::trace;

/// A single validation failure, carrying everything needed to render the
/// ordered diagnostic lines via [`ValidationError::messages`].
/// `Display` gives the primary line only.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ValidationError {
    /// Input was empty or blank.
    #[display(fmt = "Empty CPR value")]
    EmptyInput,
    /// Input matched neither `9999999999` nor `999999-9999`.
    #[display(fmt = "Illegal pattern: [{input}]")]
    IllegalPattern { input: String },
    /// Separator stripping did not leave 10 digits. Unreachable after the
    /// pattern check, kept as a guard.
    #[display(fmt = "CPR must contain 10 digits wo. separators")]
    MustBeTenDigits,
    /// Serial-range digit outside 0-9. Unreachable for parsed input,
    /// kept as a guard.
    #[display(fmt = "Illegal serial number [{serial}]")]
    IllegalSerialDigit { serial: u16 },
    /// Resolved year fell outside 1858-2057.
    #[display(fmt = "Illegal year [{year}]")]
    YearOutOfRange { year: u16 },
    #[display(fmt = "Illegal month [{month}]")]
    IllegalMonth { month: u8 },
    #[display(fmt = "Illegal day [{day}]")]
    IllegalDay {
        day: u8,
        month: u8,
        year: u16,
        max_days: u8,
    },
    /// Day field 61-91: a replacement number issued for an already taken
    /// date+serial combination. Reported with the implied original date.
    #[display(fmt = "Replacement CPR [{short_date}]")]
    ReplacementCpr {
        short_date: String,
        original_day: u8,
        month: u8,
        year: u8,
    },
    /// Replacement number whose serial lies in one of the reserved bands.
    #[display(fmt = "Replacement CPR [{short_date}]")]
    InvalidReplacementSerial { short_date: String, serial: u16 },
    /// Weighted digit sum was not divisible by 11.
    #[display(fmt = "Modulus11 check failed [{remainder}] Expected [{digit}]")]
    ChecksumMismatch { remainder: u8, digit: u8 },
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    /// The ordered human-readable diagnostic lines: the primary message
    /// followed by its explanatory lines, suitable for presenting verbatim.
    pub fn messages(&self) -> Vec<String> {
        let mut lines = vec![self.to_string()];
        match self {
            Self::IllegalPattern { .. } => {
                lines.push("Valid patterns are: 999999-9999 or 9999999999".to_owned());
            }
            Self::YearOutOfRange { .. } => {
                lines.push("Valid range is 1857-2057".to_owned());
            }
            Self::IllegalMonth { .. } => {
                lines.push("Valid 1-12".to_owned());
            }
            Self::IllegalDay {
                month,
                year,
                max_days,
                ..
            } => {
                lines.push(format!(
                    "Valid 1-{max_days} in month {month} of the year {year}"
                ));
            }
            Self::ReplacementCpr {
                original_day,
                month,
                year,
                ..
            } => {
                lines.push(format!(
                    "This is a replacement for [{original_day:02}{month:02}{year:02}]"
                ));
            }
            Self::InvalidReplacementSerial { serial, .. } => {
                lines.push(format!("Serial number is invalid [{serial}]"));
                lines.push(
                    "Invalid ranges are 5037-5057, 6037-6057, 7037-7057, 8037-8057".to_owned(),
                );
            }
            _ => {}
        }
        lines
    }
}

/// A validated CPR number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{normalized}")]
pub struct Cpr {
    normalized: String,
    day: u8,
    month: u8,
    year: u16,
    serial: u16,
}

impl Cpr {
    /// Day of birth (1-31)
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Month of birth (1-12)
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Full four-digit year of birth, century resolved
    pub fn year(&self) -> u16 {
        self.year
    }

    /// The 4-digit serial, check digit included
    pub fn serial(&self) -> u16 {
        self.serial
    }

    /// The number as 10 contiguous digits, separator stripped
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// Date of birth in ISO form, `YYYY-MM-DD`
    pub fn date_of_birth(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Validates a CPR number end to end: syntax, century resolution, calendar
/// date, replacement-number convention and the modulus 11 check.
///
/// The check is skipped for the birth dates in [`MOD11_EXCEPTION_DATES`].
/// Replacement numbers (day 61-91) are reported as
/// [`ValidationError::ReplacementCpr`] with the implied original date, or
/// as [`ValidationError::InvalidReplacementSerial`] when the serial lies
/// in a reserved band.
///
/// # Errors
/// The first failing step short-circuits; [`ValidationError::messages`]
/// renders the full diagnostic lines.
pub fn validate(input: &str) -> Result<Cpr, ValidationError> {
    let fields = Fields::parse(input)?;
    trace!(serial_range = fields.serial_range, "serial range");

    let full_year = resolve_full_year(fields.year, fields.serial_range, fields.serial)?;

    if !(1..=MAX_MONTH).contains(&fields.month) {
        return Err(ValidationError::IllegalMonth {
            month: fields.month,
        });
    }
    trace!(month = fields.month, "month ok");

    let max_days = days_in_month(full_year, fields.month);
    if !(1..=max_days).contains(&fields.day) {
        let replacement_days =
            REPLACEMENT_DAY_OFFSET + 1..=REPLACEMENT_DAY_OFFSET + max_days;
        if replacement_days.contains(&fields.day) {
            let reserved = RESERVED_REPLACEMENT_SERIALS
                .iter()
                .any(|&(low, high)| (low..=high).contains(&fields.serial));
            return Err(if reserved {
                ValidationError::InvalidReplacementSerial {
                    short_date: fields.short_date().to_owned(),
                    serial: fields.serial,
                }
            } else {
                ValidationError::ReplacementCpr {
                    short_date: fields.short_date().to_owned(),
                    original_day: fields.day - REPLACEMENT_DAY_OFFSET,
                    month: fields.month,
                    year: fields.year,
                }
            });
        }
        return Err(ValidationError::IllegalDay {
            day: fields.day,
            month: fields.month,
            year: full_year,
            max_days,
        });
    }
    trace!(day = fields.day, full_year, "day ok");

    if !MOD11_EXCEPTION_DATES.contains(&fields.short_date()) {
        let rem = remainder(&fields.digits);
        trace!(remainder = rem, "modulus 11");
        if rem != 0 {
            return Err(ValidationError::ChecksumMismatch {
                remainder: rem,
                digit: fields.digits[CPR_DIGITS - 1],
            });
        }
    }

    Ok(Cpr {
        day: fields.day,
        month: fields.month,
        year: full_year,
        serial: fields.serial,
        normalized: fields.normalized().to_owned(),
    })
}

impl FromStr for Cpr {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s)
    }
}

impl serde::Serialize for Cpr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.normalized)
    }
}

impl<'de> serde::Deserialize<'de> for Cpr {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
