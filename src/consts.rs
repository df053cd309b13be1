/// Number of digits in a CPR number after normalization
pub const CPR_DIGITS: usize = 10;

/// Digits in the date part (DDMMYY) of a CPR number
pub const SHORT_DATE_DIGITS: usize = 6;

/// Base added to the two-digit year before any century adjustment
pub const BASE_YEAR: u16 = 1900;

/// Earliest full year a CPR number can encode (inclusive)
pub const MIN_FULL_YEAR: u16 = 1858;

/// Latest full year a CPR number can encode (inclusive)
pub const MAX_FULL_YEAR: u16 = 2057;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Offset added to the day field of a replacement CPR number.
/// A day of 61-91 encodes an original day of 1-31.
pub const REPLACEMENT_DAY_OFFSET: u8 = 60;

/// Serial ranges that are never valid for replacement numbers (inclusive bounds)
pub const RESERVED_REPLACEMENT_SERIALS: [(u16, u16); 4] =
    [(5037, 5057), (6037, 6057), (7037, 7057), (8037, 8057)];

/// Weights for the modulus 11 check, applied to digits 1-10 in order
pub const MOD11_WEIGHTS: [u8; 10] = [4, 3, 2, 7, 6, 5, 4, 3, 2, 1];

/// Birth dates (DDMMYY) exempt from the modulus 11 check.
/// On these days more numbers were issued than modulus 11 allows.
pub const MOD11_EXCEPTION_DATES: [&str; 18] = [
    "010160", // January 1st 1960
    "010164", // January 1st 1964
    "010165", // January 1st 1965
    "010166", // January 1st 1966
    "010169", // January 1st 1969
    "010170", // January 1st 1970
    "010174", // January 1st 1974
    "010180", // January 1st 1980
    "010182", // January 1st 1982
    "010184", // January 1st 1984
    "010185", // January 1st 1985
    "010186", // January 1st 1986
    "010187", // January 1st 1987
    "010188", // January 1st 1988
    "010189", // January 1st 1989
    "010190", // January 1st 1990
    "010191", // January 1st 1991
    "010192", // January 1st 1992
];

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;
