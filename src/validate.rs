//! Range predicates for raw year, month and day values.
//!
//! These accept any primitive number so callers can check untrusted input
//! (including NaN and infinities) before building the typed values in
//! [`crate::types`]. They never fail; every input maps to `true` or `false`.

use num_traits::ToPrimitive;

use crate::consts::{DECEMBER, JANUARY, MAX_DAY, MAX_YEAR, MIN_DAY, MIN_YEAR, YEAR_DIGITS};

/// Returns true if `year` is a finite four-digit number within `MIN_YEAR..=MAX_YEAR`.
///
/// Fractional values fail the digit count (`2000.5` renders as six characters).
pub fn is_valid_year<N: ToPrimitive>(year: N) -> bool {
    let Some(value) = year.to_f64() else {
        return false;
    };
    value.is_finite()
        && value.to_string().len() == YEAR_DIGITS
        && (f64::from(MIN_YEAR)..=f64::from(MAX_YEAR)).contains(&value)
}

/// Returns true if `month` is a number (not NaN) within `JANUARY..=DECEMBER`.
///
/// Fractional values inside the range pass; the typed [`crate::Month`] is
/// what restricts operations to whole months.
pub fn is_valid_month<N: ToPrimitive>(month: N) -> bool {
    in_range(month, JANUARY, DECEMBER)
}

/// Returns true if `day` is a number (not NaN) within `MIN_DAY..=MAX_DAY`.
///
/// The bound does not depend on the month, so 31 passes even for April.
pub fn is_valid_day<N: ToPrimitive>(day: N) -> bool {
    in_range(day, MIN_DAY, MAX_DAY)
}

fn in_range<N: ToPrimitive>(value: N, min: u32, max: u32) -> bool {
    value
        .to_f64()
        .is_some_and(|v| !v.is_nan() && (f64::from(min)..=f64::from(max)).contains(&v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_supported_year_is_valid() {
        for year in MIN_YEAR..=MAX_YEAR {
            assert!(is_valid_year(year), "Year {year} should be valid");
        }
    }

    #[test]
    fn test_year_rejections() {
        assert!(!is_valid_year(1899));
        assert!(!is_valid_year(2101));
        assert!(!is_valid_year(0));
        assert!(!is_valid_year(-1999));
        assert!(!is_valid_year(99_999));
        assert!(!is_valid_year(2000.5));
        assert!(!is_valid_year(f64::NAN));
        assert!(!is_valid_year(f64::INFINITY));
        assert!(!is_valid_year(f64::NEG_INFINITY));
    }

    #[test]
    fn test_year_accepts_any_numeric_width() {
        assert!(is_valid_year(2000_u16));
        assert!(is_valid_year(2000_i64));
        assert!(is_valid_year(2000.0_f64));
        assert!(is_valid_year(1999.0_f32));
    }

    #[test]
    fn test_month_bounds() {
        for month in 1..=12 {
            assert!(is_valid_month(month), "Month {month} should be valid");
        }
        assert!(!is_valid_month(0));
        assert!(!is_valid_month(13));
        assert!(!is_valid_month(-1));
        assert!(!is_valid_month(f64::NAN));
    }

    #[test]
    fn test_fractional_values_in_range_pass() {
        assert!(is_valid_month(1.5));
        assert!(is_valid_month(11.9_f32));
        assert!(is_valid_day(1.5));
        assert!(is_valid_day(30.25));
        assert!(!is_valid_month(12.5));
        assert!(!is_valid_day(0.5));
        assert!(!is_valid_day(31.5));
    }

    #[test]
    fn test_day_bounds_are_month_independent() {
        assert!(is_valid_day(1));
        assert!(is_valid_day(31));
        assert!(!is_valid_day(0));
        assert!(!is_valid_day(32));
        assert!(!is_valid_day(f32::NAN));
        assert!(!is_valid_day(f64::INFINITY));
    }
}
