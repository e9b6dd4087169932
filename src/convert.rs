//! Integer to string conversion in any base from 2 to 36
//!
//! Two implementations with identical output:
//! - [`string_value`] recurses on `n / base` and appends the last digit
//! - [`string_value_iterative`] collects digits in a loop and reverses them
//!
//! Digits above 9 use upper-case letters, so base 16 renders `255` as `FF`
//! and base 36 renders `12345` as `9IX`.

use crate::error::{ConvertError, ConvertResult};

/// Digit alphabet for every supported base
const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Smallest supported base
pub const MIN_BASE: u32 = 2;

/// Largest supported base
pub const MAX_BASE: u32 = 36;

/// Reject bases outside `[MIN_BASE, MAX_BASE]`
pub fn validate_base(base: u32) -> ConvertResult<()> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(ConvertError::InvalidBase { base })
    }
}

/// Map a digit value in `0..36` to its character
///
/// Panics if `value >= 36`; callers only pass remainders of a valid base.
pub fn digit(value: u64) -> char {
    DIGITS[value as usize] as char
}

/// Render `n` in `base` recursively
///
/// Negative values are rendered as `-` followed by the magnitude. The
/// magnitude is taken as `u64` so `i64::MIN` does not overflow.
pub fn string_value(n: i64, base: u32) -> ConvertResult<String> {
    validate_base(base)?;

    let mut out = String::new();
    if n < 0 {
        out.push('-');
    }
    push_digits(n.unsigned_abs(), u64::from(base), &mut out);
    Ok(out)
}

/// Recursive step: emit the higher digits first, then `n % base`
fn push_digits(n: u64, base: u64, out: &mut String) {
    if n >= base {
        push_digits(n / base, base, out);
    }
    out.push(digit(n % base));
}

/// Render `n` in `base` with a loop
pub fn string_value_iterative(n: i64, base: u32) -> ConvertResult<String> {
    validate_base(base)?;

    if n == 0 {
        return Ok("0".to_string());
    }

    let base = u64::from(base);
    let mut magnitude = n.unsigned_abs();
    let mut reversed = Vec::with_capacity(65);

    while magnitude > 0 {
        reversed.push(digit(magnitude % base));
        magnitude /= base;
    }

    if n < 0 {
        reversed.push('-');
    }

    Ok(reversed.into_iter().rev().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(string_value(255, 16).unwrap(), "FF");
        assert_eq!(string_value(-42, 2).unwrap(), "-101010");
        assert_eq!(string_value(12345, 36).unwrap(), "9IX");
        assert_eq!(string_value(9876, 8).unwrap(), "23224");
    }

    #[test]
    fn test_zero() {
        assert_eq!(string_value(0, 2).unwrap(), "0");
        assert_eq!(string_value_iterative(0, 36).unwrap(), "0");
    }

    #[test]
    fn test_single_digit() {
        assert_eq!(string_value(35, 36).unwrap(), "Z");
        assert_eq!(string_value(-9, 10).unwrap(), "-9");
    }

    #[test]
    fn test_invalid_base() {
        assert_eq!(
            string_value(10, 1),
            Err(ConvertError::InvalidBase { base: 1 })
        );
        assert_eq!(
            string_value(10, 37),
            Err(ConvertError::InvalidBase { base: 37 })
        );
        assert!(string_value_iterative(10, 0).is_err());
        assert!(string_value_iterative(10, 40).is_err());
    }

    #[test]
    fn test_extremes() {
        assert_eq!(
            string_value(i64::MIN, 16).unwrap(),
            "-8000000000000000"
        );
        assert_eq!(string_value(i64::MAX, 16).unwrap(), "7FFFFFFFFFFFFFFF");
        assert_eq!(string_value(i64::MIN, 2).unwrap().len(), 65);
    }

    #[test]
    fn test_matches_std_radix_formatting() {
        for n in [1_i64, 7, 255, 4096, 65535, 1_000_000_007] {
            assert_eq!(string_value(n, 2).unwrap(), format!("{:b}", n));
            assert_eq!(string_value(n, 8).unwrap(), format!("{:o}", n));
            assert_eq!(string_value(n, 16).unwrap(), format!("{:X}", n));
        }
    }

    #[test]
    fn test_recursive_and_iterative_agree() {
        let samples = [
            0,
            1,
            -1,
            35,
            36,
            -37,
            9876,
            123_456_789,
            -987_654_321,
            i64::MAX,
            i64::MIN,
            i64::MIN + 1,
        ];
        for base in MIN_BASE..=MAX_BASE {
            for &n in &samples {
                assert_eq!(
                    string_value(n, base).unwrap(),
                    string_value_iterative(n, base).unwrap(),
                    "n={} base={}",
                    n,
                    base
                );
            }
        }
    }

    #[test]
    fn test_digit_mapping() {
        assert_eq!(digit(0), '0');
        assert_eq!(digit(9), '9');
        assert_eq!(digit(10), 'A');
        assert_eq!(digit(35), 'Z');
    }
}
