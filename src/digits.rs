use rug::Integer;
use thiserror::Error;

use crate::traits::Zero;

/// Smallest supported base
pub const MIN_BASE: u32 = 2;
/// Largest supported base, digits `0-9` followed by `a-z`
pub const MAX_BASE: u32 = 36;

#[derive(Clone, Debug, Error, Eq, PartialEq, Hash)]
pub enum DigitError {
    #[error("Invalid digit '{0}'")]
    InvalidDigit(char),
    #[error("Digit '{digit}' is out of range for base {base}")]
    DigitOutOfRange { digit: char, base: u32 },
    #[error("Unsupported base {0}, has to be between 2 and 36")]
    InvalidBase(u32),
}

/// The value of a single digit
///
/// `0-9` map to 0 to 9, `a-z` and `A-Z` to 10 to 35.
pub fn digit_value(ch: char) -> Result<u32, DigitError> {
    ch.to_digit(MAX_BASE).ok_or(DigitError::InvalidDigit(ch))
}

/// Decode a string of digits in the given base
///
/// Surrounding whitespace is ignored. An empty string decodes to zero.
pub fn decode(digits: &str, base: u32) -> Result<Integer, DigitError> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(DigitError::InvalidBase(base));
    }
    let mut res = Integer::zero();
    for ch in digits.trim().chars() {
        let digit = digit_value(ch)?;
        if digit >= base {
            return Err(DigitError::DigitOutOfRange { digit: ch, base });
        }
        res *= base;
        res += digit;
    }
    Ok(res)
}

#[cfg(test)]
mod tests {
    use rand::Rng;
    use rand_xoshiro::rand_core::SeedableRng;

    use super::*;

    #[test]
    fn digits() {
        assert_eq!(digit_value('0'), Ok(0));
        assert_eq!(digit_value('9'), Ok(9));
        assert_eq!(digit_value('a'), Ok(10));
        assert_eq!(digit_value('Z'), Ok(35));
        assert_eq!(digit_value('-'), Err(DigitError::InvalidDigit('-')));
        assert_eq!(digit_value('é'), Err(DigitError::InvalidDigit('é')));
    }

    #[test]
    fn decode_small() {
        assert_eq!(decode("1c", 16), Ok(Integer::from(28)));
        assert_eq!(decode("1C", 16), Ok(Integer::from(28)));
        assert_eq!(decode("111", 2), Ok(Integer::from(7)));
        assert_eq!(decode(" 12\n", 10), Ok(Integer::from(12)));
        assert_eq!(decode("zz", 36), Ok(Integer::from(1295)));
        assert_eq!(decode("", 7), Ok(Integer::new()));
        assert_eq!(decode("   ", 7), Ok(Integer::new()));
    }

    #[test]
    fn decode_invalid() {
        assert_eq!(
            decode("1a", 10),
            Err(DigitError::DigitOutOfRange { digit: 'a', base: 10 })
        );
        assert_eq!(
            decode("102", 2),
            Err(DigitError::DigitOutOfRange { digit: '2', base: 2 })
        );
        assert_eq!(decode("1 2", 10), Err(DigitError::InvalidDigit(' ')));
        assert_eq!(decode("-12", 10), Err(DigitError::InvalidDigit('-')));
        assert_eq!(decode("12", 1), Err(DigitError::InvalidBase(1)));
        assert_eq!(decode("12", 37), Err(DigitError::InvalidBase(37)));
    }

    #[test]
    fn decode_large() {
        let digits = "ffffffffffffffffffffffffffffffff";
        let expected = (Integer::from(1) << 128u32) - 1u32;
        assert_eq!(decode(digits, 16), Ok(expected));
    }

    #[test]
    fn canonical_repr() {
        const NTESTS: u32 = 200;
        let mut rng = rand_xoshiro::Xoshiro256StarStar::seed_from_u64(1);

        for base in MIN_BASE..=MAX_BASE {
            for _ in 0..NTESTS {
                let mut v = Integer::from(rng.gen::<u64>());
                v <<= rng.gen_range(0..200u32);
                v += rng.gen::<u64>();
                let repr = v.to_string_radix(base as i32);
                assert_eq!(decode(&repr, base), Ok(v.clone()));
                assert_eq!(decode(&repr.to_uppercase(), base), Ok(v));
            }
            assert_eq!(decode("0", base), Ok(Integer::new()));
        }
    }
}
