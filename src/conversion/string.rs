//! Radix 2 to 36 text, lowercase digits, no sign and no prefix.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::arithmetic::divide::div_rem_assign_digit;
use crate::arithmetic::multiply::mul_add_digit;
use crate::digit::Digit;
use crate::{Error, Magnitude, Number, Result, Unsigned};

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Largest power of `radix` that fits a digit, with its exponent.
fn chunk(radix: u32) -> (Digit, usize) {
    let mut power = radix;
    let mut exponent = 1;
    while let Some(next) = power.checked_mul(radix) {
        power = next;
        exponent += 1;
    }
    (power, exponent)
}

fn push_native(text: &mut Vec<u8>, mut x: u64, radix: u32) {
    loop {
        text.push(DIGITS[(x % radix as u64) as usize]);
        x /= radix as u64;
        if x == 0 {
            break;
        }
    }
}

fn to_str_radix(digits: &[Digit], radix: u32) -> String {
    let radix = if (2..=36).contains(&radix) { radix } else { 10 };

    // least significant first, reversed at the end
    let mut text = Vec::new();
    match digits.len() {
        0 => text.push(b'0'),
        1 => push_native(&mut text, digits[0] as u64, radix),
        2 => push_native(&mut text, ((digits[1] as u64) << 32) | digits[0] as u64, radix),
        _ => {
            let (power, exponent) = chunk(radix);
            let mut quotient = digits.to_vec();
            while quotient.len() > 2 {
                let mut r = div_rem_assign_digit(&mut quotient, power);
                for _ in 0..exponent {
                    text.push(DIGITS[(r % radix) as usize]);
                    r /= radix;
                }
                while quotient.last() == Some(&0) {
                    quotient.pop();
                }
            }
            // the rest fits natively; padding zeros of the last chunk are covered
            let rest = quotient.iter().rev().fold(0u64, |acc, &d| (acc << 32) | d as u64);
            if rest != 0 {
                push_native(&mut text, rest, radix);
            }
            while text.last() == Some(&b'0') {
                text.pop();
            }
        }
    }

    text.reverse();
    // only ASCII was pushed
    text.into_iter().map(char::from).collect()
}

fn from_str_radix(s: &str, radix: u32, capacity: Option<usize>) -> Result<Vec<Digit>> {
    if !(2..=36).contains(&radix) {
        return Err(Error::InvalidArgument);
    }
    if s.is_empty() {
        return Err(Error::InvalidDigit);
    }

    let mut digits: Vec<Digit> = Vec::new();
    for c in s.chars() {
        let value = c.to_digit(radix).ok_or(Error::InvalidDigit)?;
        mul_add_digit(&mut digits, radix, value);
        if let Some(capacity) = capacity {
            // bits above the width are dropped anyway
            digits.truncate(capacity);
        }
    }
    Ok(digits)
}

impl<const L: usize> Unsigned<L> {
    /// Lowercase digits in the given radix; a radix outside `2..=36` falls back to 10.
    pub fn to_str_radix(&self, radix: u32) -> String {
        to_str_radix(self.significant_digits(), radix)
    }

    /// Parses digits of `radix`, case-insensitively, truncating to the width.
    ///
    /// Fails with [`Error::InvalidArgument`] for a radix outside `2..=36`, and
    /// with [`Error::InvalidDigit`] for empty input or any other character.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self> {
        let digits = from_str_radix(s, radix, Some(L))?;
        Ok(Self::from_le_digits(&digits))
    }
}

impl Magnitude {
    pub fn to_str_radix(&self, radix: u32) -> String {
        to_str_radix(&self.0, radix)
    }

    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self> {
        from_str_radix(s, radix, None).map(Magnitude::from_le_digits)
    }
}

impl<const L: usize> FromStr for Unsigned<L> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_radix(s, 10)
    }
}

impl FromStr for Magnitude {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_radix(s, 10)
    }
}

macro_rules! impl_radix_fmt {
    ($Trait:ident, $radix:expr, $prefix:expr, $upper:expr) => {
        impl<const L: usize> fmt::$Trait for Unsigned<L> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut s = self.to_str_radix($radix);
                if $upper {
                    s.make_ascii_uppercase();
                }
                f.pad_integral(true, $prefix, &s)
            }
        }

        impl fmt::$Trait for Magnitude {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut s = self.to_str_radix($radix);
                if $upper {
                    s.make_ascii_uppercase();
                }
                f.pad_integral(true, $prefix, &s)
            }
        }
    };
}

impl_radix_fmt!(Display, 10, "", false);
impl_radix_fmt!(LowerHex, 16, "0x", false);
impl_radix_fmt!(UpperHex, 16, "0x", true);
impl_radix_fmt!(Binary, 2, "0b", false);
impl_radix_fmt!(Octal, 8, "0o", false);

#[cfg(test)]
mod test {
    use super::*;
    use crate::fixtures::*;

    #[test]
    fn chunk_sizes() {
        assert_eq!(chunk(10), (1_000_000_000, 9));
        assert_eq!(chunk(16), (0x1000_0000, 7));
        assert_eq!(chunk(2), (0x8000_0000, 31));
        assert_eq!(chunk(36), (36u32.pow(6), 6));
    }

    #[test]
    fn small_values() {
        assert_eq!(U64::from_digit(255).to_str_radix(16), "ff");
        assert_eq!(U64::zero().to_str_radix(10), "0");
        assert_eq!(U64::zero().to_str_radix(2), "0");
        assert_eq!(U64::MAX.to_str_radix(10), "18446744073709551615");
        assert_eq!(U64::from_digit(35).to_str_radix(36), "z");
        // invalid radix falls back to decimal
        assert_eq!(U64::from_digit(255).to_str_radix(1), "255");
        assert_eq!(U64::from_digit(255).to_str_radix(37), "255");
    }

    #[test]
    fn wide_values() {
        // 2^128 - 1
        assert_eq!(U128::MAX.to_str_radix(10), "340282366920938463463374607431768211455");
        assert_eq!(U128::MAX.to_str_radix(16), "ffffffffffffffffffffffffffffffff");
        // a chunk of zeros in the middle
        let x = U128::from(1_000_000_000_000_000_000_000_000_000_000u128 + 7);
        assert_eq!(x.to_string(), "1000000000000000000000000000007");
        let x = U96::one().shift_left(64);
        assert_eq!(x.to_str_radix(16), "10000000000000000");
        assert_eq!(x.to_str_radix(2).len(), 65);
    }

    #[test]
    fn parse() {
        assert_eq!(U64::from_str_radix("ff", 16), Ok(U64::from_digit(255)));
        assert_eq!(U64::from_str_radix("FF", 16), Ok(U64::from_digit(255)));
        assert_eq!("18446744073709551615".parse::<U64>(), Ok(U64::MAX));
        // overflowing input wraps
        assert_eq!("18446744073709551616".parse::<U64>(), Ok(U64::zero()));
        assert_eq!(U64::from_str_radix("", 10), Err(Error::InvalidDigit));
        assert_eq!(U64::from_str_radix("12a", 10), Err(Error::InvalidDigit));
        assert_eq!(U64::from_str_radix("-1", 10), Err(Error::InvalidDigit));
        assert_eq!(U64::from_str_radix("1", 1), Err(Error::InvalidArgument));
        assert_eq!(U64::from_str_radix("1", 37), Err(Error::InvalidArgument));
        assert_eq!(
            "340282366920938463463374607431768211456".parse::<Magnitude>(),
            Ok(Magnitude::from_be_words(&[1, 0, 0, 0, 0]))
        );
    }

    #[test]
    fn round_trip_all_radices() {
        let mut rng = rng();
        for radix in 2..=36 {
            for _ in 0..ROUNDS / 8 + 1 {
                let x = U256::random(&mut rng).shift_right((rng.next_u32() % 256) as isize);
                let s = x.to_str_radix(radix);
                assert_eq!(s, big(&x).to_str_radix(radix));
                assert_eq!(U256::from_str_radix(&s, radix), Ok(x));
            }
        }
    }

    #[test]
    fn formatting() {
        let x = U64::from_digit(255);
        assert_eq!(format!("{}", x), "255");
        assert_eq!(format!("{:x}", x), "ff");
        assert_eq!(format!("{:#X}", x), "0xFF");
        assert_eq!(format!("{:#b}", x), "0b11111111");
        assert_eq!(format!("{:o}", x), "377");
        assert_eq!(format!("{:>6}", x), "   255");
        assert_eq!(format!("{:06}", x), "000255");
        assert_eq!(format!("{}", Magnitude::zero()), "0");
    }
}
