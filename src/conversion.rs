//! Conversions to and from native integers, floats, bytes and [`BigUint`].
//!
//! Byte encodings are big-endian throughout. There are two: the minimal one
//! (`ceil(bit_length / 8)` bytes, empty for zero), and the fixed-width one of
//! exactly `4L` bytes used for storage.

use alloc::vec::Vec;
use core::convert::TryFrom;

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::digit::{Digit, DIGIT_BITS, DIGIT_BYTES};
use crate::{Error, Magnitude, Number, Unsigned};

mod string;

/// Minimal big-endian bytes of little-endian digits, no leading zero byte.
fn minimal_be_bytes(digits: &[Digit]) -> Vec<u8> {
    let mut bytes: Vec<u8> = digits.iter().rev().flat_map(|digit| digit.to_be_bytes()).collect();
    let leading_zeros = bytes.iter().take_while(|&&b| b == 0).count();
    bytes.drain(..leading_zeros);
    bytes
}

/// Packs big-endian bytes into little-endian digits, four per digit,
/// right-aligned (a short leading chunk is zero-padded).
fn le_digits_from_be_bytes(bytes: &[u8]) -> Vec<Digit> {
    bytes
        .rchunks(DIGIT_BYTES)
        .map(|chunk| chunk.iter().fold(0, |digit, &b| (digit << 8) | b as Digit))
        .collect()
}

impl<const L: usize> Unsigned<L> {
    /// The low 8 bits, the rest is dropped.
    pub fn low_u8(&self) -> u8 {
        self.0[0] as u8
    }

    pub fn low_u16(&self) -> u16 {
        self.0[0] as u16
    }

    /// The low 32 bits (`intValue`).
    pub fn low_u32(&self) -> u32 {
        self.0[0]
    }

    /// The low 64 bits (`longValue`).
    pub fn low_u64(&self) -> u64 {
        self.low_u128() as u64
    }

    fn low_u128(&self) -> u128 {
        self.0.iter().take(4).rev().fold(0, |acc, &digit| (acc << DIGIT_BITS) | digit as u128)
    }

    /// Minimal big-endian encoding; zero is the empty vector.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        minimal_be_bytes(&self.0)
    }

    /// Exactly [`Self::BYTES`] big-endian bytes, including leading zeros.
    pub fn to_fixed_be_bytes(&self) -> Vec<u8> {
        self.0.iter().rev().flat_map(|digit| digit.to_be_bytes()).collect()
    }

    /// Big-endian bytes of any length; bytes beyond the width are dropped
    /// from the front, a short input is zero-extended.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        Self::from_le_digits(&le_digits_from_be_bytes(bytes))
    }

    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_slice(self.significant_digits())
    }

    /// Truncating.
    pub fn from_biguint(x: &BigUint) -> Self {
        Self::from_le_digits(&x.to_u32_digits())
    }

    /// Nearest representable value, infinity if out of range.
    pub fn to_f64(&self) -> f64 {
        self.to_biguint().to_f64().unwrap_or(f64::INFINITY)
    }

    pub fn to_f32(&self) -> f32 {
        self.to_biguint().to_f32().unwrap_or(f32::INFINITY)
    }
}

impl Magnitude {
    pub fn to_be_bytes(&self) -> Vec<u8> {
        minimal_be_bytes(&self.0)
    }

    /// Leading zero bytes are ignored.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        Self::from_le_digits(le_digits_from_be_bytes(bytes))
    }

    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_slice(&self.0)
    }

    pub fn from_biguint(x: &BigUint) -> Self {
        Self::from_le_digits(x.to_u32_digits())
    }
}

impl<const L: usize> From<u32> for Unsigned<L> {
    fn from(x: u32) -> Self {
        Self::from_digit(x)
    }
}

impl<const L: usize> From<u64> for Unsigned<L> {
    /// Truncating for `L = 1`.
    fn from(x: u64) -> Self {
        Self::from_u64(x)
    }
}

impl<const L: usize> From<u128> for Unsigned<L> {
    /// Truncating for `L < 4`.
    fn from(x: u128) -> Self {
        Self::from_le_digits(&[x as Digit, (x >> 32) as Digit, (x >> 64) as Digit, (x >> 96) as Digit])
    }
}

impl<const L: usize> From<&Unsigned<L>> for BigUint {
    fn from(x: &Unsigned<L>) -> Self {
        x.to_biguint()
    }
}

impl<const L: usize> From<Unsigned<L>> for BigUint {
    fn from(x: Unsigned<L>) -> Self {
        x.to_biguint()
    }
}

impl<const L: usize> From<&BigUint> for Unsigned<L> {
    /// Truncating.
    fn from(x: &BigUint) -> Self {
        Self::from_biguint(x)
    }
}

impl From<&Magnitude> for BigUint {
    fn from(x: &Magnitude) -> Self {
        x.to_biguint()
    }
}

impl From<&BigUint> for Magnitude {
    fn from(x: &BigUint) -> Self {
        Self::from_biguint(x)
    }
}

/// Exact extraction: fails with [`Error::NumericRange`] unless the value fits.
macro_rules! impl_try_from_unsigned {
    ($($t:ty),*) => {$(
        impl<const L: usize> TryFrom<&Unsigned<L>> for $t {
            type Error = Error;

            fn try_from(x: &Unsigned<L>) -> Result<Self, Error> {
                // one bit less for the sign
                let available = if <$t>::MIN == 0 { <$t>::BITS } else { <$t>::BITS - 1 };
                if x.bit_length() > available as usize {
                    return Err(Error::NumericRange);
                }
                Ok(x.low_u128() as $t)
            }
        }

        impl<const L: usize> TryFrom<Unsigned<L>> for $t {
            type Error = Error;

            fn try_from(x: Unsigned<L>) -> Result<Self, Error> {
                <$t>::try_from(&x)
            }
        }
    )*};
}

impl_try_from_unsigned!(i8, i16, i32, i64, u8, u16, u32, u64, u128);

#[cfg(test)]
mod test {
    use super::*;
    use crate::fixtures::*;
    use hex_literal::hex;

    #[test]
    fn low_views_truncate() {
        let x = U128::from(0x0102_0304_0506_0708_090A_0B0C_0D0E_0F10u128);
        assert_eq!(x.low_u8(), 0x10);
        assert_eq!(x.low_u16(), 0x0F10);
        assert_eq!(x.low_u32(), 0x0D0E_0F10);
        assert_eq!(x.low_u64(), 0x090A_0B0C_0D0E_0F10);
        assert_eq!(U32::from_digit(7).low_u64(), 7);
    }

    #[test]
    fn exact_extraction() {
        let x = U256::from_u64(300);
        assert_eq!(u8::try_from(&x), Err(Error::NumericRange));
        assert_eq!(i8::try_from(&x), Err(Error::NumericRange));
        assert_eq!(u16::try_from(&x), Ok(300));
        assert_eq!(i16::try_from(x), Ok(300));

        assert_eq!(u8::try_from(&U64::from_digit(255)), Ok(255));
        assert_eq!(i8::try_from(&U64::from_digit(128)), Err(Error::NumericRange));
        assert_eq!(i8::try_from(&U64::from_digit(127)), Ok(127));

        assert_eq!(i32::try_from(&U64::from_digit(0x8000_0000)), Err(Error::NumericRange));
        assert_eq!(u32::try_from(&U64::from_digit(0x8000_0000)), Ok(0x8000_0000));
        assert_eq!(i64::try_from(&U64::MAX), Err(Error::NumericRange));
        assert_eq!(u64::try_from(&U64::MAX), Ok(u64::MAX));

        assert_eq!(u128::try_from(&U128::MAX), Ok(u128::MAX));
        assert_eq!(u128::try_from(&U160::MAX), Err(Error::NumericRange));
        assert_eq!(u64::try_from(&U512::zero()), Ok(0));
    }

    #[test]
    fn minimal_bytes() {
        assert_eq!(U64::zero().to_be_bytes(), Vec::<u8>::new());
        assert_eq!(Magnitude::zero().to_be_bytes(), Vec::<u8>::new());
        assert_eq!(U64::from_digit(1).to_be_bytes(), vec![1]);
        assert_eq!(U64::from_digit(0x100).to_be_bytes(), vec![1, 0]);
        assert_eq!(U64::from_u64(0x80_0000_0000).to_be_bytes(), hex!("80 00 00 00 00").to_vec());
        assert_eq!(U64::MAX.to_be_bytes().len(), 8);
        for bits in 1..64 {
            let x = U64::one().shift_left(bits - 1);
            assert_eq!(x.to_be_bytes().len(), (bits as usize + 7) / 8);
        }
    }

    #[test]
    fn fixed_bytes() {
        assert_eq!(U64::zero().to_fixed_be_bytes(), vec![0; 8]);
        assert_eq!(U96::from_digit(0x0102_0304).to_fixed_be_bytes(), hex!("00000000 00000000 01020304").to_vec());
        assert_eq!(U256::BYTES, 32);
        assert_eq!(U256::MAX.to_fixed_be_bytes().len(), U256::BYTES);
    }

    #[test]
    fn from_bytes_packs_right_aligned() {
        let x = U64::from_be_bytes(&hex!("01 02 03 04 05"));
        assert_eq!(x, U64::from_u64(0x01_0203_0405));

        // wider than the type: the front is dropped
        let x = U32::from_be_bytes(&hex!("AA BB CC DD EE"));
        assert_eq!(x, U32::from_digit(0xBBCC_DDEE));

        assert!(U64::from_be_bytes(&[]).is_zero());
        assert_eq!(Magnitude::from_be_bytes(&hex!("00 00 00 00 00 07")), Magnitude::from(7u32));
    }

    #[test]
    fn bytes_round_trip() {
        let mut rng = rng();
        for _ in 0..ROUNDS {
            let x = U160::random(&mut rng).shift_right((rng.next_u32() % 160) as isize);
            assert_eq!(U160::from_be_bytes(&x.to_be_bytes()), x);
            assert_eq!(U160::from_be_bytes(&x.to_fixed_be_bytes()), x);
            assert_eq!(BigUint::from_bytes_be(&x.to_be_bytes()), big(&x));
        }
    }

    #[test]
    fn biguint() {
        let mut rng = rng();
        for _ in 0..ROUNDS {
            let x = U256::random(&mut rng);
            let b = x.to_biguint();
            assert_eq!(U256::from_biguint(&b), x);
            assert_eq!(Magnitude::from_biguint(&b), x.to_magnitude());
            assert_eq!(BigUint::from(&x), b);
        }
        // truncation
        let wide = BigUint::from(1u8) << 64usize;
        assert!(U64::from_biguint(&wide).is_zero());
        assert_eq!(U96::from(&wide), U96::from_u64(1).shift_left(64));
    }

    #[test]
    fn floats() {
        assert_eq!(U64::zero().to_f64(), 0.0);
        assert_eq!(U64::from_u64(1 << 53).to_f64(), 9007199254740992.0);
        assert_eq!(U64::MAX.to_f64(), 18446744073709551615.0);
        assert_eq!(U64::from_digit(3).to_f32(), 3.0);
        assert_eq!(U512::MAX.to_f32(), f32::INFINITY);
        assert!(U512::MAX.to_f64().is_finite());
    }

    #[test]
    fn native_constructors() {
        assert_eq!(U32::from(u64::MAX), U32::MAX);
        assert_eq!(U128::from(u128::MAX), U128::MAX);
        assert_eq!(U64::from(u128::MAX), U64::MAX);
        assert_eq!(U256::from(5u32), U256::from_digit(5));
    }
}
