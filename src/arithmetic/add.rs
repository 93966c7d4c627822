use core::ops::Add;

use crate::digit::{Digit, DoubleDigit, DIGIT_BITS};
use crate::{Magnitude, Number, Unsigned};

//
// from num-bigint
//

// Add with carry:
#[inline]
pub fn adc(a: Digit, b: Digit, acc: &mut DoubleDigit) -> Digit {
    *acc += a as DoubleDigit;
    *acc += b as DoubleDigit;
    let lo = *acc as Digit;
    *acc >>= DIGIT_BITS;
    lo
}

/// Two argument addition of raw slices:
/// a += b
///
/// The caller _must_ ensure that a is at least as long as b.
/// The carry out of the top of `a` is returned; dropping it means wrapping.
#[inline]
pub(crate) fn add_assign_carry(a: &mut [Digit], b: &[Digit]) -> Digit {
    debug_assert!(a.len() >= b.len());

    let mut carry = 0;
    let (a_lo, a_hi) = a.split_at_mut(b.len());

    for (a, b) in a_lo.iter_mut().zip(b) {
        *a = adc(*a, *b, &mut carry);
    }

    if carry != 0 {
        for a in a_hi {
            *a = adc(*a, 0, &mut carry);
            if carry == 0 {
                break;
            }
        }
    }

    carry as Digit
}

// Addition in Unsigned / 2^32L

impl<const L: usize> Unsigned<L> {
    /// `self + summand`, wrapping around $2^{32L}$.
    pub fn wrapping_add(&self, summand: &Self) -> Self {
        let mut sum = *self;
        add_assign_carry(&mut sum.0, &summand.0);
        sum
    }

    /// `self + summand`, or `None` if a carry leaves the top digit.
    pub fn checked_add(&self, summand: &Self) -> Option<Self> {
        let mut sum = *self;
        let carry = add_assign_carry(&mut sum.0, &summand.0);
        (carry == 0).then(|| sum)
    }

    /// `self + 1`; `MAX.inc()` is zero.
    pub fn inc(&self) -> Self {
        let mut sum = *self;
        add_assign_carry(&mut sum.0, &[1]);
        sum
    }
}

// Addition in Magnitude, never truncated

impl Add for &Magnitude {
    type Output = Magnitude;

    fn add(self, summand: Self) -> Magnitude {
        let (long, short) = if self.len() >= summand.len() { (self, summand) } else { (summand, self) };
        let mut sum = long.0.clone();
        sum.push(0);
        add_assign_carry(&mut sum, &short.0);
        Magnitude::from_le_digits(sum)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fixtures::*;

    #[test]
    fn carry_into_second_word() {
        // fits, since the type holds two words
        let x = U64::from_digit(0xFFFF_FFFF).wrapping_add(&U64::one());
        assert_eq!(x, U64::from_u64(0x1_0000_0000));
    }

    #[test]
    fn wraps_at_width() {
        assert_eq!(U64::MAX.wrapping_add(&U64::one()), U64::zero());
        assert_eq!(U64::MAX.wrapping_add(&U64::MAX), U64::from_u64(u64::MAX - 1));
        assert_eq!(U64::MAX.checked_add(&U64::one()), None);
        assert_eq!(U64::one().checked_add(&U64::one()), Some(U64::from_digit(2)));
    }

    #[test]
    fn inc() {
        assert_eq!(U64::zero().inc(), U64::one());
        assert_eq!(U64::from_digit(0xFFFF_FFFF).inc(), U64::from_u64(1 << 32));
        assert_eq!(U64::MAX.inc(), U64::zero());
    }

    #[test]
    fn magnitude_grows() {
        let a = Magnitude::from(u64::MAX);
        let sum = &a + &Magnitude::one();
        assert_eq!(sum.as_le_digits(), &[0, 0, 1]);
        assert_eq!(&Magnitude::zero() + &Magnitude::zero(), Magnitude::zero());
        assert_eq!(&Magnitude::one() + &a, sum);
    }

    #[test]
    fn against_biguint() {
        let mut rng = rng();
        for _ in 0..ROUNDS {
            let a = U160::random(&mut rng);
            let b = U160::random(&mut rng);
            let expected = (big(&a) + big(&b)) % modulus::<5>();
            assert_eq!(big(&a.wrapping_add(&b)), expected);
        }
    }
}
