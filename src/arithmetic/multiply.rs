use alloc::vec::Vec;
use core::ops::Mul;

use crate::digit::{Digit, DoubleDigit, DIGIT_BITS};
use crate::{Magnitude, Number, Unsigned};

/// Schoolbook (operand-scanning) product of `lhs` and `rhs`, written to `product`.
///
/// This just drops the digits of `lhs * rhs` that do not fit in `product`;
/// they are never computed.
pub(crate) fn dropping_mul(product: &mut [Digit], lhs: &[Digit], rhs: &[Digit]) {
    product.fill(0);
    let capacity = product.len();

    for (i, &a) in lhs.iter().enumerate().take(capacity) {
        if a == 0 {
            continue;
        }
        let mut carry = DoubleDigit::default();
        for (j, &b) in rhs.iter().enumerate() {
            let k = i + j;
            if k >= capacity {
                break;
            }
            // (2^32 - 1)^2 + 2 (2^32 - 1) = 2^64 - 1, no overflow
            let t = (a as DoubleDigit) * (b as DoubleDigit) + product[k] as DoubleDigit + carry;
            product[k] = t as Digit;
            carry = t >> DIGIT_BITS;
        }
        // row i has not touched this digit yet
        if i + rhs.len() < capacity {
            product[i + rhs.len()] = carry as Digit;
        }
    }
}

/// `digits = digits * factor + summand`, growing by a digit when needed.
pub(crate) fn mul_add_digit(digits: &mut Vec<Digit>, factor: Digit, summand: Digit) {
    let mut carry = summand as DoubleDigit;
    for digit in digits.iter_mut() {
        let t = (*digit as DoubleDigit) * (factor as DoubleDigit) + carry;
        *digit = t as Digit;
        carry = t >> DIGIT_BITS;
    }
    if carry != 0 {
        digits.push(carry as Digit);
    }
}

impl<const L: usize> Unsigned<L> {
    /// `self * factor`, wrapping around $2^{32L}$.
    pub fn wrapping_mul(&self, factor: &Self) -> Self {
        let mut product = Self::ZERO;
        dropping_mul(&mut product.0, self.significant_digits(), factor.significant_digits());
        product
    }

    /// `self ** exponent`, wrapping around $2^{32L}$.
    ///
    /// Square-and-multiply; every intermediate product is truncated, so the
    /// result is $x^e \text{ mod } 2^{32L}$. `x.wrapping_pow(0)` is one, also for `x = 0`.
    pub fn wrapping_pow(&self, exponent: u32) -> Self {
        let mut result = Self::one();
        let mut base = *self;
        let mut exponent = exponent;

        while exponent > 0 {
            if exponent & 1 == 1 {
                result = result.wrapping_mul(&base);
            }
            exponent >>= 1;
            if exponent > 0 {
                base = base.wrapping_mul(&base);
            }
        }
        result
    }

    /// Same as [`Self::wrapping_pow`]; there is no other kind.
    pub fn pow(&self, exponent: u32) -> Self {
        self.wrapping_pow(exponent)
    }
}

// Multiplication in Magnitude, the full product

impl Mul for &Magnitude {
    type Output = Magnitude;

    fn mul(self, factor: Self) -> Magnitude {
        if self.is_zero() || factor.is_zero() {
            return Magnitude::zero();
        }
        let mut product = alloc::vec![0; self.len() + factor.len()];
        dropping_mul(&mut product, &self.0, &factor.0);
        Magnitude::from_le_digits(product)
    }
}
