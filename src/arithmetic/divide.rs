use alloc::vec::Vec;
use core::cmp::Ordering;

use super::add::add_assign_carry;
use super::shift::{shl_assign, shr_assign};
use super::subtract::sbb;
use crate::digit::{Digit, DoubleDigit, SignedDoubleDigit, DIGIT_BITS};
use crate::numbers::{cmp_digits, significant};
use crate::{Error, Magnitude, Number, Result, Unsigned};

/// Divide a two digit numerator by a one digit divisor, returns quotient and remainder:
///
/// Note: the caller must ensure that both the quotient and remainder will fit into a single digit.
/// This is _not_ true for an arbitrary numerator/denominator.
///
/// REMARK: This is Knuth's operation c0), "memorizing the multiplication table in reverse."
#[inline]
pub fn div_digits(hi: Digit, lo: Digit, divisor: Digit) -> (Digit, Digit) {
    debug_assert!(hi < divisor);

    let x = ((hi as DoubleDigit) << DIGIT_BITS) + lo as DoubleDigit;
    let divisor = divisor as DoubleDigit;

    let q = x / divisor;
    let r = x % divisor;

    (q as Digit, r as Digit)
}

/// Divides the digits in-place by a non-zero digit, returning the remainder.
pub(crate) fn div_rem_assign_digit(number: &mut [Digit], divisor: Digit) -> Digit {
    debug_assert!(divisor != 0);
    let mut remainder = 0;

    // run down the digits, dividing each by divisor, while carrying along the remainder
    for digit in number.iter_mut().rev() {
        let (quotient, r) = div_digits(remainder, *digit, divisor);
        *digit = quotient;
        remainder = r;
    }

    remainder
}

/// "Multi-precision division of x by n".
///
/// Meaning: Return unique values `(q, r)` with `x = q*n + r`, and `0 <= r < n`,
/// as little-endian digits (not necessarily normalized).
///
/// Knuth, TAOCP vol 2 section 4.3.1, algorithm D(ivision), with the
/// single-digit divisor as fast path.
pub(crate) fn div_rem(x: &[Digit], n: &[Digit]) -> Result<(Vec<Digit>, Vec<Digit>)> {
    let x = significant(x);
    let n = significant(n);

    if n.is_empty() {
        return Err(Error::DivisionByZero);
    }

    // Required or the q_len calculation below can underflow:
    if cmp_digits(x, n) == Ordering::Less {
        return Ok((Vec::new(), x.to_vec()));
    }

    if n.len() == 1 {
        let mut q = x.to_vec();
        let r = div_rem_assign_digit(&mut q, n[0]);
        return Ok((q, alloc::vec![r]));
    }

    // This shift has no influence on `q`, and will be reverted for `r` at the end.
    let shift_bits = n[n.len() - 1].leading_zeros() as usize;

    let mut v = n.to_vec();
    shl_assign(&mut v, shift_bits);
    // one more digit on top to catch what is shifted out of x
    let mut u = x.to_vec();
    u.push(0);
    shl_assign(&mut u, shift_bits);

    let t = v.len();
    let q_len = u.len() - t;
    let mut q = alloc::vec![0; q_len];

    let v_top = v[t - 1] as DoubleDigit;
    let v_next = v[t - 2] as DoubleDigit;
    let base = Digit::MAX as DoubleDigit;

    for j in (0..q_len).rev() {
        // estimate the quotient digit from the top three digits of the current remainder
        let numerator = ((u[j + t] as DoubleDigit) << DIGIT_BITS) | u[j + t - 1] as DoubleDigit;
        let mut q_hat = numerator / v_top;
        let mut r_hat = numerator % v_top;

        while q_hat > base || q_hat * v_next > ((r_hat << DIGIT_BITS) | u[j + t - 2] as DoubleDigit) {
            q_hat -= 1;
            r_hat += v_top;
            if r_hat > base {
                break;
            }
        }

        // u[j..=j+t] -= q_hat * v
        let mut borrow: SignedDoubleDigit = 0;
        let mut carry: DoubleDigit = 0;
        for i in 0..t {
            let p = q_hat * v[i] as DoubleDigit + carry;
            carry = p >> DIGIT_BITS;
            u[i + j] = sbb(u[i + j], p as Digit, &mut borrow);
        }
        let top = u[j + t] as SignedDoubleDigit - carry as SignedDoubleDigit + borrow;
        u[j + t] = top as Digit;

        // q_hat was one too large (rare): add v back, the carry cancels the borrow
        if top < 0 {
            q_hat -= 1;
            add_assign_carry(&mut u[j..=j + t], &v);
        }

        q[j] = q_hat as Digit;
    }

    u.truncate(t);
    shr_assign(&mut u, shift_bits);
    Ok((q, u))
}

impl Magnitude {
    /// `(self / divisor, self % divisor)` at unbounded precision.
    pub fn div_rem<N: Number + ?Sized>(&self, divisor: &N) -> Result<(Magnitude, Magnitude)> {
        let (q, r) = div_rem(&self.0, divisor.significant_digits())?;
        Ok((Magnitude::from_le_digits(q), Magnitude::from_le_digits(r)))
    }
}

impl<const L: usize> Unsigned<L> {
    /// `(self / divisor, self % divisor)`
    ///
    /// Fails for a zero divisor. Neither part can exceed the width.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        let (q, r) = div_rem(&self.0, &divisor.0)?;
        Ok((Self::from_le_digits(&q), Self::from_le_digits(&r)))
    }

    /// Alias for [`Self::div_rem`].
    pub fn divide_and_remainder(&self, divisor: &Self) -> Result<(Self, Self)> {
        self.div_rem(divisor)
    }

    /// `self / divisor`
    pub fn divide(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    /// `self % divisor`
    pub fn modulo(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    /// Alias for [`Self::modulo`].
    pub fn remainder(&self, divisor: &Self) -> Result<Self> {
        self.modulo(divisor)
    }
}
