use crate::digit::{Digit, DIGIT_BITS};
use crate::Unsigned;

/// Compared to `num-bigint{,-dig}`, this is a truncating shift.
///
/// Note that "left" means "higher number".
pub(crate) fn shl_assign(digits: &mut [Digit], bits: usize) {
    let l = digits.len();
    let n_digits = bits / DIGIT_BITS;

    if n_digits >= l {
        digits.fill(0);
        return;
    }

    // shift up by n_digits
    digits.copy_within(..(l - n_digits), n_digits);
    digits[..n_digits].fill(0);

    // shift up sub-digit amount of bits
    let n_bits = bits % DIGIT_BITS;
    if n_bits > 0 {
        let mut carry = 0;
        for elem in digits[n_digits..].iter_mut() {
            let new_carry = *elem >> (DIGIT_BITS - n_bits);
            *elem = (*elem << n_bits) | carry;
            carry = new_carry;
        }
    }
}

/// Note that "right" means "lower number".
pub(crate) fn shr_assign(digits: &mut [Digit], bits: usize) {
    let l = digits.len();
    let n_digits = bits / DIGIT_BITS;

    if n_digits >= l {
        digits.fill(0);
        return;
    }

    // shift down by n_digits
    digits.copy_within(n_digits.., 0);
    digits[(l - n_digits)..].fill(0);

    let n_bits = bits % DIGIT_BITS;
    if n_bits > 0 {
        let mut borrow = 0;
        for elem in digits[..(l - n_digits)].iter_mut().rev() {
            let new_borrow = *elem << (DIGIT_BITS - n_bits);
            *elem = (*elem >> n_bits) | borrow;
            borrow = new_borrow;
        }
    }
}

impl<const L: usize> Unsigned<L> {
    /// `self << bits`, truncated to the width.
    ///
    /// A negative `bits` shifts right instead. Shifting by the width or more gives zero.
    pub fn shift_left(&self, bits: isize) -> Self {
        let mut result = *self;
        if bits >= 0 {
            shl_assign(&mut result.0, bits as usize);
        } else {
            shr_assign(&mut result.0, bits.unsigned_abs());
        }
        result
    }

    /// `self >> bits`, the low bits fall off.
    ///
    /// A negative `bits` shifts left instead.
    pub fn shift_right(&self, bits: isize) -> Self {
        let mut result = *self;
        if bits >= 0 {
            shr_assign(&mut result.0, bits as usize);
        } else {
            shl_assign(&mut result.0, bits.unsigned_abs());
        }
        result
    }
}
