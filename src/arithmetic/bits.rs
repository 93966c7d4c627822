use crate::digit::{Digit, DIGIT_BITS};
use crate::numbers::bit_index;
use crate::{Result, Unsigned};

impl<const L: usize> Unsigned<L> {
    pub fn and(&self, other: &Self) -> Self {
        let mut x = *self;
        x.0.iter_mut().zip(other.0.iter()).for_each(|(a, b)| *a &= b);
        x
    }

    pub fn or(&self, other: &Self) -> Self {
        let mut x = *self;
        x.0.iter_mut().zip(other.0.iter()).for_each(|(a, b)| *a |= b);
        x
    }

    pub fn xor(&self, other: &Self) -> Self {
        let mut x = *self;
        x.0.iter_mut().zip(other.0.iter()).for_each(|(a, b)| *a ^= b);
        x
    }

    /// Flips all `32L` bits, so `x.not() == MAX - x`.
    pub fn not(&self) -> Self {
        let mut x = *self;
        x.0.iter_mut().for_each(|a| *a = !*a);
        x
    }

    /// `self | (1 << bit)`
    ///
    /// Bits at or above the width are dropped, leaving the value unchanged.
    /// Fails for negative `bit`.
    pub fn set_bit(&self, bit: isize) -> Result<Self> {
        self.with_bit(bit, |digit, mask| digit | mask)
    }

    /// `self & !(1 << bit)`
    pub fn clear_bit(&self, bit: isize) -> Result<Self> {
        self.with_bit(bit, |digit, mask| digit & !mask)
    }

    /// `self ^ (1 << bit)`
    pub fn flip_bit(&self, bit: isize) -> Result<Self> {
        self.with_bit(bit, |digit, mask| digit ^ mask)
    }

    fn with_bit(&self, bit: isize, f: impl FnOnce(Digit, Digit) -> Digit) -> Result<Self> {
        let bit = bit_index(bit)?;
        let mut x = *self;
        if let Some(digit) = x.0.get_mut(bit / DIGIT_BITS) {
            *digit = f(*digit, 1 << (bit % DIGIT_BITS));
        }
        Ok(x)
    }
}
