//! The word-array core: [`Magnitude`], [`Unsigned`] and the [`Number`] view they share.
//!
//! Both store digits little-endian, i.e. index 0 is the least significant word.
//! The canonical orientation of the outside world (int arrays, byte strings)
//! is big-endian; conversions flip at the boundary.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::convert::TryFrom;

use rand_core::RngCore;
use zeroize::Zeroize;

use crate::digit::{Digit, DIGIT_BITS};
use crate::{Error, Result};

mod trait_implementations;

/// Read-only view of a number as normalized little-endian digits.
///
/// Implementors only provide [`Number::significant_digits`], everything
/// else is derived from it.
pub trait Number {
    /// The digits up to and including the most significant non-zero one.
    ///
    /// Empty iff the number is zero.
    fn significant_digits(&self) -> &[Digit];

    /// 0 if zero, else index + 1 of last non-zero digit
    fn len(&self) -> usize {
        self.significant_digits().len()
    }

    fn is_zero(&self) -> bool {
        self.len() == 0
    }

    fn leading_digit(&self) -> Option<Digit> {
        self.significant_digits().last().copied()
    }

    /// Number of bits required to represent this number in binary (0 for zero).
    fn bit_length(&self) -> usize {
        bit_length(self.significant_digits())
    }

    /// `(self & (1 << bit)) != 0`
    ///
    /// Bits beyond the number read as unset. Fails for negative `bit`.
    fn test_bit(&self, bit: isize) -> Result<bool> {
        let bit = bit_index(bit)?;
        let digits = self.significant_digits();
        let i = bit / DIGIT_BITS;
        Ok(i < digits.len() && (digits[i] >> (bit % DIGIT_BITS)) & 1 != 0)
    }

    /// Index of the right-most set bit, `None` for zero.
    fn lowest_set_bit(&self) -> Option<usize> {
        self.significant_digits()
            .iter()
            .enumerate()
            .find(|(_, &d)| d != 0)
            .map(|(i, d)| i * DIGIT_BITS + d.trailing_zeros() as usize)
    }

    /// `hash = 31*hash + word`, words most significant first.
    ///
    /// Reproduces the hash of the reference arbitrary-precision integer
    /// bit for bit, so values can be compared across systems by hash.
    fn hash_code(&self) -> i32 {
        self.significant_digits()
            .iter()
            .rev()
            .fold(0i32, |hash, &word| hash.wrapping_mul(31).wrapping_add(word as i32))
    }

    /// Big-endian words, without leading zero words.
    fn to_be_words(&self) -> Vec<Digit> {
        self.significant_digits().iter().rev().copied().collect()
    }
}

/// Strips the zero digits above the most significant non-zero one.
pub(crate) fn significant(digits: &[Digit]) -> &[Digit] {
    let l = digits.iter().rposition(|&d| d != 0).map_or(0, |i| i + 1);
    &digits[..l]
}

pub(crate) fn bit_length(digits: &[Digit]) -> usize {
    let digits = significant(digits);
    match digits.last() {
        Some(leading) => digits.len() * DIGIT_BITS - leading.leading_zeros() as usize,
        None => 0,
    }
}

/// Length first, then digit by digit from the most significant one.
///
/// This is *little endian* ordering, as opposed to the default
/// ordering on arrays and slices!
pub(crate) fn cmp_digits(m: &[Digit], n: &[Digit]) -> Ordering {
    let m = significant(m);
    let n = significant(n);
    match m.len().cmp(&n.len()) {
        Ordering::Equal => {}
        not_equal => return not_equal,
    }
    m.iter().rev().cmp(n.iter().rev())
}

/// Bit addresses are signed at the API surface; negative ones are rejected here.
pub(crate) fn bit_index(bit: isize) -> Result<usize> {
    usize::try_from(bit).map_err(|_| Error::InvalidArgument)
}

/// Normalized sequence of 32-bit words of unbounded length.
///
/// Internal representation as little-endian, with no zero digit at the top;
/// the empty sequence is zero. This is the type in which intermediates wider
/// than any fixed width are computed (see [`Unsigned::add_mod`]).
#[derive(Clone, Default, Eq, Hash, PartialEq, Zeroize)]
pub struct Magnitude(pub(crate) Vec<Digit>);

impl Magnitude {
    pub fn zero() -> Self {
        Self(Vec::new())
    }

    pub fn one() -> Self {
        Self(alloc::vec![1])
    }

    /// Takes ownership of little-endian digits, stripping the zero ones on top.
    pub fn from_le_digits(mut digits: Vec<Digit>) -> Self {
        let l = significant(&digits).len();
        digits.truncate(l);
        Self(digits)
    }

    /// The `normalize` of big-endian words.
    pub fn from_be_words(words: &[Digit]) -> Self {
        Self::from_le_digits(words.iter().rev().copied().collect())
    }

    pub fn as_le_digits(&self) -> &[Digit] {
        &self.0
    }

    pub fn into_le_digits(self) -> Vec<Digit> {
        self.0
    }

    /// Drop all but the lowest `digits` words.
    pub fn truncated(&self, digits: usize) -> Self {
        let l = digits.min(self.0.len());
        Self::from_le_digits(self.0[..l].to_vec())
    }
}

impl Number for Magnitude {
    fn significant_digits(&self) -> &[Digit] {
        &self.0
    }
}

impl From<Digit> for Magnitude {
    fn from(digit: Digit) -> Self {
        Self::from_le_digits(alloc::vec![digit])
    }
}

impl From<u64> for Magnitude {
    fn from(x: u64) -> Self {
        Self::from_le_digits(alloc::vec![x as Digit, (x >> DIGIT_BITS) as Digit])
    }
}

/// Unsigned integer with `L` digits (L for length), wrapping around $2^{32L}$.
///
/// Internal representation as little-endian. The significant digits form the
/// [`Magnitude`]; digits above it are zero.
///
/// All arithmetic truncates to `L` digits, except where a method documents
/// otherwise. `L` must be at least 1, which is checked at compile time:
///
/// ```compile_fail
/// let empty = fixed_unsigned::Unsigned::<0>::zero();
/// ```
#[derive(Clone, Copy, Eq, Hash, Zeroize)]
pub struct Unsigned<const L: usize>(pub(crate) [Digit; L]);

impl<const L: usize> Number for Unsigned<L> {
    fn significant_digits(&self) -> &[Digit] {
        significant(&self.0)
    }
}

// c'tors and such
impl<const L: usize> Unsigned<L> {
    /// Capacity in digits.
    pub const DIGITS: usize = L;
    /// Capacity in bits.
    pub const BITS: usize = L * DIGIT_BITS;
    /// Size of the fixed-width big-endian encoding.
    pub const BYTES: usize = L * crate::digit::DIGIT_BYTES;

    const NON_EMPTY: () = assert!(L > 0, "Unsigned<L> needs at least one digit");

    // every value is built from one of these two
    pub const ZERO: Self = {
        let () = Self::NON_EMPTY;
        Self([0; L])
    };
    /// $2^{32L} - 1$, the maximum-value template of the type.
    pub const MAX: Self = {
        let () = Self::NON_EMPTY;
        Self([Digit::MAX; L])
    };

    pub fn zero() -> Self {
        Self::ZERO
    }

    pub fn one() -> Self {
        Self::from_digit(1)
    }

    pub fn max_value() -> Self {
        Self::MAX
    }

    pub fn from_digit(digit: Digit) -> Self {
        let mut x = Self::ZERO;
        x.0[0] = digit;
        x
    }

    /// Truncates to the low `32L` bits.
    pub fn from_u64(x: u64) -> Self {
        Self::from_le_digits(&[x as Digit, (x >> DIGIT_BITS) as Digit])
    }

    /// Little-endian digits; excess digits at the top are dropped.
    pub fn from_le_digits(slice: &[Digit]) -> Self {
        let mut x = Self::ZERO;
        let l = slice.len().min(L);
        x.0[..l].copy_from_slice(&slice[..l]);
        x
    }

    /// Big-endian words; excess leading words are dropped.
    pub fn from_be_words(words: &[Digit]) -> Self {
        let mut x = Self::ZERO;
        for (digit, word) in x.0.iter_mut().zip(words.iter().rev()) {
            *digit = *word;
        }
        x
    }

    /// Truncating embedding of an unbounded magnitude.
    pub fn from_magnitude(magnitude: &Magnitude) -> Self {
        Self::from_le_digits(magnitude.as_le_digits())
    }

    pub fn to_magnitude(&self) -> Magnitude {
        Magnitude(self.significant_digits().to_vec())
    }

    /// All `L` digits, including zero digits at the top.
    pub fn as_le_digits(&self) -> &[Digit; L] {
        &self.0
    }

    /// Change of width: truncates when `M < L`, zero-extends otherwise.
    pub fn resize<const M: usize>(&self) -> Unsigned<M> {
        Unsigned::from_le_digits(&self.0)
    }

    /// Uniformly distributed over `0..=MAX`.
    pub fn random(mut rng: impl RngCore) -> Self {
        let mut x = Self::ZERO;
        for digit in x.0.iter_mut() {
            *digit = rng.next_u32();
        }
        x
    }
}
