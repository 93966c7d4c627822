/// A word on the machine. [`Unsigned`][crate::Unsigned] is composed of many digits.
///
/// Fixed at 32 bits on every architecture: widths, hashes and byte layouts
/// are all defined in terms of 32-bit words.
pub type Digit = u32;

/// Multiple [`Digit`]s, little-endian.
pub type Digits = [Digit];

/// Unsigned type with twice as many bits as [`Digit`].
pub(crate) type DoubleDigit = u64;
/// Signed type with twice as many bits as [`Digit`].
pub(crate) type SignedDoubleDigit = i64;

/// Bits per digit, as `usize` for index arithmetic.
pub(crate) const DIGIT_BITS: usize = Digit::BITS as usize;

/// Bytes per digit.
pub(crate) const DIGIT_BYTES: usize = DIGIT_BITS / 8;
