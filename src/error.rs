use core::fmt;

use crate::storage::Slot;

/// Everything that can go wrong, none of it recoverable internally.
///
/// Wraparound and truncation are *not* errors; they are the documented
/// semantics of the fixed-width types.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// negative bit index, or parse radix outside `2..=36`
    InvalidArgument,
    /// divisor or modulus is zero
    DivisionByZero,
    /// exact extraction into a native integer that cannot hold the value
    NumericRange,
    /// string input is empty or contains a non-digit for its radix
    InvalidDigit,
    /// the storage backend failed at this slot
    Storage(Slot),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument => f.write_str("invalid argument"),
            Error::DivisionByZero => f.write_str("division by zero"),
            Error::NumericRange => f.write_str("value out of range of target type"),
            Error::InvalidDigit => f.write_str("invalid digit for radix"),
            Error::Storage(slot) => write!(f, "storage failure at slot {}", slot.0),
        }
    }
}

/// [`Error`] or success.
pub type Result<T> = core::result::Result<T, Error>;
