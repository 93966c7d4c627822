//! Fixed-width unsigned integers, as used for token balances and supplies.
//!
//! [`Unsigned<L>`] holds `L` 32-bit words and wraps around $2^{32L}$: overflow
//! and underflow are not errors but the arithmetic of the type. The one
//! exception is modular arithmetic ([`Unsigned::add_mod`], [`Unsigned::mul_mod`]),
//! whose intermediates are unbounded [`Magnitude`]s.
//!
//! Values convert from and to native integers, [`num_bigint::BigUint`],
//! big-endian bytes and radix 2 to 36 strings, and persist themselves through
//! any [`Storage`] backend as fixed-size blobs.
//!
//! ```
//! use fixed_unsigned::U64;
//!
//! let x = U64::from_digit(0xFFFF_FFFF) + U64::one();
//! assert_eq!(x.to_str_radix(16), "100000000");
//! assert_eq!(U64::zero() - U64::one(), U64::MAX);
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

delog::generate_macros!();

mod aliases;
pub use aliases::*;
mod arithmetic;
mod conversion;
mod digit;
pub use digit::{Digit, Digits};
mod error;
pub use error::{Error, Result};
mod numbers;
pub use numbers::{Magnitude, Number, Unsigned};
mod storage;
pub use storage::{Bindings, MemoryStorage, Persisted, Slot, Storable, Storage};

#[cfg(test)]
mod fixtures;
