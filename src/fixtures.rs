//! Shared test helpers: a seeded rng and a `BigUint` oracle.

pub use num_bigint::BigUint;
pub use rand_core::RngCore;

pub use crate::aliases::*;
pub use crate::{Magnitude, Unsigned};

use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[cfg(not(feature = "extended-testing"))]
pub const ROUNDS: usize = 64;
#[cfg(feature = "extended-testing")]
pub const ROUNDS: usize = 4096;

/// Deterministic, so failures reproduce.
pub fn rng() -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(0x5EED)
}

pub fn big<const L: usize>(x: &Unsigned<L>) -> BigUint {
    BigUint::from_slice(x.as_le_digits())
}

pub fn big_magnitude(x: &Magnitude) -> BigUint {
    BigUint::from_slice(x.as_le_digits())
}

/// $2^{32L}$
pub fn modulus<const L: usize>() -> BigUint {
    BigUint::from(1u8) << (32 * L)
}
