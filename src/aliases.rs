//! Type aliases by bit-size.
//!
//! Widths are whole 32-bit words; `U32` stands in for every narrower type.

use crate::Unsigned;

pub type U32 = Unsigned<1>;
pub type U64 = Unsigned<2>;
pub type U96 = Unsigned<3>;
pub type U128 = Unsigned<4>;
pub type U160 = Unsigned<5>;
pub type U192 = Unsigned<6>;
pub type U224 = Unsigned<7>;
pub type U256 = Unsigned<8>;
pub type U512 = Unsigned<16>;
