//! Arithmetic "$\text{mod } 2^{32L}$" on [`Unsigned`], that is, dropping all
//! carries and borrows, plus unbounded arithmetic on [`Magnitude`].
//!
//! Each submodule has two layers: free functions on raw little-endian digit
//! slices, which do the actual work, and the methods on the number types
//! built from them. Operator traits are collected in [`impls`].
//!
//! The one place where the fixed width does not bound an intermediate is
//! [`modular`]: there, sums and products are taken as [`Magnitude`]s and only
//! reduced by the explicit modulus.
//!
//! [`Unsigned`]: crate::Unsigned
//! [`Magnitude`]: crate::Magnitude

mod add;
mod bits;
pub(crate) mod divide;
mod impls;
mod modular;
pub(crate) mod multiply;
pub(crate) mod shift;
mod subtract;
