use crate::{Magnitude, Number, Result, Unsigned};

impl<const L: usize> Unsigned<L> {
    /// `(self + summand) mod modulus`, without wrapping the sum first.
    ///
    /// The modulus may be wider than the operands; the reduced value is
    /// truncated to `L` digits. Fails for a zero modulus.
    pub fn add_mod<N: Number + ?Sized>(&self, summand: &Self, modulus: &N) -> Result<Self> {
        let sum = &self.to_magnitude() + &summand.to_magnitude();
        let (_, r) = sum.div_rem(modulus)?;
        Ok(Self::from_magnitude(&r))
    }

    /// `(self * factor) mod modulus`, from the full `2L`-digit product.
    pub fn mul_mod<N: Number + ?Sized>(&self, factor: &Self, modulus: &N) -> Result<Self> {
        let product: Magnitude = &self.to_magnitude() * &factor.to_magnitude();
        let (_, r) = product.div_rem(modulus)?;
        Ok(Self::from_magnitude(&r))
    }
}
