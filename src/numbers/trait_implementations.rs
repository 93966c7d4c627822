use core::{cmp::Ordering, fmt};

use super::{cmp_digits, Magnitude, Number, Unsigned};

// Since we store little-endian, comparison needs to start at the last
// digit, instead of at the first as the derived / default implementation would.
impl<const L: usize> Ord for Unsigned<L> {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_digits(&self.0, &other.0)
    }
}

impl<const M: usize, const N: usize> PartialOrd<Unsigned<N>> for Unsigned<M> {
    /// This is *little endian* ordering, as opposed to the default
    /// ordering on arrays and slices!
    fn partial_cmp(&self, other: &Unsigned<N>) -> Option<Ordering> {
        Some(cmp_digits(&self.0, &other.0))
    }
}

/// Values of different widths are equal if their magnitudes are.
impl<const M: usize, const N: usize> PartialEq<Unsigned<N>> for Unsigned<M> {
    fn eq(&self, other: &Unsigned<N>) -> bool {
        self.significant_digits() == other.significant_digits()
    }
}

impl<const L: usize> PartialEq<Magnitude> for Unsigned<L> {
    fn eq(&self, other: &Magnitude) -> bool {
        self.significant_digits() == other.significant_digits()
    }
}

impl<const L: usize> PartialEq<Unsigned<L>> for Magnitude {
    fn eq(&self, other: &Unsigned<L>) -> bool {
        other == self
    }
}

impl Ord for Magnitude {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_digits(&self.0, &other.0)
    }
}

impl PartialOrd for Magnitude {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const L: usize> Default for Unsigned<L> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const L: usize> From<Magnitude> for Unsigned<L> {
    /// Truncating.
    fn from(magnitude: Magnitude) -> Self {
        Self::from_magnitude(&magnitude)
    }
}

impl<const L: usize> From<Unsigned<L>> for Magnitude {
    fn from(unsigned: Unsigned<L>) -> Self {
        unsigned.to_magnitude()
    }
}

#[cfg(feature = "hex-debug")]
impl<const L: usize> fmt::Debug for Unsigned<L> {
    /// Big-endian bytes of the full width, in hex.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.to_fixed_be_bytes();
        write!(f, "Unsigned<{}>({})", L, delog::hex_str!(&bytes[..]))
    }
}

#[cfg(not(feature = "hex-debug"))]
impl<const L: usize> fmt::Debug for Unsigned<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unsigned<{}>({})", L, self)
    }
}

#[cfg(feature = "hex-debug")]
impl fmt::Debug for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.to_be_bytes();
        write!(f, "Magnitude({})", delog::hex_str!(&bytes[..]))
    }
}

#[cfg(not(feature = "hex-debug"))]
impl fmt::Debug for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Magnitude({})", self)
    }
}
