//! The `core::ops` operators, forwarding to the named methods.
//!
//! All operators truncate like the methods do. Only `/` and `%` can fail,
//! and panic on a zero divisor as the primitive integers do.

use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, DivAssign, Mul, MulAssign,
    Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

use super::shift::{shl_assign, shr_assign};
use crate::Unsigned;

fn divide<const L: usize>(lhs: &Unsigned<L>, rhs: &Unsigned<L>) -> Unsigned<L> {
    match lhs.divide(rhs) {
        Ok(quotient) => quotient,
        Err(_) => panic!("attempt to divide by zero"),
    }
}

fn modulo<const L: usize>(lhs: &Unsigned<L>, rhs: &Unsigned<L>) -> Unsigned<L> {
    match lhs.modulo(rhs) {
        Ok(remainder) => remainder,
        Err(_) => panic!("attempt to calculate the remainder with a divisor of zero"),
    }
}

/// Implements the binary operator for all val/ref combinations, plus its assign form.
macro_rules! forward_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $f:expr) => {
        impl<'a, 'b, const L: usize> $Op<&'b Unsigned<L>> for &'a Unsigned<L> {
            type Output = Unsigned<L>;
            #[inline]
            fn $op(self, other: &'b Unsigned<L>) -> Unsigned<L> {
                $f(self, other)
            }
        }

        impl<'b, const L: usize> $Op<&'b Unsigned<L>> for Unsigned<L> {
            type Output = Unsigned<L>;
            #[inline]
            fn $op(self, other: &'b Unsigned<L>) -> Unsigned<L> {
                $f(&self, other)
            }
        }

        impl<'a, const L: usize> $Op<Unsigned<L>> for &'a Unsigned<L> {
            type Output = Unsigned<L>;
            #[inline]
            fn $op(self, other: Unsigned<L>) -> Unsigned<L> {
                $f(self, &other)
            }
        }

        impl<const L: usize> $Op for Unsigned<L> {
            type Output = Unsigned<L>;
            #[inline]
            fn $op(self, other: Unsigned<L>) -> Unsigned<L> {
                $f(&self, &other)
            }
        }

        impl<'b, const L: usize> $OpAssign<&'b Unsigned<L>> for Unsigned<L> {
            #[inline]
            fn $op_assign(&mut self, other: &'b Unsigned<L>) {
                *self = $f(&*self, other);
            }
        }

        impl<const L: usize> $OpAssign for Unsigned<L> {
            #[inline]
            fn $op_assign(&mut self, other: Unsigned<L>) {
                *self = $f(&*self, &other);
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign, Unsigned::<L>::wrapping_add);
forward_binop!(Sub, sub, SubAssign, sub_assign, Unsigned::<L>::wrapping_sub);
forward_binop!(Mul, mul, MulAssign, mul_assign, Unsigned::<L>::wrapping_mul);
forward_binop!(Div, div, DivAssign, div_assign, divide::<L>);
forward_binop!(Rem, rem, RemAssign, rem_assign, modulo::<L>);
forward_binop!(BitAnd, bitand, BitAndAssign, bitand_assign, Unsigned::<L>::and);
forward_binop!(BitOr, bitor, BitOrAssign, bitor_assign, Unsigned::<L>::or);
forward_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign, Unsigned::<L>::xor);

impl<const L: usize> Not for Unsigned<L> {
    type Output = Self;
    fn not(self) -> Self {
        Unsigned::not(&self)
    }
}

impl<const L: usize> Not for &Unsigned<L> {
    type Output = Unsigned<L>;
    fn not(self) -> Unsigned<L> {
        Unsigned::not(self)
    }
}

impl<const L: usize> ShlAssign<usize> for Unsigned<L> {
    /// Truncating, see [`Unsigned::shift_left`].
    #[inline]
    fn shl_assign(&mut self, bits: usize) {
        shl_assign(&mut self.0, bits);
    }
}

impl<const L: usize> ShrAssign<usize> for Unsigned<L> {
    #[inline]
    fn shr_assign(&mut self, bits: usize) {
        shr_assign(&mut self.0, bits);
    }
}

impl<const L: usize> Shl<usize> for Unsigned<L> {
    type Output = Self;
    #[inline]
    fn shl(mut self, bits: usize) -> Self {
        self <<= bits;
        self
    }
}

impl<const L: usize> Shl<usize> for &Unsigned<L> {
    type Output = Unsigned<L>;
    #[inline]
    fn shl(self, bits: usize) -> Unsigned<L> {
        *self << bits
    }
}

impl<const L: usize> Shr<usize> for Unsigned<L> {
    type Output = Self;
    #[inline]
    fn shr(mut self, bits: usize) -> Self {
        self >>= bits;
        self
    }
}

impl<const L: usize> Shr<usize> for &Unsigned<L> {
    type Output = Unsigned<L>;
    #[inline]
    fn shr(self, bits: usize) -> Unsigned<L> {
        *self >> bits
    }
}

#[cfg(test)]
mod test {
    use crate::fixtures::*;

    /// Assert that an op works for all val/ref combinations
    macro_rules! assert_op {
        ($left:ident $op:tt $right:ident == $expected:expr) => {
            assert_eq!((&$left) $op (&$right), $expected);
            assert_eq!((&$left) $op $right.clone(), $expected);
            assert_eq!($left.clone() $op (&$right), $expected);
            assert_eq!($left.clone() $op $right.clone(), $expected);
        };
    }

    /// Assert that an assign-op works for both val/ref right hand sides
    macro_rules! assert_assign_op {
        ($left:ident $op:tt $right:ident == $expected:expr) => {{
            let mut left = $left.clone();
            assert_eq!({ left $op &$right; left }, $expected);

            let mut left = $left.clone();
            assert_eq!({ left $op $right.clone(); left }, $expected);
        }};
    }

    #[test]
    fn operators() {
        let a = U64::from_u64(0x1_0000_0005);
        let b = U64::from_digit(3);

        assert_op!(a + b == U64::from_u64(0x1_0000_0008));
        assert_op!(a - b == U64::from_u64(0x1_0000_0002));
        assert_op!(b - a == U64::from_u64(3u64.wrapping_sub(0x1_0000_0005)));
        assert_op!(a * b == U64::from_u64(0x3_0000_000F));
        assert_op!(a / b == U64::from_u64(0x1_0000_0005 / 3));
        assert_op!(a % b == U64::from_u64(0x1_0000_0005 % 3));
        assert_op!(a & b == U64::one());
        assert_op!(a | b == U64::from_u64(0x1_0000_0007));
        assert_op!(a ^ b == U64::from_u64(0x1_0000_0006));

        assert_assign_op!(a += b == a + b);
        assert_assign_op!(a -= b == a - b);
        assert_assign_op!(a *= b == a * b);
        assert_assign_op!(a /= b == a / b);
        assert_assign_op!(a %= b == a % b);
        assert_assign_op!(a &= b == a & b);
        assert_assign_op!(a |= b == a | b);
        assert_assign_op!(a ^= b == a ^ b);
    }

    #[test]
    fn not_and_shifts() {
        let a = U64::from_u64(0x1_0000_0005);
        assert_eq!(!a, U64::from_u64(!0x1_0000_0005u64));
        assert_eq!(!&a, !a);
        assert_eq!(a << 4, U64::from_u64(0x10_0000_0050));
        assert_eq!(&a >> 32, U64::one());
        assert_eq!(a << 64, U64::zero());

        let mut x = a;
        x <<= 32;
        x >>= 32;
        assert_eq!(x, U64::from_digit(5));
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn div_by_zero_panics() {
        let _ = U64::one() / U64::zero();
    }

    #[test]
    #[should_panic]
    fn rem_by_zero_panics() {
        let _ = U64::one() % U64::zero();
    }
}
