use std::fmt::Debug;
use std::fmt::Display;
use std::ops::AddAssign;
use std::ops::Mul;
use std::ops::MulAssign;
use std::ops::SubAssign;

use num_bigint::BigInt;
use num_traits::One;
use num_traits::Signed;
use num_traits::Zero;

/// The capabilities a type needs to serve as the coefficient of a
/// [`Polynomial`](crate::prelude::Polynomial).
///
/// Any type with additive and multiplicative identities, in-place addition,
/// subtraction, and multiplication, equality, an ordering (used only for
/// comparisons against zero), and construction from small integer literals
/// qualifies. The trait is implemented automatically for all such types, for
/// example the primitive signed integers, floats, [`BigInt`], and
/// [`PrimeFieldElement`](crate::prelude::PrimeFieldElement).
///
/// Construction from [`i8`] is how the literals `0`, `1`, and `-1` are
/// obtained; there are no implicit numeric conversions.
pub trait Coefficient:
    Clone
    + Debug
    + Display
    + PartialEq
    + PartialOrd
    + Zero
    + One
    + AddAssign
    + SubAssign
    + MulAssign
    + Mul<Output = Self>
    + From<i8>
{
    /// `true` if and only if `self` compares below zero.
    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }
}

impl<T> Coefficient for T where
    T: Clone
        + Debug
        + Display
        + PartialEq
        + PartialOrd
        + Zero
        + One
        + AddAssign
        + SubAssign
        + MulAssign
        + Mul<Output = Self>
        + From<i8>
{
}

pub trait Inverse
where
    Self: Sized,
{
    /// The multiplicative inverse `b` such that `a * b == 1`, if `self` is a
    /// unit. `None` otherwise, in particular for zero.
    fn checked_inverse(&self) -> Option<Self>;
}

macro_rules! impl_inverse_for_signed_int {
    ($($t:ident),+ $(,)?) => {$(
        impl Inverse for $t {
            fn checked_inverse(&self) -> Option<Self> {
                // the only units of ℤ are ±1, and both are self-inverse
                (*self == 1 || *self == -1).then_some(*self)
            }
        }
    )+};
}

impl_inverse_for_signed_int!(i16, i32, i64, i128, isize);

macro_rules! impl_inverse_for_float {
    ($($t:ident),+ $(,)?) => {$(
        impl Inverse for $t {
            fn checked_inverse(&self) -> Option<Self> {
                let inverse = self.recip();
                (!self.is_zero() && inverse.is_finite()).then_some(inverse)
            }
        }
    )+};
}

impl_inverse_for_float!(f32, f64);

impl Inverse for BigInt {
    fn checked_inverse(&self) -> Option<Self> {
        self.abs().is_one().then(|| self.clone())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use test_strategy::proptest;

    use super::*;

    #[test]
    fn only_plus_and_minus_one_are_integer_units() {
        assert_eq!(Some(1), 1_i64.checked_inverse());
        assert_eq!(Some(-1), (-1_i64).checked_inverse());
        assert_eq!(None, 0_i64.checked_inverse());
        assert_eq!(None, 2_i32.checked_inverse());
        assert_eq!(None, (-7_i128).checked_inverse());
    }

    #[test]
    fn big_integer_units_are_plus_and_minus_one() {
        assert_eq!(Some(BigInt::from(-1)), BigInt::from(-1).checked_inverse());
        assert_eq!(Some(BigInt::from(1)), BigInt::from(1).checked_inverse());
        assert_eq!(None, BigInt::from(3).checked_inverse());
        assert_eq!(None, BigInt::zero().checked_inverse());
    }

    #[test]
    fn zero_float_has_no_inverse() {
        assert_eq!(None, 0.0_f64.checked_inverse());
        assert_eq!(None, (-0.0_f32).checked_inverse());
        assert_eq!(Some(0.25), 4.0_f64.checked_inverse());
    }

    #[proptest]
    fn nonzero_float_times_inverse_is_close_to_one(
        #[strategy(1e-3..1e3)] x: f64,
        negate: bool,
    ) {
        let x = if negate { -x } else { x };
        let inverse = x.checked_inverse().unwrap();
        prop_assert!((x * inverse - 1.0).abs() < 1e-12);
    }

    #[test]
    fn negativity_is_comparison_against_zero() {
        assert!((-3_i64).is_negative());
        assert!(!0_i64.is_negative());
        assert!(!Coefficient::is_negative(&2.5_f64));
        assert!(Coefficient::is_negative(&BigInt::from(-2)));
    }
}
