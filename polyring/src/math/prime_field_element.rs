use std::cmp::Ordering;
use std::fmt;
use std::fmt::Formatter;
use std::iter::Sum;
use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Div;
use std::ops::Mul;
use std::ops::MulAssign;
use std::ops::Neg;
use std::ops::Sub;
use std::ops::SubAssign;

use arbitrary::Arbitrary;
use arbitrary::Unstructured;
use num_traits::ConstOne;
use num_traits::ConstZero;
use num_traits::One;
use num_traits::Zero;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::StandardUniform;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

use super::traits::Inverse;

/// Element of the prime field ℤ_P.
///
/// Stored in canonical representation, _i.e._, as a value in `0..P`. The
/// modulus `P` must be a prime smaller than 2^63. The range is enforced at
/// compile time, primality is not checked.
///
/// Ordering and [`Display`](fmt::Display) use the _centered_ representative:
/// values greater than `P / 2` behave like the negative integer `value - P`.
/// For example, in ℤ_97, the element 96 compares less than zero and is
/// displayed as `-1`.
#[derive(Copy, Clone, Default, Hash, PartialEq, Eq)]
#[repr(transparent)]
pub struct PrimeFieldElement<const P: u64>(u64);

/// Simplifies constructing [prime field element][PrimeFieldElement]s.
///
/// The modulus is inferred from the context.
///
/// # Examples
///
/// ```
/// # use polyring::prelude::*;
/// let a: PrimeFieldElement<97> = pfe!(42);
/// let b = pfe!(-12); // correctly translates to `97 - 12`
/// let c = pfe!(42 - 12);
/// assert_eq!(a + b, c);
/// ```
#[macro_export]
macro_rules! pfe {
    ($value:expr) => {
        $crate::prelude::PrimeFieldElement::from($value as i64)
    };
}

/// Simplifies constructing vectors of [prime field element][PrimeFieldElement]s.
/// See also [`pfe!`].
///
/// # Examples
///
/// ```
/// # use polyring::prelude::*;
/// let a: Vec<PrimeFieldElement<97>> = pfe_vec![1, 2, 3];
/// let b = vec![pfe!(1), pfe!(2), pfe!(3)];
/// assert_eq!(a, b);
/// ```
#[macro_export]
macro_rules! pfe_vec {
    ($b:expr; $n:expr) => {
        vec![$crate::pfe!($b); $n]
    };
    ($($b:expr),* $(,)?) => {
        vec![$($crate::pfe!($b)),*]
    };
}

impl<const P: u64> PrimeFieldElement<P> {
    pub const MODULUS: u64 = P;
    pub const MAX: u64 = P - 1;

    #[inline]
    pub const fn new(value: u64) -> Self {
        const { assert!(P > 1 && P < 1 << 63, "modulus must be in 2..2^63") };
        Self(value % P)
    }

    /// The canonical representative, in `0..P`.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The representative in `-(P / 2)..=P / 2`.
    #[inline]
    pub fn centered_value(&self) -> i128 {
        if self.0 > P / 2 {
            i128::from(self.0) - i128::from(P)
        } else {
            i128::from(self.0)
        }
    }

    #[must_use]
    pub fn mod_pow(&self, exp: u64) -> Self {
        let mut acc = Self::ONE;
        let bit_length = u64::BITS - exp.leading_zeros();
        for i in (0..bit_length).rev() {
            acc = acc * acc;
            if exp & (1 << i) != 0 {
                acc *= *self;
            }
        }

        acc
    }

    /// The multiplicative inverse, computed via Fermat's little theorem.
    ///
    /// # Panics
    ///
    /// Panics if `self` is zero.
    #[must_use]
    pub fn inverse(&self) -> Self {
        assert!(!self.is_zero(), "Cannot invert the zero element");
        self.mod_pow(P - 2)
    }
}

impl<const P: u64> fmt::Debug for PrimeFieldElement<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PrimeFieldElement").field(&self.value()).finish()
    }
}

impl<const P: u64> fmt::Display for PrimeFieldElement<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.centered_value())
    }
}

impl<const P: u64> PartialOrd for PrimeFieldElement<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const P: u64> Ord for PrimeFieldElement<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.centered_value().cmp(&other.centered_value())
    }
}

impl<'a, const P: u64> Arbitrary<'a> for PrimeFieldElement<P> {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        u.arbitrary().map(Self::new)
    }
}

impl<const P: u64> Serialize for PrimeFieldElement<P> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value().serialize(serializer)
    }
}

impl<'de, const P: u64> Deserialize<'de> for PrimeFieldElement<P> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u64::deserialize(deserializer)?;
        if value >= P {
            let unexpected = serde::de::Unexpected::Unsigned(value);
            let expected = &"a canonical field element";
            return Err(serde::de::Error::invalid_value(unexpected, expected));
        }

        Ok(Self(value))
    }
}

impl<const P: u64> Sum for PrimeFieldElement<P> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

macro_rules! impl_from_unsigned_int_for_pfe {
    ($($t:ident),+ $(,)?) => {$(
        impl<const P: u64> From<$t> for PrimeFieldElement<P> {
            fn from(value: $t) -> Self {
                Self::new(u64::from(value))
            }
        }
    )+};
}

impl_from_unsigned_int_for_pfe!(u8, u16, u32, u64);

impl<const P: u64> From<i64> for PrimeFieldElement<P> {
    fn from(value: i64) -> Self {
        let reduced = value.unsigned_abs() % P;
        match value {
            0.. => Self(reduced),
            _ => -Self(reduced),
        }
    }
}

macro_rules! impl_from_small_signed_int_for_pfe {
    ($($t:ident),+ $(,)?) => {$(
        impl<const P: u64> From<$t> for PrimeFieldElement<P> {
            fn from(value: $t) -> Self {
                i64::from(value).into()
            }
        }
    )+};
}

impl_from_small_signed_int_for_pfe!(i8, i16, i32);

impl<const P: u64> Inverse for PrimeFieldElement<P> {
    fn checked_inverse(&self) -> Option<Self> {
        (!self.is_zero()).then(|| self.inverse())
    }
}

impl<const P: u64> Distribution<PrimeFieldElement<P>> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PrimeFieldElement<P> {
        PrimeFieldElement::new(rng.random_range(0..=PrimeFieldElement::<P>::MAX))
    }
}

impl<const P: u64> Zero for PrimeFieldElement<P> {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self == &Self::ZERO
    }
}

impl<const P: u64> ConstZero for PrimeFieldElement<P> {
    const ZERO: Self = Self::new(0);
}

impl<const P: u64> One for PrimeFieldElement<P> {
    #[inline]
    fn one() -> Self {
        Self::ONE
    }

    #[inline]
    fn is_one(&self) -> bool {
        self == &Self::ONE
    }
}

impl<const P: u64> ConstOne for PrimeFieldElement<P> {
    const ONE: Self = Self::new(1);
}

impl<const P: u64> Add for PrimeFieldElement<P> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        // both summands are below 2^63, so the sum cannot overflow
        let sum = self.0 + rhs.0;
        if sum >= P { Self(sum - P) } else { Self(sum) }
    }
}

impl<const P: u64> AddAssign for PrimeFieldElement<P> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs
    }
}

impl<const P: u64> SubAssign for PrimeFieldElement<P> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs
    }
}

impl<const P: u64> MulAssign for PrimeFieldElement<P> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<const P: u64> Mul for PrimeFieldElement<P> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let product = u128::from(self.0) * u128::from(rhs.0);
        Self((product % u128::from(P)) as u64)
    }
}

impl<const P: u64> Neg for PrimeFieldElement<P> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::zero() - self
    }
}

impl<const P: u64> Sub for PrimeFieldElement<P> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        if self.0 >= rhs.0 {
            Self(self.0 - rhs.0)
        } else {
            Self(P - (rhs.0 - self.0))
        }
    }
}

impl<const P: u64> Div for PrimeFieldElement<P> {
    type Output = Self;

    #[expect(clippy::suspicious_arithmetic_impl)]
    fn div(self, other: Self) -> Self {
        other.inverse() * self
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use proptest::prelude::*;
    use proptest_arbitrary_interop::arb;
    use test_strategy::proptest;

    use super::*;
    use crate::math::traits::Coefficient;

    /// The largest prime below 2^63.
    const LARGE_PRIME: u64 = (1 << 63) - 25;
    type Fp = PrimeFieldElement<2_147_483_647>;

    impl<const P: u64> proptest::arbitrary::Arbitrary for PrimeFieldElement<P> {
        type Parameters = ();

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            arb().boxed()
        }

        type Strategy = BoxedStrategy<Self>;
    }

    #[proptest]
    fn serialization_and_deserialization_to_and_from_json_is_identity(pfe: Fp) {
        let serialized = serde_json::to_string(&pfe).unwrap();
        let deserialized: Fp = serde_json::from_str(&serialized).unwrap();
        prop_assert_eq!(pfe, deserialized);
    }

    #[test]
    fn deserializing_non_canonical_value_fails() {
        assert!(serde_json::from_str::<PrimeFieldElement<97>>("97").is_err());
        assert!(serde_json::from_str::<PrimeFieldElement<97>>("96").is_ok());
    }

    #[proptest]
    fn new_reduces_modulo_p(value: u64) {
        prop_assert_eq!(value % Fp::MODULUS, Fp::new(value).value());
    }

    #[proptest]
    fn negative_integers_map_to_additive_inverses(#[strategy(0..i64::MAX)] value: i64) {
        let positive = Fp::from(value);
        let negative = Fp::from(-value);
        prop_assert!((positive + negative).is_zero());
    }

    #[test]
    fn minus_one_is_p_minus_one() {
        assert_eq!(96, PrimeFieldElement::<97>::from(-1_i8).value());
        assert_eq!(
            PrimeFieldElement::<97>::MAX,
            PrimeFieldElement::<97>::from(-1_i64).value()
        );
    }

    #[test]
    fn display_uses_centered_representative() {
        let display = |v: i64| PrimeFieldElement::<97>::from(v).to_string();
        assert_eq!("0", display(0));
        assert_eq!("1", display(1));
        assert_eq!("48", display(48));
        assert_eq!("-48", display(49));
        assert_eq!("-1", display(-1));
        assert_eq!("-5", display(92));
    }

    #[test]
    fn ordering_agrees_with_display_sign() {
        let zero = PrimeFieldElement::<97>::ZERO;
        assert!(pfe!(-1) < zero);
        assert!(pfe!(48) > zero);
        assert!(PrimeFieldElement::<97>::new(49).is_negative());
        assert!(!PrimeFieldElement::<97>::new(48).is_negative());
    }

    #[proptest]
    fn addition_and_subtraction_cancel(a: Fp, b: Fp) {
        prop_assert_eq!(a, a + b - b);
        prop_assert_eq!(a, a - b + b);
    }

    #[proptest]
    fn multiplication_distributes_over_addition(a: Fp, b: Fp, c: Fp) {
        prop_assert_eq!(a * (b + c), a * b + a * c);
    }

    #[proptest]
    fn element_times_its_inverse_is_one(#[filter(!#a.is_zero())] a: Fp) {
        prop_assert!((a * a.inverse()).is_one());
        prop_assert_eq!(Some(a.inverse()), a.checked_inverse());
    }

    #[test]
    fn zero_has_no_inverse() {
        assert_eq!(None, Fp::ZERO.checked_inverse());
    }

    #[test]
    #[should_panic(expected = "Cannot invert the zero element")]
    fn inverting_zero_panics() {
        let _ = Fp::ZERO.inverse();
    }

    #[proptest]
    fn division_is_multiplication_with_inverse(a: Fp, #[filter(!#b.is_zero())] b: Fp) {
        prop_assert_eq!(a, a / b * b);
    }

    #[proptest]
    fn mod_pow_agrees_with_repeated_multiplication(base: Fp, #[strategy(0u64..40)] exp: u64) {
        let naive = (0..exp).fold(Fp::ONE, |acc, _| acc * base);
        prop_assert_eq!(naive, base.mod_pow(exp));
    }

    #[test]
    fn arithmetic_near_the_modulus_does_not_overflow() {
        type Big = PrimeFieldElement<LARGE_PRIME>;
        let max = Big::new(Big::MAX);
        assert_eq!(Big::new(Big::MAX - 1), max + max);
        assert_eq!(Big::ONE, max * max);
    }

    #[test]
    fn smallest_modulus_wraps_around() {
        type F2 = PrimeFieldElement<2>;
        assert_eq!(0, F2::MAX - 1);
        assert_eq!(F2::ZERO, F2::ONE + F2::ONE);
        assert_eq!(F2::ONE, -F2::ONE);
        assert_eq!(F2::ONE, F2::new(3));
    }

    #[test]
    fn sum_of_elements() {
        let elements: Vec<PrimeFieldElement<97>> = pfe_vec![50, 50, -3];
        let sum = elements.into_iter().sum::<PrimeFieldElement<97>>();
        assert!(sum.is_zero());
    }
}
