use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Div;
use std::ops::Mul;
use std::ops::MulAssign;
use std::ops::Neg;
use std::ops::Rem;
use std::ops::Sub;
use std::ops::SubAssign;

use arbitrary::Arbitrary;
use itertools::EitherOrBoth;
use itertools::Itertools;
use num_bigint::BigInt;
use num_traits::One;
use num_traits::Zero;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;
use tracing::trace;

use crate::config;
use crate::error::PolynomialError;
use crate::math::prime_field_element::PrimeFieldElement;
use crate::math::traits::Coefficient;
use crate::math::traits::Inverse;

impl<T: Coefficient> Zero for Polynomial<T> {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.degree() == -1
    }
}

impl<T: Coefficient> One for Polynomial<T> {
    fn one() -> Self {
        Self::from_constant(T::one())
    }

    fn is_one(&self) -> bool {
        self.degree() == 0 && self.coefficients[0].is_one()
    }
}

/// A univariate polynomial with coefficients of any type implementing [`Coefficient`], in
/// monomial form.
///
/// The coefficient vector may contain spurious zeros in its highest positions. They are never
/// removed implicitly; degree, equality, and formatting all ignore them. Use
/// [`normalize`](Self::normalize) to strip them explicitly.
#[derive(Clone, Arbitrary, Serialize, Deserialize)]
pub struct Polynomial<T: Coefficient> {
    /// The polynomial's coefficients, in order of increasing degree. That is, the polynomial's
    /// leading coefficient is the last non-zero element of the vector.
    pub coefficients: Vec<T>,
}

impl<T: Coefficient> Debug for Polynomial<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Polynomial")
            .field("coefficients", &self.coefficients)
            .finish()
    }
}

/// Renders the polynomial in order of decreasing powers, skipping zero terms.
///
/// Every term but the leading one carries an explicit `+` unless its coefficient is negative,
/// in which case the coefficient's own sign is printed. Coefficients `1` and `-1` of non-constant
/// terms are elided, other coefficients are joined to the indeterminate with `*`. In
/// characteristic 2, where `1 == -1`, such a coefficient is rendered as `+x`.
///
/// # Examples
///
/// ```
/// # use polyring::prelude::*;
/// let f = Polynomial::<i64>::from([1, -3, 0, 2]);
/// assert_eq!("2*x^3-3*x+1", f.to_string());
///
/// let g = Polynomial::<i64>::from([0, -1, 1]);
/// assert_eq!("x^2-x", g.to_string());
/// ```
impl<T: Coefficient> Display for Polynomial<T> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let degree = match self.degree() {
            -1 => return write!(f, "0"),
            d => d as usize,
        };

        let x = config::indeterminate();
        let one = T::one();
        let minus_one = T::from(-1);
        for pow in (0..=degree).rev() {
            let coeff = &self.coefficients[pow];
            if coeff.is_zero() {
                continue;
            }

            let sign = if pow != degree && !coeff.is_negative() {
                "+"
            } else {
                ""
            };

            if pow == 0 {
                write!(f, "{sign}{coeff}")?;
                continue;
            }

            if *coeff == one {
                write!(f, "{sign}{x}")?;
            } else if *coeff == minus_one {
                write!(f, "-{x}")?;
            } else {
                write!(f, "{sign}{coeff}*{x}")?;
            }
            if pow > 1 {
                write!(f, "^{pow}")?;
            }
        }

        Ok(())
    }
}

// Manually implemented to correctly handle leading zeros.
impl<T: Coefficient> PartialEq for Polynomial<T> {
    fn eq(&self, other: &Self) -> bool {
        self.coefficients
            .iter()
            .zip_longest(&other.coefficients)
            .all(|pair| match pair {
                EitherOrBoth::Both(l, r) => l == r,
                EitherOrBoth::Left(c) | EitherOrBoth::Right(c) => c.is_zero(),
            })
    }
}

impl<T: Coefficient + Eq> Eq for Polynomial<T> {}

impl<T: Coefficient> PartialEq<T> for Polynomial<T> {
    fn eq(&self, other: &T) -> bool {
        *self == Self::from_constant(other.clone())
    }
}

impl<T: Coefficient> Default for Polynomial<T> {
    /// The zero polynomial, stored as a single zero coefficient.
    fn default() -> Self {
        Self::from_constant(T::zero())
    }
}

impl<const N: usize, T, E> From<[E; N]> for Polynomial<T>
where
    T: Coefficient,
    E: Into<T>,
{
    fn from(coefficients: [E; N]) -> Self {
        Self::new(coefficients.into_iter().map(|x| x.into()).collect())
    }
}

impl<T, E> From<&[E]> for Polynomial<T>
where
    T: Coefficient,
    E: Into<T> + Clone,
{
    fn from(coefficients: &[E]) -> Self {
        Self::from(coefficients.to_vec())
    }
}

impl<T, E> From<Vec<E>> for Polynomial<T>
where
    T: Coefficient,
    E: Into<T>,
{
    fn from(coefficients: Vec<E>) -> Self {
        Self::new(coefficients.into_iter().map(|c| c.into()).collect())
    }
}

impl<T: Coefficient> FromIterator<T> for Polynomial<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: Coefficient> Polynomial<T> {
    pub const fn new(coefficients: Vec<T>) -> Self {
        Self { coefficients }
    }

    pub fn from_constant(constant: T) -> Self {
        Self {
            coefficients: vec![constant],
        }
    }

    /// The coefficient of the term of degree `index`. Coefficients beyond the stored ones are
    /// zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyring::prelude::*;
    /// let f = Polynomial::<i64>::from([4, 5]);
    /// assert_eq!(5, f.coefficient(1));
    /// assert_eq!(0, f.coefficient(100));
    /// ```
    pub fn coefficient(&self, index: usize) -> T {
        self.coefficients.get(index).cloned().unwrap_or_else(T::zero)
    }

    pub fn degree(&self) -> isize {
        let mut deg = self.coefficients.len() as isize - 1;
        while deg >= 0 && self.coefficients[deg as usize].is_zero() {
            deg -= 1;
        }

        deg // -1 for the zero polynomial
    }

    /// The coefficients up to and including the leading coefficient. Empty for the zero
    /// polynomial.
    pub fn significant_coefficients(&self) -> &[T] {
        let num_significant = (self.degree() + 1) as usize;
        &self.coefficients[..num_significant]
    }

    /// The coefficient of the polynomial's term of highest power. `None` if (and only if) `self`
    /// [is zero](Self::is_zero).
    ///
    /// Furthermore, is never `Some(T::zero())`.
    pub fn leading_coefficient(&self) -> Option<T> {
        match self.degree() {
            -1 => None,
            n => Some(self.coefficients[n as usize].clone()),
        }
    }

    pub fn normalize(&mut self) {
        while self.coefficients.last().is_some_and(Zero::is_zero) {
            self.coefficients.pop();
        }
    }

    /// Evaluate the polynomial in `x`, accumulating the running power of `x` term by term.
    pub fn evaluate(&self, x: &T) -> T {
        let mut acc = T::zero();
        let mut power = T::one();
        for (i, coefficient) in self.significant_coefficients().iter().enumerate() {
            if i > 0 {
                power *= x.clone();
            }
            acc += power.clone() * coefficient.clone();
        }

        acc
    }

    /// Add `other` to `self` in place. Coefficients of `other` beyond the length of `self` are
    /// appended. Returns `self` to allow chaining.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyring::prelude::*;
    /// let mut f = Polynomial::<i64>::from([1, 2, 3]);
    /// f.add_mut(&Polynomial::from([1, 1])).mul_mut(&Polynomial::from([0, 1]));
    /// assert_eq!(Polynomial::from([0, 2, 3, 3]), f);
    /// ```
    pub fn add_mut(&mut self, other: &Self) -> &mut Self {
        let overlap = self.coefficients.len().min(other.coefficients.len());
        for (lhs, rhs) in self.coefficients.iter_mut().zip(&other.coefficients) {
            *lhs += rhs.clone();
        }
        self.coefficients
            .extend_from_slice(&other.coefficients[overlap..]);

        self
    }

    /// Subtract `other` from `self` in place. Coefficients of `other` beyond the length of `self`
    /// are negated and appended. Returns `self` to allow chaining.
    pub fn sub_mut(&mut self, other: &Self) -> &mut Self {
        let overlap = self.coefficients.len().min(other.coefficients.len());
        for (lhs, rhs) in self.coefficients.iter_mut().zip(&other.coefficients) {
            *lhs -= rhs.clone();
        }
        let minus_one = T::from(-1);
        let negated_tail = other.coefficients[overlap..]
            .iter()
            .map(|c| c.clone() * minus_one.clone());
        self.coefficients.extend(negated_tail);

        self
    }

    /// Multiply `self` by `other` in place, using schoolbook multiplication. The product
    /// has `self.coefficients.len() + other.coefficients.len()` stored coefficients. Returns
    /// `self` to allow chaining.
    pub fn mul_mut(&mut self, other: &Self) -> &mut Self {
        let mut product = vec![T::zero(); self.coefficients.len() + other.coefficients.len()];
        for (i, lhs) in self.coefficients.iter().enumerate() {
            for (j, rhs) in other.coefficients.iter().enumerate() {
                product[i + j] += lhs.clone() * rhs.clone();
            }
        }
        self.coefficients = product;

        self
    }

    /// Multiply every coefficient with `scalar`, _i.e._, compute `scalar · self(x)` without
    /// changing the number of stored coefficients.
    pub fn scalar_mul_mut(&mut self, scalar: T) {
        for coefficient in &mut self.coefficients {
            *coefficient *= scalar.clone();
        }
    }

    /// The composition `self(inner(x))`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyring::prelude::*;
    /// let f = Polynomial::<i64>::from([0, 0, 1]);
    /// let g = Polynomial::<i64>::from([1, 1]);
    /// assert_eq!(Polynomial::from([1, 2, 1]), f.compose(&g));
    /// ```
    pub fn compose(&self, inner: &Self) -> Self {
        let mut acc = Self::zero();
        let mut power = Self::one();
        for (i, coefficient) in self.significant_coefficients().iter().enumerate() {
            if i > 0 {
                power.mul_mut(inner);
            }
            let mut term = power.clone();
            term.mul_mut(&Self::from_constant(coefficient.clone()));
            acc.add_mut(&term);
        }

        acc
    }
}

impl<T: Coefficient + Inverse> Polynomial<T> {
    /// Long division. Returns `(quotient, remainder)` such that
    /// `self == quotient · divisor + remainder` and `remainder.degree() < divisor.degree()`.
    ///
    /// Every quotient coefficient is scaled by the inverse of the divisor's leading coefficient,
    /// so the division is exact whenever that leading coefficient is a unit. In particular, over
    /// the integers, division by monic polynomials always succeeds.
    ///
    /// # Errors
    ///
    /// - [`PolynomialError::DivisionByZero`] if the divisor is the zero polynomial.
    /// - [`PolynomialError::NonInvertibleLeadingCoefficient`] if the divisor's leading coefficient
    ///   has no multiplicative inverse.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), PolynomialError> {
        let Ok(divisor_degree) = usize::try_from(divisor.degree()) else {
            return Err(PolynomialError::DivisionByZero);
        };
        let divisor_lc = &divisor.coefficients[divisor_degree];
        let Some(divisor_lc_inv) = divisor_lc.checked_inverse() else {
            let lc = divisor_lc.to_string();
            return Err(PolynomialError::NonInvertibleLeadingCoefficient(lc));
        };

        let mut remainder = self.clone();
        let Ok(dividend_degree) = usize::try_from(self.degree()) else {
            return Ok((Self::zero(), remainder));
        };
        if dividend_degree < divisor_degree {
            return Ok((Self::zero(), remainder));
        }

        let mut quotient = vec![T::zero(); dividend_degree - divisor_degree + 1];
        for i in (divisor_degree..=dividend_degree).rev() {
            let remainder_coeff = remainder.coefficients[i].clone();
            if remainder_coeff.is_zero() {
                continue;
            }

            let shift = i - divisor_degree;
            let quotient_coeff = remainder_coeff * divisor_lc_inv.clone();
            trace!(power = shift, "eliminating remainder term of degree {i}");

            // subtract quotient_coeff · x^shift · divisor from the running remainder
            for (j, divisor_coeff) in divisor.significant_coefficients().iter().enumerate() {
                remainder.coefficients[shift + j] -= quotient_coeff.clone() * divisor_coeff.clone();
            }

            // cancels exactly, even for coefficient types with inexact arithmetic
            remainder.coefficients[i] = T::zero();
            quotient[shift] = quotient_coeff;
        }

        Ok((Self::new(quotient), remainder))
    }

    /// The quotient of [long division](Self::div_rem).
    ///
    /// # Errors
    ///
    /// See [`div_rem`](Self::div_rem).
    pub fn divide(&self, divisor: &Self) -> Result<Self, PolynomialError> {
        let (quotient, _) = self.div_rem(divisor)?;
        Ok(quotient)
    }

    /// The remainder of [long division](Self::div_rem), equal to
    /// `self - (self / divisor) · divisor`.
    ///
    /// # Errors
    ///
    /// See [`div_rem`](Self::div_rem).
    pub fn remainder(&self, divisor: &Self) -> Result<Self, PolynomialError> {
        let (_, remainder) = self.div_rem(divisor)?;
        Ok(remainder)
    }

    /// Greatest common divisor via the Euclidean algorithm.
    ///
    /// The result is _not_ normalized: it is a greatest common divisor only up to multiplication
    /// by a unit. The gcd of any polynomial and zero is that polynomial.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`remainder`](Self::remainder), which can only be
    /// [`PolynomialError::NonInvertibleLeadingCoefficient`]. For coefficient fields, no error is
    /// possible.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyring::prelude::*;
    /// let f = Polynomial::<i64>::from([-1, 0, 1]);
    /// let g = Polynomial::<i64>::from([-1, 1]);
    /// assert_eq!(g, Polynomial::gcd(f, g.clone()).unwrap());
    /// ```
    pub fn gcd(mut a: Self, mut b: Self) -> Result<Self, PolynomialError> {
        while !b.is_zero() {
            debug!(
                degree_a = a.degree(),
                degree_b = b.degree(),
                "euclidean reduction step"
            );
            let remainder = a.remainder(&b)?;
            a = b;
            b = remainder;
        }

        Ok(a)
    }
}

impl<T: Coefficient + Inverse> Div for Polynomial<T> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the division fails, see [`Polynomial::div_rem`].
    fn div(self, other: Self) -> Self {
        self.divide(&other).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<T: Coefficient + Inverse> Rem for Polynomial<T> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the division fails, see [`Polynomial::div_rem`].
    fn rem(self, other: Self) -> Self {
        self.remainder(&other).unwrap_or_else(|err| panic!("{err}"))
    }
}

macro_rules! impl_arithmetic_op_for_polynomial {
    ($op:ident, $op_fn:ident, $op_assign:ident, $op_assign_fn:ident, $in_place_fn:ident) => {
        impl<T: Coefficient> $op_assign for Polynomial<T> {
            fn $op_assign_fn(&mut self, rhs: Self) {
                self.$in_place_fn(&rhs);
            }
        }

        impl<T: Coefficient> $op_assign<&Polynomial<T>> for Polynomial<T> {
            fn $op_assign_fn(&mut self, rhs: &Polynomial<T>) {
                self.$in_place_fn(rhs);
            }
        }

        impl<T: Coefficient> $op_assign<T> for Polynomial<T> {
            fn $op_assign_fn(&mut self, rhs: T) {
                self.$in_place_fn(&Self::from_constant(rhs));
            }
        }

        impl<T: Coefficient> $op for Polynomial<T> {
            type Output = Self;

            fn $op_fn(mut self, rhs: Self) -> Self {
                self.$in_place_fn(&rhs);
                self
            }
        }

        impl<T: Coefficient> $op<&Polynomial<T>> for Polynomial<T> {
            type Output = Self;

            fn $op_fn(mut self, rhs: &Polynomial<T>) -> Self {
                self.$in_place_fn(rhs);
                self
            }
        }

        impl<T: Coefficient> $op for &Polynomial<T> {
            type Output = Polynomial<T>;

            fn $op_fn(self, rhs: Self) -> Polynomial<T> {
                let mut result = self.clone();
                result.$in_place_fn(rhs);
                result
            }
        }

        impl<T: Coefficient> $op<T> for Polynomial<T> {
            type Output = Self;

            fn $op_fn(mut self, rhs: T) -> Self {
                self.$in_place_fn(&Self::from_constant(rhs));
                self
            }
        }
    };
}

impl_arithmetic_op_for_polynomial!(Add, add, AddAssign, add_assign, add_mut);
impl_arithmetic_op_for_polynomial!(Sub, sub, SubAssign, sub_assign, sub_mut);
impl_arithmetic_op_for_polynomial!(Mul, mul, MulAssign, mul_assign, mul_mut);

impl<T: Coefficient> Neg for Polynomial<T> {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        self.scalar_mul_mut(T::from(-1));
        self
    }
}

// It is impossible to
// `impl<T: Coefficient> Add<Polynomial<T>> for T`
// because of Rust's orphan rules [E0210]. Citing RFC 2451:
//
// > Rust’s orphan rule always permits an impl if either the trait or the type
// > being implemented are local to the current crate. Therefore, we can’t allow
// > `impl<T> ForeignTrait<LocalTypeCrateA> for T`, because it might conflict
// > with another crate writing `impl<T> ForeignTrait<T> for LocalTypeCrateB`,
// > which we will always permit.
macro_rules! impl_scalar_lhs_ops_for {
    ($([$($generics:tt)*] $t:ty),+ $(,)?) => {$(
        impl<$($generics)*> Add<Polynomial<$t>> for $t {
            type Output = Polynomial<$t>;

            fn add(self, rhs: Polynomial<$t>) -> Self::Output {
                Polynomial::from_constant(self) + rhs
            }
        }

        impl<$($generics)*> Sub<Polynomial<$t>> for $t {
            type Output = Polynomial<$t>;

            fn sub(self, rhs: Polynomial<$t>) -> Self::Output {
                Polynomial::from_constant(self) - rhs
            }
        }

        impl<$($generics)*> Mul<Polynomial<$t>> for $t {
            type Output = Polynomial<$t>;

            fn mul(self, rhs: Polynomial<$t>) -> Self::Output {
                Polynomial::from_constant(self) * rhs
            }
        }

        impl<$($generics)*> PartialEq<Polynomial<$t>> for $t {
            fn eq(&self, other: &Polynomial<$t>) -> bool {
                other == self
            }
        }
    )+};
}

impl_scalar_lhs_ops_for!(
    [] i16,
    [] i32,
    [] i64,
    [] i128,
    [] isize,
    [] f32,
    [] f64,
    [] BigInt,
    [const P: u64] PrimeFieldElement<P>,
);
