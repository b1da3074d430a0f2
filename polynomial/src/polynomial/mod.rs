//! The [`Polynomial`] type and its arithmetic.

use std::slice::Iter;

use num_bigint::BigInt;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{PolynomialError, Rational};

mod basic;
mod cmp;
mod convert;
mod format;
mod operand;
mod parse;
mod random;

mod add;
mod div;
mod eval;
mod mul;
mod neg;
mod sub;

pub use convert::{rational_from_f64, rational_to_f64};
pub use eval::EvalPoint;
pub use format::{DisplayStyle, Styled};
pub use operand::Operand;

/// Represents a univariate polynomial `a₀xⁿ + a₁xⁿ⁻¹ + … + aₙ` with rational coefficients.
///
/// The coefficients are stored in a vector `coeffs`, ordered from the highest degree
/// term at index 0 down to the constant term at the last index. The vector is either
/// empty, which is the zero polynomial, or its first element is non-zero. Every
/// constructor and every operation upholds this normal form, so equality, hashing
/// and [`degree`](Polynomial::degree) can work directly on the stored coefficients.
///
/// A [`Polynomial`] is never modified after construction; all operations return
/// a new value.
///
/// # Examples
/// ```
/// use polynomial::{poly, Polynomial};
///
/// let f = poly![1, 7, 0, 4].unwrap();
/// assert_eq!(f.degree(), 3);
/// assert_eq!(f.to_string(), "f(x) = x^3 + 7x^2 + 4");
/// assert_eq!(Polynomial::ZERO.degree(), -1);
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Rational>", into = "Vec<Rational>")]
pub struct Polynomial {
    coeffs: Vec<Rational>,
}

impl Polynomial {
    /// The zero polynomial, which has no coefficients.
    pub const ZERO: Self = Self { coeffs: Vec::new() };

    /// Creates a new [`Polynomial`] from its coefficients, highest degree first.
    ///
    /// # Errors
    /// Returns [`PolynomialError::LeadingZero`] if `coeffs` is not empty and its
    /// first element is zero. Leading zeros are rejected, not trimmed.
    pub fn new(coeffs: Vec<Rational>) -> Result<Self, PolynomialError> {
        match coeffs.first() {
            Some(lead) if lead.is_zero() => {
                debug!(
                    coeff_count = coeffs.len(),
                    "rejected coefficients with a zero leading term"
                );
                Err(PolynomialError::LeadingZero)
            }
            _ => Ok(Self { coeffs }),
        }
    }

    /// Creates a new [`Polynomial`] from integer coefficients, highest degree first.
    ///
    /// # Errors
    /// Returns [`PolynomialError::LeadingZero`] if the first coefficient is zero.
    pub fn from_integers(coeffs: &[i64]) -> Result<Self, PolynomialError> {
        Self::new(
            coeffs
                .iter()
                .map(|&c| Rational::from_integer(BigInt::from(c)))
                .collect(),
        )
    }

    /// Creates the constant polynomial `value`, which is [`Polynomial::ZERO`]
    /// if `value` is zero.
    #[inline]
    pub fn constant(value: Rational) -> Self {
        Self::normalized(vec![value])
    }

    /// Creates the polynomial `coeff·xᵈᵉᵍʳᵉᵉ`.
    pub fn monomial(coeff: Rational, degree: usize) -> Self {
        if coeff.is_zero() {
            return Self::ZERO;
        }
        let mut coeffs = Vec::with_capacity(degree + 1);
        coeffs.push(coeff);
        coeffs.resize(degree + 1, Rational::zero());
        Self { coeffs }
    }

    /// Builds a polynomial from raw coefficients, dropping every leading zero.
    pub(crate) fn normalized(mut coeffs: Vec<Rational>) -> Self {
        let leading_zeros = coeffs.iter().take_while(|c| c.is_zero()).count();
        coeffs.drain(..leading_zeros);
        Self { coeffs }
    }

    /// Returns the degree of the polynomial, `-1` for [`Polynomial::ZERO`].
    #[inline]
    pub fn degree(&self) -> isize {
        self.coeffs.len() as isize - 1
    }

    /// Get the coefficient count of the polynomial.
    #[inline]
    pub fn coeff_count(&self) -> usize {
        self.coeffs.len()
    }

    /// Returns the coefficients, highest degree first.
    #[inline]
    pub fn coefficients(&self) -> &[Rational] {
        &self.coeffs
    }

    /// Returns an iterator over the coefficients, highest degree first.
    #[inline]
    pub fn iter(&self) -> Iter<'_, Rational> {
        self.coeffs.iter()
    }

    /// Returns the coefficient of the highest degree term, `None` for [`Polynomial::ZERO`].
    #[inline]
    pub fn leading_coefficient(&self) -> Option<&Rational> {
        self.coeffs.first()
    }

    /// Returns the constant term, which is zero for [`Polynomial::ZERO`].
    #[inline]
    pub fn constant_term(&self) -> Rational {
        self.coeffs.last().cloned().unwrap_or_else(Rational::zero)
    }

    /// Returns `true` if `self` is the zero polynomial.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Drop self, and return the coefficients.
    #[inline]
    pub fn into_coefficients(self) -> Vec<Rational> {
        self.coeffs
    }
}
