use std::ops::{Add, Mul};

use num_traits::{ToPrimitive, Zero};

use crate::Rational;

use super::{rational_to_f64, Polynomial};

/// A numeric type a [`Polynomial`] can be evaluated at.
///
/// Coefficients are lifted into the point's type with
/// [`from_coefficient`](EvalPoint::from_coefficient), so the result always has
/// the type of the evaluation point.
pub trait EvalPoint: Clone + Zero + Add<Output = Self> + Mul<Output = Self> {
    /// Converts a coefficient into this type.
    fn from_coefficient(coeff: &Rational) -> Self;
}

impl EvalPoint for Rational {
    #[inline]
    fn from_coefficient(coeff: &Rational) -> Self {
        coeff.clone()
    }
}

impl EvalPoint for f64 {
    #[inline]
    fn from_coefficient(coeff: &Rational) -> Self {
        rational_to_f64(coeff)
    }
}

impl EvalPoint for f32 {
    #[inline]
    fn from_coefficient(coeff: &Rational) -> Self {
        coeff.to_f32().unwrap_or(f32::NAN)
    }
}

impl Polynomial {
    /// Evaluate p(x) with Horner's method.
    ///
    /// This needs exactly `degree` multiplications. The zero polynomial evaluates
    /// to the zero of `T`.
    pub fn eval<T: EvalPoint>(&self, x: T) -> T {
        let Some((last, init)) = self.coeffs.split_last() else {
            return T::zero();
        };
        let acc = init
            .iter()
            .fold(T::zero(), |acc, c| (acc + T::from_coefficient(c)) * x.clone());
        acc + T::from_coefficient(last)
    }

    /// Returns `self` as a function of `x`, equivalent to [`Polynomial::eval`].
    #[inline]
    pub fn as_fn<T: EvalPoint>(&self) -> impl Fn(T) -> T + '_ {
        move |x| self.eval(x)
    }
}
