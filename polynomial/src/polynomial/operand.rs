use num_bigint::BigInt;
use num_traits::Zero;

use crate::{PolynomialError, Rational};

use super::{rational_from_f64, Polynomial};

/// The right-hand side of a binary polynomial operation.
///
/// Every arithmetic operator on [`Polynomial`] accepts anything convertible into
/// an [`Operand`] and dispatches on the variant: another polynomial is combined
/// coefficient-wise, while a scalar acts as the constant polynomial holding it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operand {
    /// Another polynomial.
    Polynomial(Polynomial),
    /// A rational scalar.
    Scalar(Rational),
}

impl Operand {
    /// Returns `true` if the operand is the zero polynomial or a zero scalar.
    #[inline]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Polynomial(p) => p.is_zero(),
            Self::Scalar(s) => s.is_zero(),
        }
    }

    /// Converts the operand into a polynomial, a scalar becoming a constant polynomial.
    #[inline]
    pub fn into_polynomial(self) -> Polynomial {
        match self {
            Self::Polynomial(p) => p,
            Self::Scalar(s) => Polynomial::constant(s),
        }
    }
}

impl From<Polynomial> for Operand {
    #[inline]
    fn from(value: Polynomial) -> Self {
        Self::Polynomial(value)
    }
}

impl From<&Polynomial> for Operand {
    #[inline]
    fn from(value: &Polynomial) -> Self {
        Self::Polynomial(value.clone())
    }
}

impl From<Rational> for Operand {
    #[inline]
    fn from(value: Rational) -> Self {
        Self::Scalar(value)
    }
}

impl From<&Rational> for Operand {
    #[inline]
    fn from(value: &Rational) -> Self {
        Self::Scalar(value.clone())
    }
}

impl From<BigInt> for Operand {
    #[inline]
    fn from(value: BigInt) -> Self {
        Self::Scalar(Rational::from_integer(value))
    }
}

macro_rules! impl_from_primitive {
    ($($t:ty),*) => {$(
        impl From<$t> for Operand {
            #[inline]
            fn from(value: $t) -> Self {
                Self::Scalar(Rational::from_integer(BigInt::from(value)))
            }
        }
    )*};
}

impl_from_primitive!(i32, i64);

impl TryFrom<f64> for Operand {
    type Error = PolynomialError;

    /// Converts a finite float exactly; NaN and infinities are not rational.
    #[inline]
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        rational_from_f64(value).map(Self::Scalar)
    }
}

/// Implements a binary operator for every `Into<Operand>` right-hand side,
/// plus the commuted scalar-first forms.
macro_rules! impl_binary_op {
    ($imp:ident, $method:ident, $inherent:ident, |$s:ident, $p:ident| $commuted:expr) => {
        impl<T: Into<Operand>> std::ops::$imp<T> for Polynomial {
            type Output = Polynomial;

            #[inline]
            fn $method(self, rhs: T) -> Self::Output {
                self.$inherent(rhs.into())
            }
        }

        impl<T: Into<Operand>> std::ops::$imp<T> for &Polynomial {
            type Output = Polynomial;

            #[inline]
            fn $method(self, rhs: T) -> Self::Output {
                self.$inherent(rhs.into())
            }
        }

        impl_binary_op!(@commuted $imp, $method, |$s, $p| $commuted; Rational, &Rational, BigInt, i32, i64);
    };
    (@commuted $imp:ident, $method:ident, |$s:ident, $p:ident| $commuted:expr; $($t:ty),*) => {$(
        impl std::ops::$imp<Polynomial> for $t {
            type Output = Polynomial;

            #[inline]
            fn $method(self, rhs: Polynomial) -> Self::Output {
                let $s: Operand = self.into();
                let $p = &rhs;
                $commuted
            }
        }

        impl std::ops::$imp<&Polynomial> for $t {
            type Output = Polynomial;

            #[inline]
            fn $method(self, rhs: &Polynomial) -> Self::Output {
                let $s: Operand = self.into();
                let $p = rhs;
                $commuted
            }
        }
    )*};
}

impl_binary_op!(Add, add, add_operand, |s, p| p.add_operand(s));
impl_binary_op!(Sub, sub, sub_operand, |s, p| -p.sub_operand(s));
impl_binary_op!(Mul, mul, mul_operand, |s, p| p.mul_operand(s));
