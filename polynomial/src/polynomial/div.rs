use std::ops::{Div, Rem};

use num_traits::{CheckedDiv, CheckedRem, Zero};
use tracing::{debug, trace};

use crate::PolynomialError;

use super::{Operand, Polynomial};

impl Polynomial {
    /// Divides `self` by `divisor`, returning `(quotient, remainder)`.
    ///
    /// The result satisfies `self == quotient * divisor + remainder`, where the
    /// remainder is [`Polynomial::ZERO`] or of lower degree than the divisor.
    /// A scalar divisor acts as the constant polynomial holding it.
    ///
    /// # Errors
    /// Returns [`PolynomialError::DivisionByZero`] if `divisor` is the zero
    /// polynomial or a zero scalar.
    pub fn divmod(
        &self,
        divisor: impl Into<Operand>,
    ) -> Result<(Polynomial, Polynomial), PolynomialError> {
        let divisor = divisor.into().into_polynomial();
        self.synthetic_division(&divisor)
    }

    /// Returns the quotient of `self` divided by `divisor`.
    ///
    /// # Errors
    /// Returns [`PolynomialError::DivisionByZero`] for a zero divisor.
    #[inline]
    pub fn floor_div(&self, divisor: impl Into<Operand>) -> Result<Polynomial, PolynomialError> {
        self.divmod(divisor).map(|(quotient, _)| quotient)
    }

    /// Returns the remainder of `self` divided by `divisor`.
    ///
    /// # Errors
    /// Returns [`PolynomialError::DivisionByZero`] for a zero divisor.
    #[inline]
    pub fn modulo(&self, divisor: impl Into<Operand>) -> Result<Polynomial, PolynomialError> {
        self.divmod(divisor).map(|(_, remainder)| remainder)
    }

    /// Expanded synthetic division.
    ///
    /// The working vector `qr` starts as a copy of the dividend. Each step divides
    /// the current head coefficient by the divisor's leading coefficient, stores it
    /// in place as a quotient coefficient and eliminates it from the following
    /// `d` slots. Afterwards the first `len - d` slots hold the quotient and the
    /// last `d` slots the remainder.
    fn synthetic_division(
        &self,
        divisor: &Polynomial,
    ) -> Result<(Polynomial, Polynomial), PolynomialError> {
        let Some(lead) = divisor.leading_coefficient() else {
            debug!(
                dividend_degree = self.degree(),
                "attempted division by the zero polynomial"
            );
            return Err(PolynomialError::DivisionByZero);
        };
        trace!(
            dividend_degree = self.degree(),
            divisor_degree = divisor.degree(),
            "dividing polynomials"
        );

        // `degree()` is -1 for the zero dividend, so this is never positive there.
        let quotient_len = self.degree() - divisor.degree() + 1;
        if quotient_len <= 0 {
            return Ok((Polynomial::ZERO, self.clone()));
        }
        let quotient_len = quotient_len as usize;

        let mut qr = self.coeffs.clone();
        for i in 0..quotient_len {
            let c = &qr[i] / lead;
            if !c.is_zero() {
                for (j, d) in divisor.iter().enumerate().skip(1) {
                    qr[i + j] -= &c * d;
                }
            }
            qr[i] = c;
        }

        let remainder = qr.split_off(quotient_len);
        Ok((Polynomial::normalized(qr), Polynomial::normalized(remainder)))
    }
}

impl<T: Into<Operand>> Div<T> for Polynomial {
    type Output = Polynomial;

    /// # Panics
    /// Panics if the divisor is zero.
    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        Div::div(&self, rhs)
    }
}

impl<T: Into<Operand>> Div<T> for &Polynomial {
    type Output = Polynomial;

    /// # Panics
    /// Panics if the divisor is zero.
    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        match self.floor_div(rhs) {
            Ok(quotient) => quotient,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: Into<Operand>> Rem<T> for Polynomial {
    type Output = Polynomial;

    /// # Panics
    /// Panics if the divisor is zero.
    #[inline]
    fn rem(self, rhs: T) -> Self::Output {
        Rem::rem(&self, rhs)
    }
}

impl<T: Into<Operand>> Rem<T> for &Polynomial {
    type Output = Polynomial;

    /// # Panics
    /// Panics if the divisor is zero.
    #[inline]
    fn rem(self, rhs: T) -> Self::Output {
        match self.modulo(rhs) {
            Ok(remainder) => remainder,
            Err(err) => panic!("{err}"),
        }
    }
}

impl CheckedDiv for Polynomial {
    #[inline]
    fn checked_div(&self, v: &Self) -> Option<Self> {
        self.floor_div(v).ok()
    }
}

impl CheckedRem for Polynomial {
    #[inline]
    fn checked_rem(&self, v: &Self) -> Option<Self> {
        self.modulo(v).ok()
    }
}
