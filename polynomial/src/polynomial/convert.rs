use num_traits::ToPrimitive;

use crate::{PolynomialError, Rational};

use super::Polynomial;

/// Converts a finite float into the rational number it represents exactly.
///
/// # Errors
/// Returns [`PolynomialError::NotRational`] for NaN and the infinities.
#[inline]
pub fn rational_from_f64(value: f64) -> Result<Rational, PolynomialError> {
    Rational::from_float(value).ok_or_else(|| PolynomialError::NotRational {
        value: value.to_string(),
    })
}

/// Converts a rational number into the nearest float.
#[inline]
pub fn rational_to_f64(value: &Rational) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

impl Polynomial {
    /// Creates a new [`Polynomial`] from float coefficients, highest degree first.
    ///
    /// Finite floats are converted exactly, e.g. `0.1` becomes
    /// `3602879701896397/36028797018963968`.
    ///
    /// # Errors
    /// Returns [`PolynomialError::InvalidCoefficient`] for the first coefficient
    /// that is NaN or infinite. Only then is the leading coefficient checked,
    /// giving [`PolynomialError::LeadingZero`].
    pub fn from_f64s(coeffs: &[f64]) -> Result<Self, PolynomialError> {
        let coeffs = coeffs
            .iter()
            .enumerate()
            .map(|(index, &c)| {
                Rational::from_float(c).ok_or_else(|| PolynomialError::InvalidCoefficient {
                    index,
                    value: c.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(coeffs)
    }

    /// Returns the coefficients as floats, highest degree first.
    #[inline]
    pub fn to_f64s(&self) -> Vec<f64> {
        self.iter().map(rational_to_f64).collect()
    }
}
