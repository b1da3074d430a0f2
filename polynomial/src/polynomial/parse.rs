use std::str::FromStr;

use crate::{PolynomialError, Rational};

use super::Polynomial;

/// Parses the exact form written by [`Debug`](std::fmt::Debug), e.g.
/// `Polynomial(1, -7/2, 0)`.
///
/// Every coefficient is converted before the leading coefficient is checked, so
/// an unparsable coefficient is reported as
/// [`PolynomialError::InvalidCoefficient`] even when the literal also starts with
/// zero.
impl FromStr for Polynomial {
    type Err = PolynomialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s
            .trim()
            .strip_prefix("Polynomial(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| PolynomialError::Malformed(s.to_owned()))?;
        if body.trim().is_empty() {
            return Ok(Polynomial::ZERO);
        }

        let coeffs = body
            .split(',')
            .enumerate()
            .map(|(index, token)| {
                let token = token.trim();
                token
                    .parse::<Rational>()
                    .map_err(|_| PolynomialError::InvalidCoefficient {
                        index,
                        value: token.to_owned(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Polynomial::new(coeffs)
    }
}
