use num_traits::Zero;
use tracing::trace;

use crate::Rational;

use super::{Operand, Polynomial};

impl Polynomial {
    /// Performs multiplication operation: `self * rhs`.
    pub fn mul_operand(&self, rhs: Operand) -> Polynomial {
        match rhs {
            Operand::Polynomial(rhs) => self.convolve(&rhs),
            Operand::Scalar(scalar) => self.mul_scalar(&scalar),
        }
    }

    /// Multiply `self` with a scalar.
    pub fn mul_scalar(&self, scalar: &Rational) -> Polynomial {
        if scalar.is_zero() {
            return Polynomial::ZERO;
        }
        // A field has no zero divisors, so the leading term stays non-zero.
        Polynomial {
            coeffs: self.iter().map(|c| c * scalar).collect(),
        }
    }

    fn convolve(&self, rhs: &Polynomial) -> Polynomial {
        if self.is_zero() || rhs.is_zero() {
            return Polynomial::ZERO;
        }
        trace!(
            lhs_degree = self.degree(),
            rhs_degree = rhs.degree(),
            "multiplying polynomials"
        );

        let mut product = vec![Rational::zero(); self.coeff_count() + rhs.coeff_count() - 1];
        for (i, a) in self.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in rhs.iter().enumerate() {
                product[i + j] += a * b;
            }
        }

        Polynomial::normalized(product)
    }
}
