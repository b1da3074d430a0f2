use itertools::{EitherOrBoth, Itertools};
use num_traits::Zero;

use crate::Rational;

use super::{Operand, Polynomial};

impl Polynomial {
    /// Performs addition operation: `self + rhs`.
    ///
    /// A scalar is added to the constant term only.
    pub fn add_operand(&self, rhs: Operand) -> Polynomial {
        match rhs {
            Operand::Polynomial(rhs) => self.zip_with(&rhs, |a, b| a + b),
            Operand::Scalar(scalar) => self.map_constant(|c| c + scalar),
        }
    }

    /// Combines `self` and `rhs` coefficient by coefficient, aligning them at the
    /// constant term so the shorter side is padded with leading zeros.
    pub(crate) fn zip_with<OP>(&self, rhs: &Polynomial, op: OP) -> Polynomial
    where
        OP: Fn(&Rational, &Rational) -> Rational,
    {
        let zero = Rational::zero();
        let mut coeffs: Vec<Rational> = self
            .iter()
            .rev()
            .zip_longest(rhs.iter().rev())
            .map(|pair| match pair {
                EitherOrBoth::Both(a, b) => op(a, b),
                EitherOrBoth::Left(a) => op(a, &zero),
                EitherOrBoth::Right(b) => op(&zero, b),
            })
            .collect();
        coeffs.reverse();
        Polynomial::normalized(coeffs)
    }

    /// Replaces the constant term by `op(constant)`, treating the zero polynomial
    /// as the constant zero.
    pub(crate) fn map_constant<OP>(&self, op: OP) -> Polynomial
    where
        OP: FnOnce(Rational) -> Rational,
    {
        let mut coeffs = self.coeffs.clone();
        match coeffs.last_mut() {
            Some(last) => *last = op(std::mem::replace(last, Rational::zero())),
            None => coeffs.push(op(Rational::zero())),
        }
        Polynomial::normalized(coeffs)
    }
}
