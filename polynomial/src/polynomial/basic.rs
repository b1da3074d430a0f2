use std::iter::{Product, Sum};
use std::ops::Index;
use std::slice::SliceIndex;

use num_traits::{One, Zero};

use crate::{PolynomialError, Rational};

use super::Polynomial;

impl<I: SliceIndex<[Rational]>> Index<I> for Polynomial {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(&*self.coeffs, index)
    }
}

impl AsRef<[Rational]> for Polynomial {
    #[inline]
    fn as_ref(&self) -> &[Rational] {
        self.coeffs.as_ref()
    }
}

impl IntoIterator for Polynomial {
    type Item = Rational;

    type IntoIter = std::vec::IntoIter<Rational>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.coeffs.into_iter()
    }
}

impl<'a> IntoIterator for &'a Polynomial {
    type Item = &'a Rational;

    type IntoIter = std::slice::Iter<'a, Rational>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.coeffs.iter()
    }
}

impl TryFrom<Vec<Rational>> for Polynomial {
    type Error = PolynomialError;

    #[inline]
    fn try_from(coeffs: Vec<Rational>) -> Result<Self, Self::Error> {
        Self::new(coeffs)
    }
}

impl From<Polynomial> for Vec<Rational> {
    #[inline]
    fn from(polynomial: Polynomial) -> Self {
        polynomial.coeffs
    }
}

impl Zero for Polynomial {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }
}

impl One for Polynomial {
    #[inline]
    fn one() -> Self {
        Self {
            coeffs: vec![Rational::one()],
        }
    }
}

impl Sum for Polynomial {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, p| acc + p)
    }
}

impl<'a> Sum<&'a Polynomial> for Polynomial {
    fn sum<I: Iterator<Item = &'a Polynomial>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, p| acc + p)
    }
}

impl Product for Polynomial {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, p| acc * p)
    }
}

impl<'a> Product<&'a Polynomial> for Polynomial {
    fn product<I: Iterator<Item = &'a Polynomial>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, p| acc * p)
    }
}
