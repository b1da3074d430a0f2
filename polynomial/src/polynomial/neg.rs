use std::ops::Neg;

use super::Polynomial;

impl Neg for Polynomial {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            coeffs: self.coeffs.into_iter().map(|c| -c).collect(),
        }
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    #[inline]
    fn neg(self) -> Self::Output {
        Polynomial {
            coeffs: self.iter().map(|c| -c).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::poly;

    use super::*;

    #[test]
    fn test_neg() {
        let f = poly![1, -7, 0, 4].unwrap();
        assert_eq!(-&f, poly![-1, 7, 0, -4].unwrap());
        assert_eq!(-(-f.clone()), f);
        assert_eq!(-Polynomial::ZERO, Polynomial::ZERO);
    }
}
