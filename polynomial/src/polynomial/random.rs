use std::iter;

use num_bigint::BigInt;
use num_traits::Zero;
use rand::Rng;

use crate::Rational;

use super::Polynomial;

/// Bound on the absolute value of sampled numerators.
const NUMERATOR_BOUND: i64 = 100;
/// Largest sampled denominator.
const DENOMINATOR_BOUND: i64 = 16;

impl Polynomial {
    /// Generate a random [`Polynomial`] of degree `degree`.
    ///
    /// Coefficients are fractions with numerators in `[-100, 100]` and
    /// denominators in `[1, 16]`; the leading coefficient is never zero.
    pub fn random<R>(degree: usize, rng: &mut R) -> Self
    where
        R: Rng,
    {
        let lead = loop {
            let c = random_coefficient(rng);
            if !c.is_zero() {
                break c;
            }
        };
        Self {
            coeffs: iter::once(lead)
                .chain((0..degree).map(|_| random_coefficient(rng)))
                .collect(),
        }
    }

    /// Generate a random [`Polynomial`] of degree `degree` with integer coefficients
    /// in `[-bound, bound]`.
    ///
    /// # Panics
    /// Panics if `bound` is not positive.
    pub fn random_integral<R>(degree: usize, bound: i64, rng: &mut R) -> Self
    where
        R: Rng,
    {
        assert!(bound > 0, "bound must be positive");
        let lead = loop {
            let c: i64 = rng.gen_range(-bound..=bound);
            if c != 0 {
                break c;
            }
        };
        Self {
            coeffs: iter::once(lead)
                .chain((0..degree).map(|_| rng.gen_range(-bound..=bound)))
                .map(|c| Rational::from_integer(BigInt::from(c)))
                .collect(),
        }
    }
}

fn random_coefficient<R: Rng>(rng: &mut R) -> Rational {
    let numer = rng.gen_range(-NUMERATOR_BOUND..=NUMERATOR_BOUND);
    let denom = rng.gen_range(1..=DENOMINATOR_BOUND);
    Rational::new(BigInt::from(numer), BigInt::from(denom))
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn test_random_degree() {
        let mut rng = StdRng::seed_from_u64(7);
        for degree in 0..8 {
            let f = Polynomial::random(degree, &mut rng);
            assert_eq!(f.degree(), degree as isize);
            assert!(f.leading_coefficient().is_some_and(|c| !c.is_zero()));

            let g = Polynomial::random_integral(degree, 5, &mut rng);
            assert_eq!(g.degree(), degree as isize);
            assert!(g.iter().all(|c| c.is_integer()));
        }
    }
}
