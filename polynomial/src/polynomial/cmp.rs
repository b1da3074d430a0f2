use std::cmp::Ordering;

use super::Polynomial;

/// Representation order: polynomials are ordered by degree first and then
/// lexicographically by their coefficients, highest degree first.
///
/// This says nothing about the values the polynomials take at any point.
impl Ord for Polynomial {
    fn cmp(&self, other: &Self) -> Ordering {
        self.coeff_count()
            .cmp(&other.coeff_count())
            .then_with(|| self.coeffs.cmp(&other.coeffs))
    }
}

impl PartialOrd for Polynomial {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
