/// Creates a [`Polynomial`](crate::Polynomial) from integer coefficients,
/// highest degree first.
///
/// Expands to [`Polynomial::from_integers`](crate::Polynomial::from_integers),
/// so it evaluates to a `Result` which is an error for a zero leading coefficient.
///
/// ```
/// use polynomial::{poly, Polynomial};
///
/// assert_eq!(poly![].unwrap(), Polynomial::ZERO);
/// assert_eq!(poly![2, -1].unwrap().degree(), 1);
/// assert!(poly![0, 3].is_err());
/// ```
#[macro_export]
macro_rules! poly {
    () => {
        $crate::Polynomial::from_integers(&[])
    };
    ($($coeff:expr),+ $(,)?) => {
        $crate::Polynomial::from_integers(&[$($coeff),+])
    };
}
