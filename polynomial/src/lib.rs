#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Univariate polynomials with exact rational coefficients.
//!
//! A [`Polynomial`] is an immutable value holding its coefficients from the
//! highest degree down to the constant term. It is always kept in normal form,
//! that is the leading coefficient is non-zero or there are no coefficients at all
//! (the zero polynomial, [`Polynomial::ZERO`]).
//!
//! ```
//! use polynomial::{poly, Polynomial};
//!
//! let f = poly![4, -1, 2, 1, 0, -1].unwrap();
//! let g = poly![1, 0, 1].unwrap();
//!
//! let (q, r) = f.divmod(&g).unwrap();
//! assert_eq!(q, poly![4, -1, -2, 2].unwrap());
//! assert_eq!(r, poly![2, -3].unwrap());
//! assert_eq!(f.to_string(), "f(x) = 4x^5 - x^4 + 2x^3 + x^2 - 1");
//! ```

pub mod error;
pub mod polynomial;

mod macros;

pub use error::{ErrorKind, PolynomialError};
pub use polynomial::*;

pub use num_bigint::BigInt;
pub use num_rational::BigRational;

/// The coefficient field of every [`Polynomial`]: arbitrary precision fractions,
/// always reduced to lowest terms with a positive denominator.
pub type Rational = BigRational;
