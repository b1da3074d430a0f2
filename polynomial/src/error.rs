//! This module defines the errors that
//! may occur while building or dividing polynomials.

use thiserror::Error;

/// The broad category of a [`PolynomialError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A value could not be taken as a rational number.
    Type,
    /// A value has the right type but is not acceptable.
    Value,
    /// A division with a zero divisor was attempted.
    DivisionByZero,
}

/// Errors that may occur.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolynomialError {
    /// Error that occurs when a supplied coefficient is not a rational number.
    #[error("coefficient #{index} `{value}` is not a rational number")]
    InvalidCoefficient {
        /// Position of the coefficient, counted from the highest degree.
        index: usize,
        /// The rejected input.
        value: String,
    },
    /// Error that occurs when an operand is neither a polynomial nor a rational scalar.
    #[error("operand `{value}` is not a rational number")]
    NotRational {
        /// The rejected input.
        value: String,
    },
    /// Error that occurs when a non-empty coefficient list starts with zero.
    #[error("the leading coefficient of a polynomial must not be zero")]
    LeadingZero,
    /// Error that occurs when dividing by the zero polynomial or a zero scalar.
    #[error("polynomial division by zero")]
    DivisionByZero,
    /// Error that occurs when a polynomial literal lacks the `Polynomial(...)` form.
    #[error("malformed polynomial literal `{0}`")]
    Malformed(String),
}

impl PolynomialError {
    /// Returns the category of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCoefficient { .. } | Self::NotRational { .. } => ErrorKind::Type,
            Self::LeadingZero | Self::Malformed(_) => ErrorKind::Value,
            Self::DivisionByZero => ErrorKind::DivisionByZero,
        }
    }
}
