use std::fmt::{self, Write};

use num_traits::{One, Signed, Zero};

use crate::Rational;

use super::Polynomial;

/// How [`Display`](fmt::Display) writes exponents and fractions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DisplayStyle {
    /// ASCII caret notation: `f(x) = 7/2x^3 - x + 4`.
    #[default]
    Caret,
    /// Unicode superscripts and fraction glyphs: `f(x) = ⁷⁄₂⋅x³ - x + 4`.
    Unicode,
}

/// A [`Polynomial`] paired with the [`DisplayStyle`] to render it with.
#[derive(Clone, Copy, Debug)]
pub struct Styled<'a> {
    polynomial: &'a Polynomial,
    style: DisplayStyle,
}

impl Polynomial {
    /// Returns a value displaying `self` in the given `style`.
    #[inline]
    pub fn display_with(&self, style: DisplayStyle) -> Styled<'_> {
        Styled {
            polynomial: self,
            style,
        }
    }

    /// Returns the exact form, e.g. `Polynomial(1, -7/2, 0)`, which parses back
    /// into an equal polynomial.
    #[inline]
    pub fn to_exact_string(&self) -> String {
        format!("{self:?}")
    }

    fn write_terms(&self, f: &mut fmt::Formatter<'_>, style: DisplayStyle) -> fmt::Result {
        f.write_str("f(x) = ")?;
        if self.is_zero() {
            return f.write_char('0');
        }

        let degree = self.coeff_count() - 1;
        for (i, coeff) in self.iter().enumerate() {
            if coeff.is_zero() {
                continue;
            }
            let sign = match (i, coeff.is_negative()) {
                (0, false) => "",
                (0, true) => "-",
                (_, false) => " + ",
                (_, true) => " - ",
            };
            f.write_str(sign)?;
            write_term(f, &coeff.abs(), degree - i, style)?;
        }
        Ok(())
    }
}

fn write_term(
    f: &mut fmt::Formatter<'_>,
    magnitude: &Rational,
    exponent: usize,
    style: DisplayStyle,
) -> fmt::Result {
    if exponent == 0 {
        return write_magnitude(f, magnitude, style);
    }
    if !magnitude.is_one() {
        write_magnitude(f, magnitude, style)?;
        if style == DisplayStyle::Unicode && !magnitude.is_integer() {
            f.write_char('⋅')?;
        }
    }
    f.write_char('x')?;
    match (exponent, style) {
        (1, _) => Ok(()),
        (e, DisplayStyle::Caret) => write!(f, "^{e}"),
        (e, DisplayStyle::Unicode) => f.write_str(&superscript(&e.to_string())),
    }
}

fn write_magnitude(
    f: &mut fmt::Formatter<'_>,
    magnitude: &Rational,
    style: DisplayStyle,
) -> fmt::Result {
    if magnitude.is_integer() || style == DisplayStyle::Caret {
        return write!(f, "{magnitude}");
    }
    write!(
        f,
        "{}⁄{}",
        superscript(&magnitude.numer().to_string()),
        subscript(&magnitude.denom().to_string())
    )
}

fn superscript(digits: &str) -> String {
    digits
        .chars()
        .map(|c| match c {
            '0' => '⁰',
            '1' => '¹',
            '2' => '²',
            '3' => '³',
            '4' => '⁴',
            '5' => '⁵',
            '6' => '⁶',
            '7' => '⁷',
            '8' => '⁸',
            '9' => '⁹',
            '-' => '⁻',
            other => other,
        })
        .collect()
}

fn subscript(digits: &str) -> String {
    digits
        .chars()
        .map(|c| match c {
            '0' => '₀',
            '1' => '₁',
            '2' => '₂',
            '3' => '₃',
            '4' => '₄',
            '5' => '₅',
            '6' => '₆',
            '7' => '₇',
            '8' => '₈',
            '9' => '₉',
            '-' => '₋',
            other => other,
        })
        .collect()
}

/// Writes `f(x) = …`; the alternate flag `{:#}` selects [`DisplayStyle::Unicode`].
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = if f.alternate() {
            DisplayStyle::Unicode
        } else {
            DisplayStyle::Caret
        };
        self.write_terms(f, style)
    }
}

impl fmt::Display for Styled<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.polynomial.write_terms(f, self.style)
    }
}

/// Writes the exact form `Polynomial(c₀, c₁, …)`.
impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Polynomial(")?;
        for (i, coeff) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{coeff}")?;
        }
        f.write_char(')')
    }
}
