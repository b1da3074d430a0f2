use super::{Operand, Polynomial};

impl Polynomial {
    /// Performs subtraction operation: `self - rhs`.
    ///
    /// A scalar is subtracted from the constant term only.
    pub fn sub_operand(&self, rhs: Operand) -> Polynomial {
        match rhs {
            Operand::Polynomial(rhs) => self.zip_with(&rhs, |a, b| a - b),
            Operand::Scalar(scalar) => self.map_constant(|c| c - scalar),
        }
    }
}
