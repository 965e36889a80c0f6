// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned by [`AffineMatrix::invert`](crate::AffineMatrix::invert)
/// when the matrix has no inverse.
///
/// A matrix is treated as singular when the absolute value of its determinant
/// is below [`SINGULARITY_EPSILON`](crate::SINGULARITY_EPSILON).
#[derive(Clone, Copy, PartialEq)]
pub struct SingularMatrixError {
    /// Determinant of the rejected matrix.
    pub determinant: f64,
}

impl fmt::Debug for SingularMatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SingularMatrixError {{ determinant: {:?} }}",
            self.determinant
        )
    }
}

impl fmt::Display for SingularMatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("matrix is not invertible")
    }
}

impl core::error::Error for SingularMatrixError {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::SingularMatrixError;

    #[test]
    fn display_message() {
        let err = SingularMatrixError { determinant: 0.0 };
        assert_eq!(err.to_string(), "matrix is not invertible");
    }
}
