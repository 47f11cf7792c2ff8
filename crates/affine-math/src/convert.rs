use dense_matrix::DenseMatrix;

use crate::error::AffineError;

fn check_4x4(m: &DenseMatrix) -> Result<(), AffineError> {
    if m.rows() != 4 || m.cols() != 4 {
        return Err(AffineError::InvalidShape {
            rows: m.rows(),
            cols: m.cols(),
        });
    }
    Ok(())
}

/// Flattens a 4x4 matrix into the column-major single-precision layout
/// OpenGL expects.
pub fn matrix_to_gl(m: &DenseMatrix) -> Result<[f32; 16], AffineError> {
    check_4x4(m)?;
    let mut out = [0.0f32; 16];
    let entries = m.as_slice();
    for row in 0..4 {
        for col in 0..4 {
            out[col * 4 + row] = entries[row * 4 + col] as f32;
        }
    }
    Ok(out)
}

/// Flattens a 4x4 matrix into a row-major array, the layout used by the
/// persistence format.
pub fn matrix_to_row_major(m: &DenseMatrix) -> Result<[f64; 16], AffineError> {
    check_4x4(m)?;
    let mut out = [0.0f64; 16];
    out.copy_from_slice(m.as_slice());
    Ok(out)
}

/// Rebuilds a 4x4 matrix from its row-major array form.
pub fn matrix_from_row_major(values: &[f64; 16]) -> DenseMatrix {
    DenseMatrix::from_row_slice(4, 4, values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gl_layout_is_column_major() {
        #[rustfmt::skip]
        let m = DenseMatrix::from_row_slice(4, 4, &[
            1.0,  2.0,  3.0,  4.0,
            5.0,  6.0,  7.0,  8.0,
            9.0,  10.0, 11.0, 12.0,
            13.0, 14.0, 15.0, 16.0,
        ]);
        let gl = matrix_to_gl(&m).unwrap();
        assert_eq!(gl[0], 1.0);
        assert_eq!(gl[1], 5.0);
        assert_eq!(gl[4], 2.0);
        assert_eq!(gl[12], 4.0);
        assert_eq!(gl[15], 16.0);
    }

    #[test]
    fn test_gl_rejects_non_4x4() {
        let m = DenseMatrix::identity(3);
        assert!(matches!(
            matrix_to_gl(&m),
            Err(AffineError::InvalidShape { rows: 3, cols: 3 })
        ));
    }

    #[test]
    fn test_row_major_roundtrip() {
        #[rustfmt::skip]
        let m = DenseMatrix::from_row_slice(4, 4, &[
            1.0, 0.0, 0.0, 7.0,
            0.0, 2.0, 0.0, -3.0,
            0.0, 0.0, 1.0, 0.5,
            0.0, 0.0, 0.0, 1.0,
        ]);
        let flat = matrix_to_row_major(&m).unwrap();
        assert_eq!(flat[3], 7.0);
        assert_eq!(flat[7], -3.0);
        let back = matrix_from_row_major(&flat);
        assert!(back.approx_eq(&m));
    }

    #[test]
    fn test_row_major_rejects_degenerate() {
        let m = DenseMatrix::new(0, 4);
        assert!(matrix_to_row_major(&m).is_err());
    }
}
