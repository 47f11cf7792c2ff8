use crate::error::MatrixError;
use crate::EPSILON;

/// A dense matrix of `f64` entries stored in row-major order.
///
/// The shape is dynamic: [`set_rows`](DenseMatrix::set_rows) and
/// [`set_cols`](DenseMatrix::set_cols) resize in place, preserving the
/// overlapping entries and zero-filling growth. A matrix with zero rows or
/// zero columns is degenerate: it is a legal value, but arithmetic on it
/// fails with [`MatrixError::Degenerate`].
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl DenseMatrix {
    /// Creates a zero-filled matrix of the given shape.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Creates an `n` by `n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::new(n, n);
        m.set_identity();
        m
    }

    /// Builds a matrix from a flat row-major slice.
    ///
    /// # Panics
    /// Panics if `values.len() != rows * cols`.
    pub fn from_row_slice(rows: usize, cols: usize, values: &[f64]) -> Self {
        assert_eq!(
            values.len(),
            rows * cols,
            "value count must equal rows * cols"
        );
        Self {
            rows,
            cols,
            data: values.to_vec(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True when the matrix has zero rows or zero columns.
    pub fn is_degenerate(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Row-major view of the entries.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Element access, 0-indexed.
    pub fn get(&self, row: usize, col: usize) -> Result<f64, MatrixError> {
        self.check_index(row, col)?;
        Ok(self.at(row, col))
    }

    /// Element assignment, 0-indexed.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), MatrixError> {
        self.check_index(row, col)?;
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Overwrites the matrix with the identity pattern: ones down the main
    /// diagonal up to `min(rows, cols)`, zeros elsewhere. Works for
    /// rectangular shapes as well.
    pub fn set_identity(&mut self) {
        self.data.fill(0.0);
        for i in 0..self.rows.min(self.cols) {
            self.data[i * self.cols + i] = 1.0;
        }
    }

    /// Resizes to `rows` rows, keeping existing entries that still fit and
    /// zero-filling any new ones.
    pub fn set_rows(&mut self, rows: usize) {
        if rows == self.rows {
            return;
        }
        self.data.resize(rows * self.cols, 0.0);
        self.rows = rows;
    }

    /// Resizes to `cols` columns, keeping existing entries that still fit
    /// and zero-filling any new ones.
    pub fn set_cols(&mut self, cols: usize) {
        if cols == self.cols {
            return;
        }
        let keep = self.cols.min(cols);
        let mut data = vec![0.0; self.rows * cols];
        for r in 0..self.rows {
            let src = r * self.cols;
            let dst = r * cols;
            data[dst..dst + keep].copy_from_slice(&self.data[src..src + keep]);
        }
        self.cols = cols;
        self.data = data;
    }

    /// Element-wise sum. Both operands must exist and share a shape.
    pub fn sum(&self, other: &DenseMatrix) -> Result<DenseMatrix, MatrixError> {
        self.check_exists()?;
        other.check_exists()?;
        self.check_same_shape(other)?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a + b)
            .collect();
        Ok(DenseMatrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// Element-wise difference. Both operands must exist and share a shape.
    pub fn difference(&self, other: &DenseMatrix) -> Result<DenseMatrix, MatrixError> {
        self.check_exists()?;
        other.check_exists()?;
        self.check_same_shape(other)?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a - b)
            .collect();
        Ok(DenseMatrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// Multiplies every entry by `factor`.
    pub fn scale(&self, factor: f64) -> Result<DenseMatrix, MatrixError> {
        self.check_exists()?;
        let data = self.data.iter().map(|a| a * factor).collect();
        Ok(DenseMatrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// Matrix product `self * other`. Requires `self.cols == other.rows`;
    /// the result has shape `self.rows` by `other.cols`.
    pub fn multiply(&self, other: &DenseMatrix) -> Result<DenseMatrix, MatrixError> {
        self.check_exists()?;
        other.check_exists()?;
        if self.cols != other.rows {
            return Err(MatrixError::DimensionMismatch {
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: other.rows,
                rhs_cols: other.cols,
            });
        }
        let mut result = DenseMatrix::new(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut acc = 0.0;
                for k in 0..self.cols {
                    acc += self.at(i, k) * other.at(k, j);
                }
                result.data[i * other.cols + j] = acc;
            }
        }
        Ok(result)
    }

    /// Returns the transposed matrix.
    pub fn transpose(&self) -> Result<DenseMatrix, MatrixError> {
        self.check_exists()?;
        let mut result = DenseMatrix::new(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                result.data[j * self.rows + i] = self.at(i, j);
            }
        }
        Ok(result)
    }

    /// Determinant by Laplace expansion along the first row.
    ///
    /// Factorial cost in the dimension; the shapes this system feeds it
    /// never exceed 4x4.
    pub fn determinant(&self) -> Result<f64, MatrixError> {
        self.check_exists()?;
        self.check_square()?;
        Ok(self.det_recursive())
    }

    /// Matrix of algebraic complements: each entry is the determinant of
    /// the corresponding minor with the `(-1)^(i+j)` sign applied. The
    /// complement of a 1x1 matrix is `[[1]]`.
    pub fn cofactor_matrix(&self) -> Result<DenseMatrix, MatrixError> {
        self.check_exists()?;
        self.check_square()?;
        if self.rows == 1 {
            return Ok(DenseMatrix::from_row_slice(1, 1, &[1.0]));
        }
        let mut result = DenseMatrix::new(self.rows, self.cols);
        for i in 0..self.rows {
            for j in 0..self.cols {
                let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
                result.data[i * self.cols + j] = sign * self.minor(i, j).det_recursive();
            }
        }
        Ok(result)
    }

    /// Inverse via the adjugate: `transpose(cofactor_matrix) / det`.
    /// Fails with [`MatrixError::Singular`] when `|det| < EPSILON`.
    pub fn inverse(&self) -> Result<DenseMatrix, MatrixError> {
        let det = self.determinant()?;
        if det.abs() < EPSILON {
            return Err(MatrixError::Singular { determinant: det });
        }
        let adjugate = self.cofactor_matrix()?.transpose()?;
        adjugate.scale(1.0 / det)
    }

    /// Tolerance comparison at [`EPSILON`]. False when the shapes differ
    /// or either operand is degenerate.
    pub fn approx_eq(&self, other: &DenseMatrix) -> bool {
        if self.is_degenerate() || other.is_degenerate() {
            return false;
        }
        if self.rows != other.rows || self.cols != other.cols {
            return false;
        }
        self.data
            .iter()
            .zip(&other.data)
            .all(|(a, b)| (a - b).abs() < EPSILON)
    }

    /// Unchecked element access (row, col), 0-indexed.
    fn at(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    fn det_recursive(&self) -> f64 {
        if self.rows == 1 {
            return self.data[0];
        }
        let mut det = 0.0;
        let mut sign = 1.0;
        for j in 0..self.cols {
            det += sign * self.at(0, j) * self.minor(0, j).det_recursive();
            sign = -sign;
        }
        det
    }

    /// Copy of the matrix with `row` and `col` removed.
    fn minor(&self, row: usize, col: usize) -> DenseMatrix {
        let mut m = DenseMatrix::new(self.rows - 1, self.cols - 1);
        let mut dst = 0;
        for i in 0..self.rows {
            if i == row {
                continue;
            }
            for j in 0..self.cols {
                if j == col {
                    continue;
                }
                m.data[dst] = self.at(i, j);
                dst += 1;
            }
        }
        m
    }

    fn check_exists(&self) -> Result<(), MatrixError> {
        if self.is_degenerate() {
            return Err(MatrixError::Degenerate {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    fn check_square(&self) -> Result<(), MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    fn check_same_shape(&self, other: &DenseMatrix) -> Result<(), MatrixError> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrixError::DimensionMismatch {
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: other.rows,
                rhs_cols: other.cols,
            });
        }
        Ok(())
    }

    fn check_index(&self, row: usize, col: usize) -> Result<(), MatrixError> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

impl approx::AbsDiffEq for DenseMatrix {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| f64::abs_diff_eq(a, b, epsilon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zero_filled() {
        let m = DenseMatrix::new(3, 2);
        for i in 0..3 {
            for j in 0..2 {
                assert_eq!(m.get(i, j).unwrap(), 0.0);
            }
        }
    }

    #[test]
    fn test_get_set_roundtrip() {
        let mut m = DenseMatrix::new(2, 2);
        m.set(1, 0, 4.5).unwrap();
        assert_eq!(m.get(1, 0).unwrap(), 4.5);
    }

    #[test]
    fn test_get_out_of_range() {
        let m = DenseMatrix::new(2, 2);
        assert!(matches!(m.get(2, 0), Err(MatrixError::OutOfRange { .. })));
        assert!(matches!(m.get(0, 2), Err(MatrixError::OutOfRange { .. })));
    }

    #[test]
    fn test_degenerate_shapes_are_constructible() {
        let m = DenseMatrix::new(0, 5);
        assert!(m.is_degenerate());
        let m = DenseMatrix::new(5, 0);
        assert!(m.is_degenerate());
        let m = DenseMatrix::new(0, 0);
        assert!(m.is_degenerate());
    }

    #[test]
    fn test_degenerate_operations_fail() {
        let d = DenseMatrix::new(0, 3);
        let ok = DenseMatrix::identity(3);
        assert!(matches!(d.sum(&d), Err(MatrixError::Degenerate { .. })));
        assert!(matches!(d.difference(&d), Err(MatrixError::Degenerate { .. })));
        assert!(matches!(d.scale(2.0), Err(MatrixError::Degenerate { .. })));
        assert!(matches!(d.multiply(&ok), Err(MatrixError::Degenerate { .. })));
        assert!(matches!(ok.multiply(&d), Err(MatrixError::Degenerate { .. })));
        assert!(matches!(d.transpose(), Err(MatrixError::Degenerate { .. })));
        assert!(matches!(d.determinant(), Err(MatrixError::Degenerate { .. })));
        assert!(matches!(d.inverse(), Err(MatrixError::Degenerate { .. })));
    }

    #[test]
    fn test_degenerate_can_be_resized_back() {
        let mut m = DenseMatrix::new(0, 0);
        m.set_rows(2);
        m.set_cols(2);
        assert!(!m.is_degenerate());
        m.set_identity();
        assert!(m.approx_eq(&DenseMatrix::identity(2)));
    }

    #[test]
    fn test_sum_and_difference() {
        let a = DenseMatrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = DenseMatrix::from_row_slice(2, 2, &[0.5, 0.5, 0.5, 0.5]);
        let s = a.sum(&b).unwrap();
        assert!(s.approx_eq(&DenseMatrix::from_row_slice(2, 2, &[1.5, 2.5, 3.5, 4.5])));
        let d = s.difference(&b).unwrap();
        assert!(d.approx_eq(&a));
    }

    #[test]
    fn test_sum_shape_mismatch() {
        let a = DenseMatrix::new(2, 2);
        let b = DenseMatrix::new(2, 3);
        assert!(matches!(
            a.sum(&b),
            Err(MatrixError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_scale() {
        let a = DenseMatrix::from_row_slice(2, 2, &[1.0, -2.0, 3.0, -4.0]);
        let s = a.scale(-2.0).unwrap();
        assert!(s.approx_eq(&DenseMatrix::from_row_slice(2, 2, &[-2.0, 4.0, -6.0, 8.0])));
    }

    #[test]
    fn test_multiply_shapes() {
        let a = DenseMatrix::new(2, 3);
        let b = DenseMatrix::new(3, 4);
        let p = a.multiply(&b).unwrap();
        assert_eq!(p.rows(), 2);
        assert_eq!(p.cols(), 4);
        assert!(matches!(
            b.multiply(&a.transpose().unwrap()),
            Err(MatrixError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_multiply_values() {
        let a = DenseMatrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let b = DenseMatrix::from_row_slice(3, 2, &[7.0, 8.0, 9.0, 10.0, 11.0, 12.0]);
        let p = a.multiply(&b).unwrap();
        #[rustfmt::skip]
        let expected = DenseMatrix::from_row_slice(2, 2, &[
            58.0,  64.0,
            139.0, 154.0,
        ]);
        assert!(p.approx_eq(&expected));
    }

    #[test]
    fn test_multiply_by_identity() {
        let a = DenseMatrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let p = a.multiply(&DenseMatrix::identity(2)).unwrap();
        assert!(p.approx_eq(&a));
    }

    #[test]
    fn test_transpose_involution() {
        let a = DenseMatrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let t = a.transpose().unwrap();
        assert_eq!(t.rows(), 3);
        assert_eq!(t.cols(), 2);
        assert_eq!(t.get(0, 1).unwrap(), 4.0);
        assert!(t.transpose().unwrap().approx_eq(&a));
    }

    #[test]
    fn test_determinant_1x1_and_2x2() {
        let m = DenseMatrix::from_row_slice(1, 1, &[7.0]);
        assert!((m.determinant().unwrap() - 7.0).abs() < 1e-12);
        let m = DenseMatrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        assert!((m.determinant().unwrap() - (-2.0)).abs() < 1e-12);
    }

    #[test]
    fn test_determinant_3x3() {
        #[rustfmt::skip]
        let m = DenseMatrix::from_row_slice(3, 3, &[
            2.0, -3.0, 1.0,
            2.0,  0.0, -1.0,
            1.0,  4.0, 5.0,
        ]);
        assert!((m.determinant().unwrap() - 49.0).abs() < 1e-12);
    }

    #[test]
    fn test_determinant_4x4() {
        #[rustfmt::skip]
        let m = DenseMatrix::from_row_slice(4, 4, &[
            1.0, 0.0, 2.0, -1.0,
            3.0, 0.0, 0.0,  5.0,
            2.0, 1.0, 4.0, -3.0,
            1.0, 0.0, 5.0,  0.0,
        ]);
        assert!((m.determinant().unwrap() - 30.0).abs() < 1e-12);
    }

    #[test]
    fn test_determinant_not_square() {
        let m = DenseMatrix::new(2, 3);
        assert!(matches!(m.determinant(), Err(MatrixError::NotSquare { .. })));
    }

    #[test]
    fn test_cofactor_matrix_1x1() {
        let m = DenseMatrix::from_row_slice(1, 1, &[42.0]);
        let c = m.cofactor_matrix().unwrap();
        assert_eq!(c.get(0, 0).unwrap(), 1.0);
    }

    #[test]
    fn test_cofactor_matrix_3x3() {
        #[rustfmt::skip]
        let m = DenseMatrix::from_row_slice(3, 3, &[
            1.0, 2.0, 3.0,
            0.0, 4.0, 2.0,
            5.0, 2.0, 1.0,
        ]);
        #[rustfmt::skip]
        let expected = DenseMatrix::from_row_slice(3, 3, &[
            0.0,  10.0, -20.0,
            4.0,  -14.0, 8.0,
            -8.0, -2.0,  4.0,
        ]);
        assert!(m.cofactor_matrix().unwrap().approx_eq(&expected));
    }

    #[test]
    fn test_inverse_3x3() {
        #[rustfmt::skip]
        let m = DenseMatrix::from_row_slice(3, 3, &[
            2.0, 5.0, 7.0,
            6.0, 3.0, 4.0,
            5.0, -2.0, -3.0,
        ]);
        #[rustfmt::skip]
        let expected = DenseMatrix::from_row_slice(3, 3, &[
            1.0, -1.0, 1.0,
            -38.0, 41.0, -34.0,
            27.0, -29.0, 24.0,
        ]);
        assert!(m.inverse().unwrap().approx_eq(&expected));
    }

    #[test]
    fn test_inverse_times_original_is_identity() {
        #[rustfmt::skip]
        let m = DenseMatrix::from_row_slice(4, 4, &[
            4.0, 0.0, 0.0, 1.0,
            0.0, 2.0, 1.0, 0.0,
            0.0, 1.0, 3.0, 0.0,
            1.0, 0.0, 0.0, 2.0,
        ]);
        let inv = m.inverse().unwrap();
        assert!(m.multiply(&inv).unwrap().approx_eq(&DenseMatrix::identity(4)));
        assert!(inv.multiply(&m).unwrap().approx_eq(&DenseMatrix::identity(4)));
    }

    #[test]
    fn test_inverse_singular() {
        #[rustfmt::skip]
        let m = DenseMatrix::from_row_slice(2, 2, &[
            1.0, 2.0,
            2.0, 4.0,
        ]);
        assert!(matches!(m.inverse(), Err(MatrixError::Singular { .. })));
    }

    #[test]
    fn test_set_identity_rectangular() {
        let mut m = DenseMatrix::from_row_slice(2, 3, &[9.0; 6]);
        m.set_identity();
        #[rustfmt::skip]
        let expected = DenseMatrix::from_row_slice(2, 3, &[
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
        ]);
        assert!(m.approx_eq(&expected));

        let mut m = DenseMatrix::from_row_slice(3, 2, &[9.0; 6]);
        m.set_identity();
        #[rustfmt::skip]
        let expected = DenseMatrix::from_row_slice(3, 2, &[
            1.0, 0.0,
            0.0, 1.0,
            0.0, 0.0,
        ]);
        assert!(m.approx_eq(&expected));
    }

    #[test]
    fn test_set_rows_preserves_overlap() {
        let mut m = DenseMatrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        m.set_rows(3);
        assert_eq!(m.get(0, 0).unwrap(), 1.0);
        assert_eq!(m.get(1, 1).unwrap(), 4.0);
        assert_eq!(m.get(2, 0).unwrap(), 0.0);
        m.set_rows(1);
        assert_eq!(m.rows(), 1);
        assert_eq!(m.get(0, 1).unwrap(), 2.0);
    }

    #[test]
    fn test_set_cols_preserves_overlap() {
        let mut m = DenseMatrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        m.set_cols(3);
        assert_eq!(m.get(0, 0).unwrap(), 1.0);
        assert_eq!(m.get(1, 1).unwrap(), 4.0);
        assert_eq!(m.get(0, 2).unwrap(), 0.0);
        m.set_cols(1);
        assert_eq!(m.cols(), 1);
        assert_eq!(m.get(1, 0).unwrap(), 3.0);
    }

    #[test]
    fn test_approx_eq_tolerance() {
        let a = DenseMatrix::from_row_slice(1, 1, &[1.0]);
        let near = DenseMatrix::from_row_slice(1, 1, &[1.0 + EPSILON / 2.0]);
        let far = DenseMatrix::from_row_slice(1, 1, &[1.0 + EPSILON * 2.0]);
        assert!(a.approx_eq(&near));
        assert!(!a.approx_eq(&far));
    }

    #[test]
    fn test_approx_eq_rejects_shape_mismatch_and_degenerate() {
        let a = DenseMatrix::new(2, 2);
        let b = DenseMatrix::new(2, 3);
        assert!(!a.approx_eq(&b));
        let d = DenseMatrix::new(0, 0);
        assert!(!d.approx_eq(&d.clone()));
    }
}
