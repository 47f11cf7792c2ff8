//! Assertion helpers with diagnostic output.
//!
//! Every failure names the offending entry and reports expected vs actual
//! values with the caller's context string.

use affine_math::Vector3;
use dense_matrix::DenseMatrix;
use scene_engine::Scene;

use crate::helpers::HarnessError;

/// Assert a 4x4 matrix matches the expected row-major entries within `tol`.
pub fn assert_matrix_eq(
    actual: &DenseMatrix,
    expected: &[f64; 16],
    tol: f64,
    ctx: &str,
) -> Result<(), HarnessError> {
    if actual.rows() != 4 || actual.cols() != 4 {
        return Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] expected a 4x4 matrix, got {}x{}",
                ctx,
                actual.rows(),
                actual.cols(),
            ),
        });
    }
    for row in 0..4 {
        for col in 0..4 {
            let value = actual.get(row, col).map_err(|e| HarnessError::Scene(e.to_string()))?;
            let want = expected[row * 4 + col];
            if (value - want).abs() > tol {
                return Err(HarnessError::AssertionFailed {
                    detail: format!(
                        "[{}] entry ({},{}): expected {:.6}, got {:.6} (tol={})",
                        ctx, row, col, want, value, tol,
                    ),
                });
            }
        }
    }
    Ok(())
}

/// Assert two vectors agree componentwise within `tol`.
pub fn assert_vector_eq(
    actual: Vector3,
    expected: Vector3,
    tol: f64,
    ctx: &str,
) -> Result<(), HarnessError> {
    let pairs = [
        ("x", actual.x, expected.x),
        ("y", actual.y, expected.y),
        ("z", actual.z, expected.z),
    ];
    for (axis, got, want) in pairs {
        if (got - want).abs() > tol {
            return Err(HarnessError::AssertionFailed {
                detail: format!(
                    "[{}] component {}: expected {:.6}, got {:.6} (tol={})",
                    ctx, axis, want, got, tol,
                ),
            });
        }
    }
    Ok(())
}

/// Assert two scalars agree within `tol`.
pub fn assert_scalar_eq(
    actual: f64,
    expected: f64,
    tol: f64,
    ctx: &str,
) -> Result<(), HarnessError> {
    if (actual - expected).abs() > tol {
        return Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] expected {:.6}, got {:.6} (tol={})",
                ctx, expected, actual, tol,
            ),
        });
    }
    Ok(())
}

/// Assert exact model counts (vertices, faces, edges) on a scene.
pub fn assert_counts(
    scene: &Scene,
    expected_vertices: usize,
    expected_faces: usize,
    expected_edges: usize,
    ctx: &str,
) -> Result<(), HarnessError> {
    let v = scene.vertex_count();
    let f = scene.face_count();
    let e = scene.edge_count();

    if v == expected_vertices && f == expected_faces && e == expected_edges {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] expected V={} F={} E={}, got V={} F={} E={}",
                ctx, expected_vertices, expected_faces, expected_edges, v, f, e,
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_mismatch_names_entry() {
        let actual = DenseMatrix::identity(4);
        let mut expected = [0.0; 16];
        for i in 0..4 {
            expected[i * 4 + i] = 1.0;
        }
        assert!(assert_matrix_eq(&actual, &expected, 1e-12, "ok").is_ok());

        expected[6] = 5.0;
        let err = assert_matrix_eq(&actual, &expected, 1e-12, "bad").unwrap_err();
        let detail = err.to_string();
        assert!(detail.contains("[bad]"));
        assert!(detail.contains("(1,2)"));
    }

    #[test]
    fn test_vector_mismatch_names_component() {
        let err = assert_vector_eq(
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, 2.0, 0.0),
            1e-9,
            "vec",
        )
        .unwrap_err();
        assert!(err.to_string().contains("component y"));
    }
}
