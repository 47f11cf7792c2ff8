use affine_math::AffineError;
use dense_matrix::MatrixError;
use obj_import::ParseFatal;

/// Errors from scene operations.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("model has no vertices")]
    EmptyModel,

    #[error("import error: {0}")]
    Import(#[from] ParseFatal),

    #[error("transform error: {0}")]
    Affine(#[from] AffineError),

    #[error("matrix error: {0}")]
    Matrix(#[from] MatrixError),
}
