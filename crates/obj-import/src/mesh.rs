use affine_math::Vector3;

/// Geometry accumulated from one OBJ file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    /// Vertex positions in file order.
    pub vertices: Vec<Vector3>,
    /// Faces as corrected 0-based vertex index lists.
    pub faces: Vec<Vec<u32>>,
    /// Undirected wireframe edges as `(low, high)` index pairs,
    /// deduplicated, in first-appearance order.
    pub edges: Vec<(u32, u32)>,
}

impl MeshData {
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
