use affine_math::{BoundingBox, Vector3};
use obj_import::MeshData;

use crate::error::SceneError;

/// A loaded wireframe model: mesh geometry plus its axis-aligned bounds.
///
/// Starts empty with a zero-sized bounding box at the origin; the box is
/// recomputed whenever new mesh data is installed.
#[derive(Debug, Clone, Default)]
pub struct Model {
    mesh: MeshData,
    bounds: BoundingBox,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the mesh wholesale and recompute the bounding box.
    ///
    /// Fails with [`SceneError::EmptyModel`] when the mesh has no vertices,
    /// leaving the previous contents in place.
    pub fn set_data(&mut self, mesh: MeshData) -> Result<(), SceneError> {
        let bounds = BoundingBox::from_points(&mesh.vertices).ok_or(SceneError::EmptyModel)?;
        self.mesh = mesh;
        self.bounds = bounds;
        Ok(())
    }

    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bounds
    }

    pub fn vertices(&self) -> &[Vector3] {
        &self.mesh.vertices
    }

    pub fn faces(&self) -> &[Vec<u32>] {
        &self.mesh.faces
    }

    pub fn edges(&self) -> &[(u32, u32)] {
        &self.mesh.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.mesh.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.mesh.faces.len()
    }

    pub fn edge_count(&self) -> usize {
        self.mesh.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mesh.is_empty()
    }

    /// Vertex positions flattened for GL upload, 3 floats per vertex in
    /// insertion order.
    pub fn vertices_to_gl(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.mesh.vertices.len() * 3);
        for v in &self.mesh.vertices {
            out.push(v.x as f32);
            out.push(v.y as f32);
            out.push(v.z as f32);
        }
        out
    }

    /// Edge endpoints flattened for GL upload, 2 indices per edge in
    /// stored order.
    pub fn edges_to_gl(&self) -> Vec<u32> {
        let mut out = Vec::with_capacity(self.mesh.edges.len() * 2);
        for &(a, b) in &self.mesh.edges {
            out.push(a);
            out.push(b);
        }
        out
    }
}
