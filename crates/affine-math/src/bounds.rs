use serde::{Deserialize, Serialize};

use crate::vector::Vector3;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Vector3,
    pub max: Vector3,
}

impl BoundingBox {
    pub fn new(min: Vector3, max: Vector3) -> Self {
        Self { min, max }
    }

    /// Smallest box containing every point. `None` when `points` is empty.
    pub fn from_points(points: &[Vector3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bb = Self::new(*first, *first);
        for p in rest {
            bb.expand_to_include(p);
        }
        Some(bb)
    }

    pub fn expand_to_include(&mut self, p: &Vector3) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.min.z = self.min.z.min(p.z);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
        self.max.z = self.max.z.max(p.z);
    }

    /// The 8 box corners, bottom face first.
    pub fn corners(&self) -> [Vector3; 8] {
        let (min, max) = (self.min, self.max);
        [
            Vector3::new(min.x, min.y, min.z),
            Vector3::new(max.x, min.y, min.z),
            Vector3::new(min.x, max.y, min.z),
            Vector3::new(max.x, max.y, min.z),
            Vector3::new(min.x, min.y, max.z),
            Vector3::new(max.x, min.y, max.z),
            Vector3::new(min.x, max.y, max.z),
            Vector3::new(max.x, max.y, max.z),
        ]
    }

    pub fn center(&self) -> Vector3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }
}

/// Zero-sized box at the origin.
impl Default for BoundingBox {
    fn default() -> Self {
        Self::new(Vector3::ZERO, Vector3::ZERO)
    }
}
