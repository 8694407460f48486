/// A triangular face in R3
use crate::vector::Vector3;

/// A triangle of three owned vertex positions (no shared vertex pool)
#[derive(Debug, Clone, Copy)]
pub struct Tri {
    pub p: [Vector3; 3],
}

impl Tri {
    pub fn new(p0: Vector3, p1: Vector3, p2: Vector3) -> Self {
        Self { p: [p0, p1, p2] }
    }

    /// Unit surface normal of the triangle.
    ///
    /// Computed from the edge cross product with right-hand winding, so the
    /// vertex order determines the sign. Collinear or coincident vertices
    /// give a zero cross product, which is returned as the zero vector.
    pub fn normal(&self) -> Vector3 {
        let d1 = self.p[1] - self.p[0];
        let d2 = self.p[2] - self.p[0];

        d1.cross(d2).normalized()
    }
}
