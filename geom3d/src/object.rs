/// A 3D object aggregating triangles
use crate::tri::Tri;
use crate::vector::Vector3;

/// A passive aggregate of triangles with a position and rotation.
///
/// Position and rotation are plain data; this library never applies them to
/// the triangles. Interpreting them (and transforming or rendering the
/// triangle list) is the responsibility of an external collaborator.
#[derive(Debug, Clone, Default)]
pub struct Object {
    pub position: Vector3,
    pub rotation: Vector3,
    pub tris: Vec<Tri>,
}

impl Object {
    pub fn new(tris: Vec<Tri>) -> Self {
        Self {
            position: Vector3::zero(),
            rotation: Vector3::zero(),
            tris,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(Vec::with_capacity(capacity))
    }

    pub fn add_tri(&mut self, tri: Tri) {
        self.tris.push(tri);
    }
}
