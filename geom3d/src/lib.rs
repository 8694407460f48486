//! geom3d - Minimal 3D analytic geometry primitives
//!
//! Vectors, lines, planes, triangles, and a triangle-aggregating object,
//! intended as the math foundation for an external renderer or physics
//! collaborator. All operations are pure value computations; degenerate
//! inputs produce documented sentinel values instead of errors.

pub mod line;
pub mod object;
pub mod plane;
pub mod tri;
pub mod vector;

// Re-export commonly used types
pub use line::Line;
pub use object::Object;
pub use plane::Plane;
pub use tri::Tri;
pub use vector::{Vector3, EPSILON};
