/// A plane in R3 and line-plane intersection
use crate::line::Line;
use crate::vector::Vector3;

/// A plane spanned by `d1` and `d2` through point `p`, the parametric set
/// `p + s * d1 + t * d2`. The normal is derived on demand, never stored; if
/// the spanning vectors are parallel (or either is zero) the derived normal
/// is the zero vector and intersection queries degenerate to the sentinel.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    pub d1: Vector3,
    pub d2: Vector3,
    pub p: Vector3,
}

impl Plane {
    pub fn new(d1: Vector3, d2: Vector3, p: Vector3) -> Self {
        Self { d1, d2, p }
    }

    /// The plane perpendicular to `line`'s direction, through its anchor.
    ///
    /// The first spanning vector is found by seeding `(0, 1, 0)` and solving
    /// its z component so it dots to zero against the direction; when the
    /// direction has `z == 0` exactly, the seed `(0, 0, 1)` is already
    /// perpendicular and is used as-is. The second spanning vector is the
    /// cross of the first with the direction.
    pub fn tangent_to(line: Line) -> Self {
        let mut a = Vector3::new(0.0, 1.0, 0.0);
        if line.d.z == 0.0 {
            a = Vector3::new(0.0, 0.0, 1.0);
        } else {
            a.z = -line.d.y / line.d.z;
        }
        let b = a.cross(line.d);

        Self::new(a, b, line.p)
    }

    /// Normal vector of the plane, `cross(d1, d2)`, not normalized
    pub fn normal(&self) -> Vector3 {
        self.d1.cross(self.d2)
    }

    /// Intersection point of `line` with this plane.
    ///
    /// Solves `dot(n, p + t * d - plane.p) == 0` for `t`. When
    /// `dot(n, line.d)` is exactly zero there is no unique intersection
    /// (the line is parallel to the plane or lies inside it, the two cases
    /// are not distinguished) and the zero-vector sentinel is returned.
    pub fn intersect_line(&self, line: Line) -> Vector3 {
        let n = self.normal();
        let numerator = n.dot(self.p - line.p);
        let denominator = n.dot(line.d);

        if denominator == 0.0 {
            return Vector3::zero();
        }

        // Solve for t
        let t = numerator / denominator;

        line.point_at(t)
    }
}

/// The XY-plane through the origin
impl Default for Plane {
    fn default() -> Self {
        Self::new(
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::zero(),
        )
    }
}
