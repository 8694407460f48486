/// An infinite line in R3
use crate::vector::Vector3;

/// A line through point `p` with direction `d`, the parametric set
/// `p + t * d` for all real `t`. The direction is not required to be unit
/// length and is never normalized by this library.
#[derive(Debug, Clone, Copy)]
pub struct Line {
    pub d: Vector3,
    pub p: Vector3,
}

impl Line {
    pub fn new(d: Vector3, p: Vector3) -> Self {
        Self { d, p }
    }

    /// Line through `p1` and `p2`, anchored at `p1`.
    ///
    /// Coincident points yield a zero-direction line; no validation is done.
    pub fn from_points(p1: Vector3, p2: Vector3) -> Self {
        Self::new(p2 - p1, p1)
    }

    /// Evaluate the line at parameter `t`
    pub fn point_at(self, t: f64) -> Vector3 {
        self.p + t * self.d
    }
}
