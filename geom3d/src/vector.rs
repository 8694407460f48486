/// A vector in R3 and its arithmetic
use std::fmt;
use std::ops::{Add, Mul, Sub};

use nalgebra::Point3;
use nalgebra::Vector3 as NVector3;

/// Component-wise tolerance for approximate vector equality.
///
/// Two vectors compare equal when every component difference lies strictly
/// inside (-EPSILON, EPSILON). This is an axis-aligned box test, not a
/// Euclidean distance test.
pub const EPSILON: f64 = 0.005;

/// A 3D vector with `f64` components
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The zero vector, also used as the "no result" sentinel by
    /// degenerate intersection cases
    pub fn zero() -> Self {
        Self::default()
    }

    /// Dot product of two vectors
    pub fn dot(self, other: Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product of two vectors
    pub fn cross(self, other: Vector3) -> Vector3 {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Approximate equality: every component difference must lie strictly
    /// within (-[`EPSILON`], [`EPSILON`]). A difference of exactly
    /// [`EPSILON`] in any axis compares unequal.
    pub fn approx_eq(self, other: Vector3) -> bool {
        let diff = self - other;
        diff.x < EPSILON
            && diff.x > -EPSILON
            && diff.y < EPSILON
            && diff.y > -EPSILON
            && diff.z < EPSILON
            && diff.z > -EPSILON
    }

    /// Euclidean length of the vector
    pub fn norm(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Returns this vector scaled to unit length.
    ///
    /// The zero vector is returned unchanged rather than dividing by zero.
    pub fn normalized(self) -> Vector3 {
        let n = self.norm();
        if n == 0.0 {
            return self;
        }
        Vector3::new(self.x / n, self.y / n, self.z / n)
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, other: Vector3) -> Vector3 {
        self + -1.0 * other
    }
}

/// Scale a vector by a scalar, `k * v` form
impl Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        Vector3::new(self * v.x, self * v.y, self * v.z)
    }
}

/// Scale a vector by a scalar, `v * k` form
impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, k: f64) -> Vector3 {
        k * self
    }
}

/// Formats as `(x, y, z)` with default float-to-decimal conversion
impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// Conversions to and from nalgebra, for callers that hand geometry to a
// nalgebra-based renderer or physics step.

impl From<Vector3> for NVector3<f64> {
    fn from(v: Vector3) -> Self {
        NVector3::new(v.x, v.y, v.z)
    }
}

impl From<NVector3<f64>> for Vector3 {
    fn from(v: NVector3<f64>) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for Point3<f64> {
    fn from(v: Vector3) -> Self {
        Point3::new(v.x, v.y, v.z)
    }
}
