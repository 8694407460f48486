//! Cross-type scenario and property tests for the geometry primitives.

use geom3d::{Line, Object, Plane, Tri, Vector3, EPSILON};

fn sample_vectors() -> Vec<Vector3> {
    vec![
        Vector3::zero(),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
        Vector3::new(1.0, 2.0, 3.0),
        Vector3::new(-4.5, 0.25, 10.0),
        Vector3::new(1e-3, -1e-3, 1e3),
    ]
}

#[test]
fn dot_commutes_over_samples() {
    for &a in &sample_vectors() {
        for &b in &sample_vectors() {
            assert!(
                (a.dot(b) - b.dot(a)).abs() < 1e-12,
                "dot not commutative for {} and {}",
                a,
                b
            );
        }
    }
}

#[test]
fn cross_anticommutes_over_samples() {
    for &a in &sample_vectors() {
        for &b in &sample_vectors() {
            assert!(
                a.cross(b).approx_eq(-1.0 * b.cross(a)),
                "cross not anticommutative for {} and {}",
                a,
                b
            );
        }
    }
}

#[test]
fn cross_is_perpendicular_to_both_inputs() {
    let a = Vector3::new(1.0, 2.0, 3.0);
    let b = Vector3::new(-2.0, 0.5, 1.0);
    let c = a.cross(b);
    assert!(c.dot(a).abs() < 1e-12);
    assert!(c.dot(b).abs() < 1e-12);
}

#[test]
fn normalized_samples_have_unit_norm() {
    for &v in &sample_vectors() {
        let n = v.normalized();
        if v.norm() > 0.0 {
            assert!((n.norm() - 1.0).abs() < EPSILON, "bad norm for {}", v);
        } else {
            assert_eq!(n.norm(), 0.0);
        }
    }
}

#[test]
fn line_through_triangle_hits_its_plane() {
    // Cast a line along a triangle's normal from above and check the hit
    // lands back on the triangle's supporting plane.
    let tri = Tri::new(
        Vector3::new(0.0, 0.0, 1.0),
        Vector3::new(2.0, 0.0, 1.0),
        Vector3::new(0.0, 2.0, 1.0),
    );
    let n = tri.normal();
    assert!(n.approx_eq(Vector3::new(0.0, 0.0, 1.0)));

    let plane = Plane::new(tri.p[1] - tri.p[0], tri.p[2] - tri.p[0], tri.p[0]);
    let start = Vector3::new(0.5, 0.5, 4.0);
    let line = Line::new(-1.0 * n, start);

    let hit = plane.intersect_line(line);
    assert!(hit.approx_eq(Vector3::new(0.5, 0.5, 1.0)));
}

#[test]
fn tangent_plane_recovers_line_direction() {
    // The tangent plane's derived normal must be parallel to the line's
    // direction (both spanning vectors are perpendicular to it).
    let line = Line::new(Vector3::new(2.0, -1.0, 0.5), Vector3::new(1.0, 1.0, 1.0));
    let plane = Plane::tangent_to(line);

    let n = plane.normal().normalized();
    let d = line.d.normalized();
    let aligned = n.approx_eq(d) || n.approx_eq(-1.0 * d);
    assert!(aligned, "normal {} not parallel to direction {}", n, d);

    // And the line itself pierces the tangent plane at its own anchor
    assert!(plane.intersect_line(line).approx_eq(line.p));
}

#[test]
fn object_aggregates_cube_faces() {
    let mut cube = Object::with_capacity(12);
    cube.position = Vector3::new(0.0, 0.0, -5.0);
    cube.rotation = Vector3::new(0.0, std::f64::consts::PI / 4.0, 0.0);

    let half = 0.5;
    // Front face, z = +half, split into two tris wound counter-clockwise
    cube.add_tri(Tri::new(
        Vector3::new(-half, -half, half),
        Vector3::new(half, -half, half),
        Vector3::new(half, half, half),
    ));
    cube.add_tri(Tri::new(
        Vector3::new(-half, -half, half),
        Vector3::new(half, half, half),
        Vector3::new(-half, half, half),
    ));

    for tri in &cube.tris {
        assert!(tri.normal().approx_eq(Vector3::new(0.0, 0.0, 1.0)));
    }
    // The aggregate never applies position/rotation to its triangles
    assert!(cube.tris[0].p[0].approx_eq(Vector3::new(-half, -half, half)));
}

#[test]
fn zero_direction_line_is_constructible() {
    let p = Vector3::new(1.0, 2.0, 3.0);
    let line = Line::from_points(p, p);
    assert!(line.d.approx_eq(Vector3::zero()));

    // A zero-direction line is parallel to everything: sentinel comes back
    assert!(Plane::default().intersect_line(line).approx_eq(Vector3::zero()));
}
