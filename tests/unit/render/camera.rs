use super::*;

fn cam(elev: f64, azim: f64) -> Camera {
    Camera::from_viewpoint(Viewpoint::new(elev, azim).unwrap())
}

#[test]
fn basis_is_orthonormal() {
    for (e, a) in [(60.0, 0.0), (0.0, 90.0), (30.0, 217.0), (90.0, 45.0), (120.0, 10.0)] {
        let c = cam(e, a);
        assert!((c.eye.length() - 1.0).abs() < 1e-12);
        assert!((c.right.length() - 1.0).abs() < 1e-12);
        assert!((c.up.length() - 1.0).abs() < 1e-12);
        assert!(c.eye.dot(c.right).abs() < 1e-12);
        assert!(c.eye.dot(c.up).abs() < 1e-12);
        assert!(c.right.dot(c.up).abs() < 1e-12);
    }
}

#[test]
fn side_view_keeps_z_vertical() {
    let c = cam(0.0, 0.0);
    let top = c.project(Vec3::new(0.0, 0.0, 1.0));
    assert!(top.x.abs() < 1e-12);
    assert!((top.y - 1.0).abs() < 1e-12);

    // Looking down +x towards the origin, +y is to the right.
    let side = c.project(Vec3::new(0.0, 1.0, 0.0));
    assert!((side.x - 1.0).abs() < 1e-12);
}

#[test]
fn points_towards_viewer_are_closer() {
    let c = cam(30.0, 45.0);
    let near = c.eye() * 2.0;
    let far = c.eye() * -2.0;
    assert!(c.depth(near) > c.depth(far));
    assert!(c.depth(Vec3::default()).abs() < 1e-12);
}

#[test]
fn full_turn_azimuth_is_identical_view() {
    let a = cam(60.0, 10.0);
    let b = cam(60.0, 370.0);
    let p = Vec3::new(0.3, -0.7, 0.2);
    let (pa, pb) = (a.project(p), b.project(p));
    assert!((pa.x - pb.x).abs() < 1e-9);
    assert!((pa.y - pb.y).abs() < 1e-9);
}
