use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shellfit3d::bounding_volume::{
    BoundingCapsule, BoundingCylinder, BoundingVolume, FitAxis, OrientedBox,
};
use shellfit3d::math::{Isometry, Point, Real, Vector};
use shellfit3d::transformation::CapFill;

fn elongated_cloud(seed: u64) -> Vec<Point<Real>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let pose = Isometry::new(Vector::new(2.0, -1.0, 0.5), Vector::new(0.3, 0.9, -0.2));

    (0..300)
        .map(|_| {
            let local = Point::new(
                rng.gen_range(-0.5..0.5),
                rng.gen_range(-0.5..0.5),
                rng.gen_range(-5.0..5.0),
            );
            pose * local
        })
        .collect()
}

#[test]
fn fitted_primitives_enclose_the_cloud() {
    let pts = elongated_cloud(1);

    for axis in [FitAxis::X, FitAxis::Y, FitAxis::Z, FitAxis::Auto] {
        let capsule = BoundingCapsule::fit(&pts, axis).unwrap();
        assert!(capsule.contains_points(&pts, 1.0e-7));

        let cylinder = BoundingCylinder::fit(&pts, axis).unwrap();
        assert!(cylinder.contains_points(&pts, 1.0e-7));
    }
}

#[test]
fn auto_axis_follows_the_cloud() {
    let pts = elongated_cloud(2);
    let auto = BoundingCapsule::fit(&pts, FitAxis::Auto).unwrap();
    let aabb = OrientedBox::axis_aligned(&pts).unwrap();

    for axis in [FitAxis::X, FitAxis::Y, FitAxis::Z] {
        let fixed = BoundingCapsule::fit(&pts, axis).unwrap();
        assert!(auto.volume() <= fixed.volume());
    }

    // The capsule is much thinner than the cloud is long.
    assert!(auto.radius < 1.0);
    assert!(auto.depth > 8.0);
    assert!(auto.volume() < aabb.volume());
}

#[test]
fn fitted_meshes_are_closed() {
    let pts = elongated_cloud(3);

    let capsule = BoundingCapsule::fit(&pts, FitAxis::Auto).unwrap();
    let mesh = capsule.to_polymesh(&Default::default());
    assert!(mesh.is_closed_manifold());

    let cylinder = BoundingCylinder::fit(&pts, FitAxis::Auto).unwrap();
    let mesh = cylinder.to_polymesh(24, CapFill::TriangleFan);
    assert!(mesh.is_closed_manifold());

    for p in &mesh.positions {
        assert!(cylinder.contains_local_point(p, 1.0e-9));
    }
}
