use na::{Point3, Rotation3, Vector3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shellfit3d::bounding_volume::{
    minimum_oriented_box, minimum_oriented_box_from_hull, BoundingVolume, OrientedBox,
};
use shellfit3d::math::Real;
use shellfit3d::transformation::{try_convex_hull, ConvexHull, IncrementalHull};

fn box_cloud(rng: &mut StdRng, half_extents: Vector3<Real>) -> Vec<Point3<Real>> {
    let mut pts: Vec<_> = (0..8)
        .map(|i| {
            Point3::new(
                if i & 1 == 0 { -half_extents.x } else { half_extents.x },
                if i & 2 == 0 { -half_extents.y } else { half_extents.y },
                if i & 4 == 0 { -half_extents.z } else { half_extents.z },
            )
        })
        .collect();

    for _ in 0..100 {
        pts.push(Point3::new(
            rng.gen_range(-half_extents.x..half_extents.x),
            rng.gen_range(-half_extents.y..half_extents.y),
            rng.gen_range(-half_extents.z..half_extents.z),
        ));
    }

    pts
}

#[test]
fn encloses_random_clouds() {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..10 {
        let pts: Vec<_> = (0..200)
            .map(|_| {
                Point3::new(
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-4.0..4.0),
                    rng.gen_range(-0.5..2.0),
                )
            })
            .collect();

        let obb = minimum_oriented_box(&pts, &IncrementalHull).unwrap();
        assert!(obb.contains_points(&pts, 1.0e-9));
        assert_relative_eq!(obb.basis_matrix().determinant(), 1.0, epsilon = 1.0e-9);

        let aabb = OrientedBox::axis_aligned(&pts).unwrap();
        assert!(aabb.contains_points(&pts, 0.0));
    }
}

#[test]
fn rotation_consistency() {
    let mut rng = StdRng::seed_from_u64(8);
    let pts = box_cloud(&mut rng, Vector3::new(0.5, 1.5, 4.0));
    let reference = minimum_oriented_box(&pts, &IncrementalHull).unwrap();
    assert_relative_eq!(reference.volume(), 24.0, epsilon = 1.0e-8);

    for _ in 0..5 {
        let rot = Rotation3::new(rng.gen::<Vector3<Real>>() * 3.0);
        let shift = rng.gen::<Vector3<Real>>() * 10.0;
        let moved: Vec<_> = pts.iter().map(|p| rot * p + shift).collect();

        let obb = minimum_oriented_box(&moved, &IncrementalHull).unwrap();
        assert_relative_eq!(obb.volume(), reference.volume(), epsilon = 1.0e-8);
        assert_relative_eq!(obb.center(), rot * reference.center() + shift, epsilon = 1.0e-8);

        // Each box axis is a rotated reference axis, up to its sign and order.
        for i in 0..3 {
            let axis = obb.basis_matrix().column(i).into_owned();
            let best = (0..3)
                .map(|j| {
                    let expected = rot * reference.basis_matrix().column(j).into_owned();
                    axis.dot(&expected).abs()
                })
                .fold(0.0, Real::max);
            assert_relative_eq!(best, 1.0, epsilon = 1.0e-8);
        }
    }
}

#[test]
fn custom_hull_builder() {
    let mut rng = StdRng::seed_from_u64(21);
    let pts = box_cloud(&mut rng, Vector3::new(1.0, 1.0, 2.0));

    let from_closure = minimum_oriented_box(&pts, &try_convex_hull).unwrap();
    let hull = ConvexHull::from(try_convex_hull(&pts).unwrap());
    let from_hull = minimum_oriented_box_from_hull(&hull).unwrap();

    assert_eq!(from_closure, from_hull);
    assert_relative_eq!(from_hull.volume(), 16.0, epsilon = 1.0e-8);
}
