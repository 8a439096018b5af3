use na::{Point3, Vector3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shellfit3d::bounding_volume::BoundingSphere;
use shellfit3d::math::Real;
use shellfit3d::transformation::{check_convex_hull, try_convex_hull, ConvexHull};

#[test]
fn random_clouds_give_valid_hulls() {
    let mut rng = StdRng::seed_from_u64(4);

    for n in [4, 10, 100, 1000] {
        let pts: Vec<Point3<Real>> = (0..n)
            .map(|_| Point3::from(rng.gen::<Vector3<Real>>() * 2.0))
            .collect();

        let (vertices, indices) = try_convex_hull(&pts).unwrap();
        assert_eq!(check_convex_hull(&vertices, &indices), Ok(()));

        // Every input point is behind every face.
        let hull = ConvexHull::new(vertices, indices);
        for [a, b, c] in hull.triangles() {
            let normal = (b - a).cross(&(c - a));
            for p in &pts {
                assert!((p - a).dot(&normal) <= 1.0e-9);
            }
        }
    }
}

#[test]
fn points_on_a_sphere_are_all_on_the_hull() {
    let mut rng = StdRng::seed_from_u64(12);
    let pts: Vec<_> = (0..500)
        .filter_map(|_| {
            let v = rng.gen::<Vector3<Real>>() - Vector3::repeat(0.5);
            v.try_normalize(1.0e-3).map(|n| Point3::from(n * 3.0))
        })
        .collect();
    let hull = ConvexHull::from_points(&pts).unwrap();

    assert_eq!(hull.vertices.len(), pts.len());
    assert_eq!(hull.validate(), Ok(()));
    // Euler characteristic of a triangulated sphere.
    assert_eq!(hull.indices.len(), 2 * hull.vertices.len() - 4);

    let sphere = BoundingSphere::new(Point3::origin(), 3.0);
    assert!(hull.vertices.iter().all(|v| sphere.contains_point_rel(v, 1.0e-9)));
}

#[test]
fn flat_inputs_give_double_sided_polygons() {
    let pts: Vec<_> = (0..20)
        .map(|i| {
            let (sin, cos) = (i as Real * 0.3).sin_cos();
            Point3::new(cos, sin, 0.5 * cos)
        })
        .collect();

    let (vertices, indices) = try_convex_hull(&pts).unwrap();
    assert!(vertices.len() >= 3);
    assert_eq!(indices.len(), 2 * (vertices.len() - 2));
}
