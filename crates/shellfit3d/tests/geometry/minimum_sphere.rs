use na::{Point3, Rotation3, Vector3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shellfit3d::bounding_volume::{
    batch, minimum_bounding_sphere, BoundingSphere, BoundingVolume, BoundingVolumeError,
    WelzlSolver,
};
use shellfit3d::math::Real;

fn random_cloud(seed: u64, n: usize) -> Vec<Point3<Real>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Point3::new(
                rng.gen_range(-3.0..3.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-2.0..5.0),
            )
        })
        .collect()
}

fn assert_encloses(sphere: &BoundingSphere, pts: &[Point3<Real>]) {
    for pt in pts {
        assert!(
            na::distance(pt, &sphere.center) <= sphere.radius() + 1.0e-7,
            "{:?} is outside of {:?}",
            pt,
            sphere
        );
    }
}

#[test]
fn two_points() {
    let pts = [Point3::new(1.0, 0.0, 0.0), Point3::new(5.0, 0.0, 0.0)];
    let sphere = minimum_bounding_sphere(&pts).unwrap();

    assert_relative_eq!(sphere.center, Point3::new(3.0, 0.0, 0.0), epsilon = 1.0e-9);
    assert_relative_eq!(sphere.radius(), 2.0, epsilon = 1.0e-9);
}

#[test]
fn right_triangle() {
    let pts = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(2.0, 0.0, 0.0),
        Point3::new(0.0, 2.0, 0.0),
    ];
    let sphere = minimum_bounding_sphere(&pts).unwrap();

    assert_relative_eq!(sphere.center, Point3::new(1.0, 1.0, 0.0), epsilon = 1.0e-9);
    assert_relative_eq!(sphere.radius(), Real::sqrt(2.0), epsilon = 1.0e-9);
}

#[test]
fn cube_corners() {
    let pts: Vec<_> = (0..8)
        .map(|i| {
            Point3::new(
                if i & 1 == 0 { -1.0 } else { 1.0 },
                if i & 2 == 0 { -1.0 } else { 1.0 },
                if i & 4 == 0 { -1.0 } else { 1.0 },
            )
        })
        .collect();
    let sphere = minimum_bounding_sphere(&pts).unwrap();

    assert_relative_eq!(sphere.center, Point3::origin(), epsilon = 1.0e-9);
    assert_relative_eq!(sphere.radius(), Real::sqrt(3.0), epsilon = 1.0e-9);
}

#[test]
fn result_does_not_depend_on_the_seed() {
    let pts = random_cloud(0, 300);
    let reference = WelzlSolver::with_seed(1).solve(&pts).unwrap();
    assert_encloses(&reference, &pts);

    for seed in [2, 3, 42, 1234, u64::MAX] {
        let sphere = WelzlSolver::with_seed(seed).solve(&pts).unwrap();
        assert_relative_eq!(sphere.center, reference.center, epsilon = 1.0e-5);
        assert_relative_eq!(sphere.radius(), reference.radius(), epsilon = 1.0e-5);
    }
}

#[test]
fn support_points_reproduce_the_sphere() {
    for seed in 0..10 {
        let pts = random_cloud(seed, 100);
        let solver = WelzlSolver::default();
        let (sphere, support) = solver.solve_with_support(&pts).unwrap();

        assert!(!support.is_empty() && support.len() <= 4);
        for i in &support {
            let dist = na::distance(&pts[*i], &sphere.center);
            assert_relative_eq!(dist, sphere.radius(), epsilon = 1.0e-5);
        }

        let boundary: Vec<_> = support.iter().map(|i| pts[*i]).collect();
        let again = solver.solve(&boundary).unwrap();
        assert_relative_eq!(again.center, sphere.center, epsilon = 1.0e-5);
        assert_relative_eq!(again.radius(), sphere.radius(), epsilon = 1.0e-5);
    }
}

#[test]
fn translation_and_scale_equivariance() {
    let pts = random_cloud(7, 200);
    let sphere = minimum_bounding_sphere(&pts).unwrap();

    let shift = Vector3::new(10.0, -20.0, 3.5);
    let scale = 2.5;
    let moved: Vec<_> = pts.iter().map(|p| p * scale + shift).collect();
    let moved_sphere = minimum_bounding_sphere(&moved).unwrap();

    assert_relative_eq!(
        moved_sphere.center,
        sphere.center * scale + shift,
        epsilon = 1.0e-6
    );
    assert_relative_eq!(moved_sphere.radius(), sphere.radius() * scale, epsilon = 1.0e-5);

    let rot = Rotation3::from_euler_angles(0.2, 1.3, -0.6);
    let rotated: Vec<_> = pts.iter().map(|p| rot * p).collect();
    let rotated_sphere = minimum_bounding_sphere(&rotated).unwrap();
    assert_relative_eq!(rotated_sphere.center, rot * sphere.center, epsilon = 1.0e-5);
}

#[test]
fn sphere_surface_is_recovered() {
    let mut rng = StdRng::seed_from_u64(99);
    let center = Point3::new(-4.0, 2.0, 7.5);
    let radius = 3.25;

    let pts: Vec<_> = (0..2000)
        .map(|_| {
            let dir: Vector3<Real> = loop {
                let v = Vector3::new(
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                );
                if let Some(v) = v.try_normalize(1.0e-3) {
                    break v;
                }
            };
            center + dir * radius
        })
        .collect();

    let sphere = minimum_bounding_sphere(&pts).unwrap();
    assert_relative_eq!(sphere.center, center, epsilon = 1.0e-4);
    assert_relative_eq!(sphere.radius(), radius, epsilon = 1.0e-4);
    assert_encloses(&sphere, &pts);
}

#[test]
fn subdivided_sphere_mesh_vertices() {
    let generating = BoundingSphere::new(Point3::new(1.0, 1.0, 1.0), 10.0);
    let mesh = generating.to_polymesh(64, 40);
    assert!(mesh.positions.len() > 1000);

    let sphere = minimum_bounding_sphere(&mesh.positions).unwrap();
    assert_relative_eq!(sphere.center, generating.center, epsilon = 1.0e-4);
    assert_relative_eq!(sphere.radius(), generating.radius(), epsilon = 1.0e-4);
}

#[test]
fn invalid_inputs() {
    assert_eq!(
        minimum_bounding_sphere(&[]),
        Err(BoundingVolumeError::InsufficientInput {
            required: 1,
            given: 0
        })
    );
    assert_eq!(
        minimum_bounding_sphere(&[Point3::origin(), Point3::new(Real::INFINITY, 0.0, 0.0)]),
        Err(BoundingVolumeError::NonFiniteInput(1))
    );
}

#[test]
fn batch_of_clouds() {
    let clouds: Vec<_> = (0..16).map(|seed| random_cloud(seed, 50)).collect();
    let solver = WelzlSolver::default();

    for (cloud, sphere) in clouds.iter().zip(batch::minimum_spheres(&solver, &clouds)) {
        let sphere = sphere.unwrap();
        assert!(sphere.contains_points(cloud, 1.0e-6));
    }
}
