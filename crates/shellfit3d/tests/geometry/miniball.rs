use na::{Point2, Point3, SVector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shellfit3d::bounding_volume::{minimum_bounding_sphere, Miniball, MiniballConfig};
use shellfit3d::math::Real;

#[test]
fn agrees_with_welzl_in_3d() {
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..20 {
        let pts: Vec<Point3<Real>> = (0..150)
            .map(|_| Point3::from(rng.gen::<SVector<Real, 3>>() * 10.0))
            .collect();

        let welzl = minimum_bounding_sphere(&pts).unwrap();
        let ball = Miniball::<3>::default().solve(&pts).unwrap();

        assert!(ball.converged);
        assert!(ball.support_size >= 2 && ball.support_size <= 4);
        assert_relative_eq!(ball.center, welzl.center, epsilon = 1.0e-6);
        assert_relative_eq!(ball.radius(), welzl.radius(), epsilon = 1.0e-6);
    }
}

#[test]
fn circle_in_2d() {
    let pts: Vec<_> = (0..1000)
        .map(|i| {
            let (sin, cos) = (i as Real * 0.01).sin_cos();
            Point2::new(3.0 + 2.0 * cos, -1.0 + 2.0 * sin)
        })
        .collect();

    let ball = Miniball::<2>::default().solve(&pts).unwrap();
    assert_relative_eq!(ball.center, Point2::new(3.0, -1.0), epsilon = 1.0e-9);
    assert_relative_eq!(ball.radius(), 2.0, epsilon = 1.0e-9);
}

#[test]
fn encloses_high_dimensional_clouds() {
    let mut rng = StdRng::seed_from_u64(11);
    let pts: Vec<na::Point<Real, 7>> = (0..500)
        .map(|_| na::Point::from(SVector::<Real, 7>::from_fn(|_, _| rng.gen_range(-1.0..1.0))))
        .collect();

    let config = MiniballConfig {
        max_iterations: 10_000,
        ..MiniballConfig::default()
    };
    let ball = Miniball::<7>::new(config).solve(&pts).unwrap();
    assert!(ball.converged);

    for p in &pts {
        assert!(na::distance_squared(p, &ball.center) <= ball.squared_radius * (1.0 + 1.0e-9));
    }
}
