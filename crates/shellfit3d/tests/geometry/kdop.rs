use na::{Point3, Vector3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shellfit3d::bounding_volume::{BoundingVolumeError, KDop, KDopDirections};
use shellfit3d::math::Real;
use shellfit3d::transformation::{ConvexHullError, IncrementalHull};

#[test]
fn supporting_planes_enclose_the_input() {
    let mut rng = StdRng::seed_from_u64(17);
    let pts: Vec<Point3<Real>> = (0..400)
        .map(|_| Point3::from(rng.gen::<Vector3<Real>>() - Vector3::repeat(0.5)) * 4.0)
        .collect();

    for dirs in [
        KDopDirections::Dop6,
        KDopDirections::Dop10,
        KDopDirections::Dop14,
        KDopDirections::Dop18,
        KDopDirections::Dop26,
    ] {
        let dop = KDop::new(&pts, dirs, &IncrementalHull).unwrap();
        assert_eq!(dop.k(), dirs.k());
        assert!(pts.iter().all(|p| dop.contains_point(p, 1.0e-9)));

        // Every plane touches its extreme point.
        for (n, offset) in dop.normals.iter().zip(dop.offsets.iter()) {
            let touching = dop
                .support_indices
                .iter()
                .any(|i| relative_eq!(pts[*i].coords.dot(n), *offset, epsilon = 1.0e-12));
            assert!(touching);
        }

        assert_eq!(dop.hull.validate(), Ok(()));
        for v in &dop.hull.vertices {
            assert!(pts.contains(v));
        }
    }
}

#[test]
fn hull_errors_are_propagated() {
    let pts = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
    ];
    let failing = |_: &[Point3<Real>]| -> Result<(Vec<Point3<Real>>, Vec<[u32; 3]>), ConvexHullError> {
        Err(ConvexHullError::InternalError("test"))
    };

    assert_eq!(
        KDop::new(&pts, KDopDirections::default(), &failing),
        Err(BoundingVolumeError::ConvexHull(ConvexHullError::InternalError("test")))
    );
}
