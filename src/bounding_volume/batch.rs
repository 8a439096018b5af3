//! Solving many independent point sets at once.

use crate::bounding_volume::{BoundingSphere, BoundingVolumeError, WelzlSolver};
use crate::math::{Point, Real};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Computes the minimum bounding sphere of each point set with `solver`.
///
/// The results are in the same order as `point_sets`. With the `parallel` feature, the
/// point sets are processed on the rayon thread pool; the results are identical to the
/// serial ones since each solve only depends on its own point set and on the solver seed.
pub fn minimum_spheres<S>(
    solver: &WelzlSolver,
    point_sets: &[S],
) -> Vec<Result<BoundingSphere, BoundingVolumeError>>
where
    S: AsRef<[Point<Real>]> + Sync,
{
    #[cfg(feature = "parallel")]
    {
        point_sets
            .par_iter()
            .map(|pts| solver.solve(pts.as_ref()))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        point_sets
            .iter()
            .map(|pts| solver.solve(pts.as_ref()))
            .collect()
    }
}
