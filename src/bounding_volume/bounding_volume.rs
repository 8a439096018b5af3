use crate::math::{Isometry, Point, Real};

/// Trait of the bounding volumes fitted by this crate.
///
/// Bounding volumes are coarse approximations of a point set, with cheap inclusion tests.
pub trait BoundingVolume: Sized {
    /// Returns a point inside of this bounding volume. This is ideally its center.
    fn center(&self) -> Point<Real>;

    /// Checks if `pt` lies inside of this bounding volume, with the absolute distance
    /// tolerance `tolerance`.
    fn contains_local_point(&self, pt: &Point<Real>, tolerance: Real) -> bool;

    /// The volume enclosed by this bounding volume.
    fn volume(&self) -> Real;

    /// Creates a new, enlarged version, of this bounding volume.
    ///
    /// Every point of the boundary is pushed outward by `amount`.
    fn loosened(&self, amount: Real) -> Self;

    /// Creates a new bounding volume equal to `self` moved by the rigid transformation `m`.
    fn transform_by(&self, m: &Isometry<Real>) -> Self;

    /// Checks if every point of `pts` lies inside of this bounding volume.
    fn contains_points(&self, pts: &[Point<Real>], tolerance: Real) -> bool {
        pts.iter().all(|pt| self.contains_local_point(pt, tolerance))
    }
}
