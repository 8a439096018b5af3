use crate::math::{Matrix, Point, Real, Vector};

/// Computes the extents of a point cloud, expressed in the frame whose axes are the columns
/// of `basis`.
///
/// Returns `(mins, maxs)`. With the identity basis this is the usual axis-aligned bounding
/// box. Returns `None` if `pts` is empty.
pub fn point_cloud_aabb(
    basis: &Matrix<Real>,
    pts: &[Point<Real>],
) -> Option<(Point<Real>, Point<Real>)> {
    let mut it = pts.iter();
    let first = basis.tr_mul(&it.next()?.coords);
    let mut mins: Vector<Real> = first;
    let mut maxs: Vector<Real> = first;

    for pt in it {
        let local = basis.tr_mul(&pt.coords);
        mins = mins.inf(&local);
        maxs = maxs.sup(&local);
    }

    Some((Point::from(mins), Point::from(maxs)))
}
