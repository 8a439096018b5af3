use crate::math::{Matrix, Point, Real, Vector};
use crate::num::Bounded;

/// Returns the index of the support point of an indexed list of points.
pub fn indexed_support_point_id<I>(
    direction: &Vector<Real>,
    points: &[Point<Real>],
    idx: I,
) -> Option<usize>
where
    I: Iterator<Item = usize>,
{
    let mut argmax = None;
    let mut max = -<Real as Bounded>::max_value();

    for i in idx {
        let dot = direction.dot(&points[i].coords);

        if dot > max {
            argmax = Some(i);
            max = dot;
        }
    }

    argmax
}

/// Returns the number `n` such that `points[idx.nth(n)]` is the support point.
pub fn indexed_support_point_nth<I>(
    direction: &Vector<Real>,
    points: &[Point<Real>],
    idx: I,
) -> Option<usize>
where
    I: Iterator<Item = usize>,
{
    let mut argmax = None;
    let mut max = -<Real as Bounded>::max_value();

    for (k, i) in idx.enumerate() {
        let dot = direction.dot(&points[i].coords);

        if dot > max {
            argmax = Some(k);
            max = dot;
        }
    }

    argmax
}

/// Scale and center the given set of point depending on their AABB.
///
/// Returns the original center and diagonal length of the AABB, or `None` if the point set
/// is empty or reduced to a single location.
pub fn normalize(coords: &mut [Point<Real>]) -> Option<(Point<Real>, Real)> {
    let (mins, maxs) = crate::utils::point_cloud_aabb(&Matrix::identity(), coords)?;
    let diag = na::distance(&mins, &maxs);

    if diag == 0.0 {
        return None;
    }

    let center = na::center(&mins, &maxs);

    for c in coords.iter_mut() {
        *c = (*c - center.coords) / diag;
    }

    Some((center, diag))
}

#[cfg(test)]
mod test {
    use super::{indexed_support_point_id, indexed_support_point_nth, normalize};
    use crate::math::{Point, Vector};

    #[test]
    fn normalized_cloud_fits_in_unit_diagonal() {
        let mut pts = vec![
            Point::new(10.0, 0.0, 0.0),
            Point::new(12.0, 2.0, 1.0),
            Point::new(11.0, 1.0, 0.5),
        ];
        let (center, diag) = normalize(&mut pts).unwrap();

        assert_relative_eq!(center, Point::new(11.0, 1.0, 0.5));
        assert_relative_eq!(diag, 3.0);
        assert_relative_eq!(pts[2], Point::origin());

        let mut single = vec![Point::new(1.0, 1.0, 1.0); 3];
        assert!(normalize(&mut single).is_none());
    }

    #[test]
    fn indexed_support_points() {
        let pts = [
            Point::new(0.0, 0.0, 0.0),
            Point::new(5.0, 0.0, 0.0),
            Point::new(3.0, 0.0, 0.0),
        ];
        let dir = Vector::x();

        assert_eq!(indexed_support_point_id(&dir, &pts, [0, 2].into_iter()), Some(2));
        assert_eq!(indexed_support_point_nth(&dir, &pts, [2, 1, 0].into_iter()), Some(1));
        assert_eq!(indexed_support_point_id(&dir, &pts, core::iter::empty()), None);
    }
}
