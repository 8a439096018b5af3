use crate::math::{Point2, Real};
use core::cmp::Ordering;

/// Computes the convex hull of a set of 2d points.
///
/// The hull vertices are returned in counter-clockwise order. Points lying in the
/// interior of a hull edge are not part of the result.
pub fn convex_hull2(points: &[Point2<Real>]) -> Vec<Point2<Real>> {
    convex_hull2_idx(points)
        .into_iter()
        .map(|id| points[id])
        .collect()
}

/// Computes the convex hull of a set of 2d points, as indices into `points`.
///
/// This is Andrew's monotone chain: the points are sorted lexicographically, then the
/// lower and upper chains are built by discarding every point that does not make a
/// strict left turn. The indices are in counter-clockwise order, starting from the
/// lexicographically smallest point.
pub fn convex_hull2_idx(points: &[Point2<Real>]) -> Vec<usize> {
    let mut sorted: Vec<usize> = (0..points.len()).collect();
    sorted.sort_by(|a, b| {
        let (pa, pb) = (&points[*a], &points[*b]);
        pa.x.partial_cmp(&pb.x)
            .unwrap_or(Ordering::Equal)
            .then(pa.y.partial_cmp(&pb.y).unwrap_or(Ordering::Equal))
    });
    sorted.dedup_by(|a, b| points[*a] == points[*b]);

    if sorted.len() < 3 {
        return sorted;
    }

    let turn = |o: usize, a: usize, b: usize| {
        let oa = points[a] - points[o];
        let ob = points[b] - points[o];
        oa.perp(&ob)
    };

    let mut hull: Vec<usize> = Vec::with_capacity(2 * sorted.len());

    // Lower chain.
    for &id in &sorted {
        while hull.len() >= 2 && turn(hull[hull.len() - 2], hull[hull.len() - 1], id) <= 0.0 {
            let _ = hull.pop();
        }
        hull.push(id);
    }

    // Upper chain.
    let lower_len = hull.len() + 1;
    for &id in sorted.iter().rev().skip(1) {
        while hull.len() >= lower_len
            && turn(hull[hull.len() - 2], hull[hull.len() - 1], id) <= 0.0
        {
            let _ = hull.pop();
        }
        hull.push(id);
    }

    // The last point is the first one.
    let _ = hull.pop();
    hull
}
