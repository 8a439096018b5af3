use crate::bounding_volume::error::check_input;
use crate::bounding_volume::{BoundingVolume, BoundingVolumeError, OrientedBox};
use crate::math::{Matrix, Point, Real, Rotation, DEFAULT_EPSILON};
use crate::transformation::{ConvexHull, ConvexHullBuilder};
use crate::utils;

/// Computes the minimum-volume oriented box enclosing `points`.
///
/// The convex hull of `points` is computed with `builder`, then passed to
/// [`minimum_oriented_box_from_hull`].
pub fn minimum_oriented_box(
    points: &[Point<Real>],
    builder: &impl ConvexHullBuilder,
) -> Result<OrientedBox, BoundingVolumeError> {
    check_input(points, 3)?;
    let hull = builder.build(points)?;
    hull.check_indices()?;

    if hull.vertices.len() < 3 {
        return Err(BoundingVolumeError::DegenerateInput);
    }

    minimum_oriented_box_from_hull(&hull)
}

/// Computes the minimum-volume oriented box enclosing a convex hull.
///
/// A minimal box of a convex polyhedron has a face flush with a face of the polyhedron, so
/// only the bases built from a hull face are tested: for every face of normal `n` and every
/// edge direction `e` of this face, the basis `[e, n × e, n]`. Among boxes of equal volume
/// (e.g. for a flat hull, where every volume is zero), the one with the smallest surface
/// area is kept.
///
/// Faces with a near-zero normal are skipped. If no face is left, this returns
/// [`BoundingVolumeError::DegenerateInput`]. A face referring to a missing vertex is an
/// error, see [`ConvexHull::check_indices`].
pub fn minimum_oriented_box_from_hull(
    hull: &ConvexHull,
) -> Result<OrientedBox, BoundingVolumeError> {
    let vertices = &hull.vertices;
    check_input(vertices, 3)?;
    hull.check_indices()?;

    let mut best: Option<(OrientedBox, Real, Real)> = None;

    for idx in &hull.indices {
        let [a, b, c] = idx.map(|i| vertices[i as usize]);
        let normal = (b - a).cross(&(c - a));
        let Some(normal) = normal.try_normalize(DEFAULT_EPSILON) else {
            continue;
        };

        for edge in [b - a, c - b, a - c] {
            let Some(edge) = edge.try_normalize(DEFAULT_EPSILON) else {
                continue;
            };

            let basis = Matrix::from_columns(&[edge, normal.cross(&edge), normal]);
            let Some((mins, maxs)) = utils::point_cloud_aabb(&basis, vertices) else {
                continue;
            };

            let candidate = OrientedBox::new(Rotation::from_matrix_unchecked(basis), mins, maxs);
            let volume = candidate.volume();
            let area = candidate.surface_area();

            let better = match &best {
                None => true,
                Some((_, best_volume, best_area)) => {
                    if relative_eq!(volume, *best_volume, epsilon = 1.0e-12, max_relative = 1.0e-9)
                    {
                        area < *best_area
                    } else {
                        volume < *best_volume
                    }
                }
            };

            if better {
                best = Some((candidate, volume, area));
            }
        }
    }

    best.map(|(obb, _, _)| obb)
        .ok_or(BoundingVolumeError::DegenerateInput)
}
