use super::{check_facet_links, ConvexHullError, TriangleFacet};
use crate::math::{Point, Point2, Real, Vector};
use crate::transformation::convex_hull2_idx;
use crate::utils;
use core::cmp::Ordering;

pub enum InitialMesh {
    Facets(Vec<TriangleFacet>),
    ResultMesh(Vec<Point<Real>>, Vec<[u32; 3]>),
}

fn build_degenerate_mesh_point(point: Point<Real>) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
    let ta = [0u32; 3];
    let tb = [0u32; 3];

    (vec![point], vec![ta, tb])
}

fn build_degenerate_mesh_segment(
    dir: &Vector<Real>,
    points: &[Point<Real>],
) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
    let a = utils::point_cloud_support_point(dir, points);
    let b = utils::point_cloud_support_point(&-*dir, points);

    let ta = [0u32, 1, 0];
    let tb = [1u32, 0, 0];

    (vec![a, b], vec![ta, tb])
}

pub fn get_initial_mesh(
    original_points: &[Point<Real>],
    normalized_points: &mut [Point<Real>],
    undecidable: &mut Vec<usize>,
) -> Result<InitialMesh, ConvexHullError> {
    /*
     * Compute the eigenvectors to see if the input data live on a subspace.
     */
    let cov_mat = utils::cov(normalized_points);
    let eig = cov_mat.symmetric_eigen();
    let eigvec = eig.eigenvectors;
    let eigval = eig.eigenvalues;

    let mut eigpairs = [
        (eigvec.column(0).into_owned(), eigval[0]),
        (eigvec.column(1).into_owned(), eigval[1]),
        (eigvec.column(2).into_owned(), eigval[2]),
    ];

    // Sort in decreasing order wrt. eigenvalues.
    eigpairs.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    /*
     * Count the dimension the data lives in.
     */
    let mut dimension = 0;
    while dimension < 3 {
        if relative_eq!(eigpairs[dimension].1, 0.0, epsilon = 1.0e-7) {
            break;
        }

        dimension += 1;
    }

    match dimension {
        0 => {
            // The hull is a point.
            let (vtx, idx) = build_degenerate_mesh_point(original_points[0]);
            Ok(InitialMesh::ResultMesh(vtx, idx))
        }
        1 => {
            // The hull is a segment.
            let (vtx, idx) = build_degenerate_mesh_segment(&eigpairs[0].0, original_points);
            Ok(InitialMesh::ResultMesh(vtx, idx))
        }
        2 => {
            // The hull is a polygon.
            // Project into the principal plane…
            let axis1 = &eigpairs[0].0;
            let axis2 = &eigpairs[1].0;

            let subspace_points: Vec<_> = normalized_points
                .iter()
                .map(|pt| Point2::new(pt.coords.dot(axis1), pt.coords.dot(axis2)))
                .collect();

            // … and compute the 2d convex hull.
            let idx = convex_hull2_idx(&subspace_points);

            if idx.len() < 3 {
                // Rounding made the polygon collapse.
                let (vtx, idx) = build_degenerate_mesh_segment(&eigpairs[0].0, original_points);
                return Ok(InitialMesh::ResultMesh(vtx, idx));
            }

            // Finalize the result, triangulating both sides of the polygon.
            let npoints = idx.len() as u32;
            let coords = idx.into_iter().map(|i| original_points[i]).collect();
            let mut triangles = Vec::with_capacity(2 * npoints as usize - 4);

            for id in 1..npoints - 1 {
                triangles.push([0, id, id + 1]);
            }

            // NOTE: the bottom fan starts from another vertex so that no edge ends up
            // shared by more than two triangles.
            for id in 0..npoints - 2 {
                let a = npoints - 1;
                triangles.push([a, id + 1, id]);
            }

            Ok(InitialMesh::ResultMesh(coords, triangles))
        }
        3 => {
            // The hull is a polyhedron.
            // Find an initial triangle lying on the principal plane…
            let center = utils::center(normalized_points);
            let scale = eigval.amax();

            for point in normalized_points.iter_mut() {
                *point = Point::from((*point - center) / scale);
            }

            let p1 = utils::point_cloud_support_point_id(&eigpairs[0].0, normalized_points);
            let p2 = utils::point_cloud_support_point_id(&-eigpairs[0].0, normalized_points);

            let mut max_area = 0.0;
            let mut p3 = None;

            for (i, point) in normalized_points.iter().enumerate() {
                let area = (normalized_points[p2] - normalized_points[p1])
                    .cross(&(point - normalized_points[p1]))
                    .norm();

                if area > max_area {
                    max_area = area;
                    p3 = Some(i);
                }
            }

            let p3 = p3.ok_or(ConvexHullError::InternalError(
                "no initial triangle found",
            ))?;

            // Build two facets with opposite normals.
            let mut f1 = TriangleFacet::new(p1, p2, p3, normalized_points);
            let mut f2 = TriangleFacet::new(p2, p1, p3, normalized_points);

            // Link the facets together.
            f1.set_facets_adjacency([1, 1, 1], [0, 2, 1]);
            f2.set_facets_adjacency([0, 0, 0], [0, 2, 1]);

            let mut facets = vec![f1, f2];

            // … and attribute visible points to each one of them.
            for point in 0..normalized_points.len() {
                if normalized_points[point] == normalized_points[p1]
                    || normalized_points[point] == normalized_points[p2]
                    || normalized_points[point] == normalized_points[p3]
                {
                    continue;
                }

                let mut furthest = None;
                let mut furthest_dist = 0.0;

                for (i, curr_facet) in facets.iter().enumerate() {
                    if curr_facet.can_see_point(point, normalized_points) {
                        let distance = curr_facet.distance_to_point(point, normalized_points);

                        if distance > furthest_dist {
                            furthest = Some(i);
                            furthest_dist = distance;
                        }
                    }
                }

                // A point on the plane of the initial triangle can't be decided yet.
                match furthest {
                    Some(i) => facets[i].add_visible_point(point, normalized_points),
                    None => undecidable.push(point),
                }
            }

            check_facet_links(0, &facets)?;
            check_facet_links(1, &facets)?;

            Ok(InitialMesh::Facets(facets))
        }
        _ => Err(ConvexHullError::Unreachable),
    }
}
