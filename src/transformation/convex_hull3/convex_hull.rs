use super::{get_initial_mesh, ConvexHullError, InitialMesh, TriangleFacet};
use crate::math::{Point, Real};
use crate::transformation::convex_hull_utils::{
    indexed_support_point_id, indexed_support_point_nth, normalize,
};
use crate::utils;

/// Computes the convex hull of a set of 3d points.
///
/// The result is a vertex buffer (a subset of the input points) and a triangle index
/// buffer, with counter-clockwise (outward) winding. Inputs of lower dimension are handled
/// explicitly:
/// - a single location gives one vertex and two fully degenerate triangles,
/// - collinear points give the two extreme points and two degenerate triangles,
/// - coplanar points give a double-sided polygon.
///
/// # Example
///
/// ```
/// use shellfit3d::math::Point;
/// use shellfit3d::transformation::try_convex_hull;
///
/// let points = [
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(1.0, 0.0, 0.0),
///     Point::new(0.0, 1.0, 0.0),
///     Point::new(0.0, 0.0, 1.0),
///     Point::new(0.1, 0.1, 0.1), // Interior point, not part of the hull.
/// ];
///
/// let (vertices, indices) = try_convex_hull(&points).unwrap();
/// assert_eq!(vertices.len(), 4);
/// assert_eq!(indices.len(), 4);
/// ```
pub fn try_convex_hull(
    points: &[Point<Real>],
) -> Result<(Vec<Point<Real>>, Vec<[u32; 3]>), ConvexHullError> {
    if points.is_empty() {
        return Err(ConvexHullError::IncompleteInput);
    }

    if let Some(i) = points
        .iter()
        .position(|p| !p.coords.iter().all(|c| c.is_finite()))
    {
        return Err(ConvexHullError::NonFiniteInput(i));
    }

    let mut normalized_points = points.to_vec();

    if normalize(&mut normalized_points).is_none() {
        // All the points are at the same location.
        return Ok((vec![points[0]], vec![[0; 3], [0; 3]]));
    }

    let mut undecidable_points = Vec::new();
    let mut silhouette_loop_facets_and_idx = Vec::new();
    let mut removed_facets = Vec::new();

    let mut triangles =
        match get_initial_mesh(points, &mut normalized_points, &mut undecidable_points)? {
            InitialMesh::Facets(facets) => facets,
            InitialMesh::ResultMesh(vertices, indices) => return Ok((vertices, indices)),
        };

    let mut i = 0;
    while i != triangles.len() {
        silhouette_loop_facets_and_idx.clear();

        if !triangles[i].valid || triangles[i].affinely_dependent {
            i += 1;
            continue;
        }

        let pt_id = indexed_support_point_id(
            &triangles[i].normal,
            &normalized_points,
            triangles[i].visible_points.iter().copied(),
        );

        if let Some(point) = pt_id {
            triangles[i].valid = false;

            removed_facets.clear();
            removed_facets.push(i);

            compute_silhouette(
                i,
                point,
                &mut silhouette_loop_facets_and_idx,
                &normalized_points,
                &mut removed_facets,
                &mut triangles,
            );

            // In some degenerate cases (because of float rounding problems), the silhouette may:
            // 1. Contain self-intersections (i.e. a single vertex is used by more than two edges).
            // 2. Contain multiple disjoint (but nested) loops.
            fix_silhouette_topology(
                &normalized_points,
                &mut silhouette_loop_facets_and_idx,
                &mut removed_facets,
                &mut triangles,
            )?;

            if silhouette_loop_facets_and_idx.is_empty() {
                // Due to inaccuracies, the silhouette could not be computed
                // (the point seems to be visible from… every triangle).
                let any_valid = triangles[i + 1..]
                    .iter()
                    .any(|t| t.valid && !t.affinely_dependent);

                if any_valid {
                    return Err(ConvexHullError::InternalError(
                        "the silhouette of a visible point is empty",
                    ));
                }

                triangles[i].valid = true;
                break;
            }

            attach_and_push_facets(
                &silhouette_loop_facets_and_idx,
                point,
                &normalized_points,
                &mut triangles,
                &removed_facets,
                &mut undecidable_points,
            )?;
        }

        i += 1;
    }

    let mut idx: Vec<[u32; 3]> = triangles
        .iter()
        .filter(|facet| facet.valid)
        .map(|facet| {
            [
                facet.pts[0] as u32,
                facet.pts[1] as u32,
                facet.pts[2] as u32,
            ]
        })
        .collect();

    let mut points = points.to_vec();
    utils::remove_unused_points(&mut points, &mut idx);

    if points.is_empty() {
        return Err(ConvexHullError::InternalError("empty output mesh"));
    }

    Ok((points, idx))
}

/// Finds the loop of edges separating the facets seen by `point` from the others,
/// starting from the (already removed) facet `removed`.
///
/// The traversal is depth-first; it uses an explicit stack so that the loop comes out in
/// counter-clockwise order around `point`.
fn compute_silhouette(
    removed: usize,
    point: usize,
    out_facets_and_idx: &mut Vec<(usize, usize)>,
    points: &[Point<Real>],
    removed_facets: &mut Vec<usize>,
    triangles: &mut [TriangleFacet],
) {
    let mut stack: Vec<(usize, usize)> = (0..3)
        .rev()
        .map(|j| {
            (
                triangles[removed].adj[j],
                triangles[removed].indirect_adj_id[j],
            )
        })
        .collect();

    while let Some((facet, indirect_id)) = stack.pop() {
        if !triangles[facet].valid {
            continue;
        }

        if !triangles[facet].order_independent_can_be_seen_by_point(point, points) {
            out_facets_and_idx.push((facet, indirect_id));
        } else {
            // The facet must be removed from the convex hull.
            triangles[facet].valid = false;
            removed_facets.push(facet);

            let id2 = (indirect_id + 2) % 3;
            let id1 = (indirect_id + 1) % 3;
            stack.push((triangles[facet].adj[id2], triangles[facet].indirect_adj_id[id2]));
            stack.push((triangles[facet].adj[id1], triangles[facet].indirect_adj_id[id1]));
        }
    }
}

fn fix_silhouette_topology(
    points: &[Point<Real>],
    out_facets_and_idx: &mut Vec<(usize, usize)>,
    removed_facets: &mut Vec<usize>,
    triangles: &mut [TriangleFacet],
) -> Result<(), ConvexHullError> {
    let mut workspace = vec![0; points.len()];
    let mut needs_fixing = false;

    // NOTE: we work with the second_point_from_edge instead of the first one, because when
    // we traverse the silhouette we see the second edge point before the first.
    for (facet, adj_id) in out_facets_and_idx.iter() {
        let p = triangles[*facet].second_point_from_edge(*adj_id);
        workspace[p] += 1;

        if workspace[p] > 1 {
            needs_fixing = true;
        }
    }

    if !needs_fixing {
        return Ok(());
    }

    // We detected a topological problem, i.e., we have multiple loops. First, find a
    // vertex that belongs to the loop we keep.
    let mut loop_start = 0;
    for (facet, adj_id) in out_facets_and_idx.iter() {
        let p1 = points[triangles[*facet].second_point_from_edge(*adj_id)];
        let p2 = points[triangles[*facet].first_point_from_edge(*adj_id)];
        let supp = indexed_support_point_nth(
            &(p2 - p1),
            points,
            out_facets_and_idx
                .iter()
                .map(|(f, ai)| triangles[*f].second_point_from_edge(*ai)),
        )
        .ok_or(ConvexHullError::MissingSupportPoint)?;
        let selected = &out_facets_and_idx[supp];

        if workspace[triangles[selected.0].second_point_from_edge(selected.1)] == 1 {
            loop_start = supp;
            break;
        }
    }

    let mut removing = None;
    let old_facets_and_idx = core::mem::take(out_facets_and_idx);

    for i in 0..old_facets_and_idx.len() {
        let facet_id = (loop_start + i) % old_facets_and_idx.len();
        let (facet, adj_id) = old_facets_and_idx[facet_id];
        let p1 = triangles[facet].second_point_from_edge(adj_id);

        match removing {
            Some(p) => {
                if p == p1 {
                    removing = None;
                }
            }
            None => {
                if workspace[p1] > 1 {
                    removing = Some(p1);
                }
            }
        }

        if removing.is_some() {
            if triangles[facet].valid {
                triangles[facet].valid = false;
                removed_facets.push(facet);
            }
        } else {
            out_facets_and_idx.push((facet, adj_id));
        }
    }

    Ok(())
}

fn attach_and_push_facets(
    silhouette_loop_facets_and_idx: &[(usize, usize)],
    point: usize,
    points: &[Point<Real>],
    triangles: &mut Vec<TriangleFacet>,
    removed_facets: &[usize],
    undecidable: &mut Vec<usize>,
) -> Result<(), ConvexHullError> {
    // The silhouette is built to be in CCW order.
    let mut new_facets: Vec<_> = silhouette_loop_facets_and_idx
        .iter()
        .map(|(adj_facet, indirect_id)| {
            TriangleFacet::new(
                point,
                triangles[*adj_facet].second_point_from_edge(*indirect_id),
                triangles[*adj_facet].first_point_from_edge(*indirect_id),
                points,
            )
        })
        .collect();

    // Link the facets together.
    let num_new = silhouette_loop_facets_and_idx.len();
    let first_new = triangles.len();

    for (i, (middle_facet, middle_id)) in silhouette_loop_facets_and_idx.iter().enumerate() {
        let prev_facet = first_new + (i + num_new - 1) % num_new;
        let next_facet = first_new + (i + 1) % num_new;

        new_facets[i].set_facets_adjacency(
            [prev_facet, *middle_facet, next_facet],
            [2, *middle_id, 0],
        );

        // Check that we are not overwriting a valid link.
        if triangles[triangles[*middle_facet].adj[*middle_id]].valid {
            return Err(ConvexHullError::InternalError(
                "a silhouette edge is adjacent to a kept facet",
            ));
        }

        triangles[*middle_facet].adj[*middle_id] = first_new + i;
        triangles[*middle_facet].indirect_adj_id[*middle_id] = 1;
    }

    // Assign to each new facet some of the points which can see it.
    for curr_facet in removed_facets.iter() {
        for visible_point in triangles[*curr_facet].visible_points.iter() {
            if points[*visible_point] == points[point] {
                continue;
            }

            let mut furthest = None;
            let mut furthest_dist = 0.0;

            for (i, new_facet) in new_facets.iter().enumerate() {
                if !new_facet.affinely_dependent {
                    let distance = new_facet.distance_to_point(*visible_point, points);

                    if distance > furthest_dist {
                        furthest = Some(i);
                        furthest_dist = distance;
                    }
                }
            }

            // A point seen by none of the new facets is inside of the hull: it is
            // implicitly deleted because no facet references it anymore.
            if let Some(furthest) = furthest {
                if new_facets[furthest].can_see_point(*visible_point, points) {
                    new_facets[furthest].add_visible_point(*visible_point, points);
                }
            }
        }
    }

    // Try to assign the previously undecidable points to one of the new facets.
    let mut i = 0;

    while i != undecidable.len() {
        let mut furthest = None;
        let mut furthest_dist = 0.0;
        let undecidable_point = undecidable[i];

        for (j, new_facet) in new_facets.iter().enumerate() {
            if new_facet.can_see_point(undecidable_point, points) {
                let distance = new_facet.distance_to_point(undecidable_point, points);

                if distance > furthest_dist {
                    furthest = Some(j);
                    furthest_dist = distance;
                }
            }
        }

        if let Some(furthest) = furthest {
            new_facets[furthest].add_visible_point(undecidable_point, points);
            let _ = undecidable.swap_remove(i);
        } else {
            i += 1;
        }
    }

    triangles.append(&mut new_facets);
    Ok(())
}
