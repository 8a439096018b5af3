use super::{ConvexHullError, TriangleFacet};
use crate::math::{Point, Real};

/// Checks that the adjacency links of the facet `ifacet` are symmetric.
pub fn check_facet_links(ifacet: usize, facets: &[TriangleFacet]) -> Result<(), ConvexHullError> {
    let facet = &facets[ifacet];

    for i in 0..3 {
        let adj_facet = &facets[facet.adj[i]];
        let adj_id = facet.indirect_adj_id[i];

        if !adj_facet.valid
            || adj_facet.adj[adj_id] != ifacet
            || adj_facet.indirect_adj_id[adj_id] != i
            || adj_facet.first_point_from_edge(adj_id) != facet.second_point_from_edge(i)
            || adj_facet.second_point_from_edge(adj_id) != facet.first_point_from_edge(i)
        {
            return Err(ConvexHullError::InternalError(
                "inconsistent adjacency between hull facets",
            ));
        }
    }

    Ok(())
}

/// Checks if a convex-hull is properly formed.
///
/// The hull must not have duplicate vertices, every edge must be shared by exactly two
/// triangles, and the Euler characteristic `V - E + F` must be 2.
pub fn check_convex_hull(
    points: &[Point<Real>],
    triangles: &[[u32; 3]],
) -> Result<(), ConvexHullError> {
    use crate::utils::hashmap::{Entry, HashMap};
    use crate::utils::SortedPair;
    let mut edges = HashMap::default();

    struct EdgeData {
        adjacent_triangles: [usize; 2],
    }

    for i in 0..points.len() {
        for j in i + 1..points.len() {
            if points[i] == points[j] {
                return Err(ConvexHullError::DuplicatePoints(i, j));
            }
        }
    }

    for (itri, tri) in triangles.iter().enumerate() {
        if tri[0] == tri[1] || tri[0] == tri[2] || tri[1] == tri[2] {
            return Err(ConvexHullError::InternalError("degenerate hull triangle"));
        }

        for i in 0..3 {
            let ivtx1 = tri[i];
            let ivtx2 = tri[(i + 1) % 3];
            let edge_key = SortedPair::new(ivtx1, ivtx2);

            match edges.entry(edge_key) {
                Entry::Vacant(e) => {
                    let _ = e.insert(EdgeData {
                        adjacent_triangles: [itri, usize::MAX],
                    });
                }
                Entry::Occupied(mut e) => {
                    if e.get().adjacent_triangles[1] != usize::MAX {
                        return Err(ConvexHullError::TJunction(itri, ivtx1, ivtx2));
                    }

                    e.get_mut().adjacent_triangles[1] = itri;
                }
            }
        }
    }

    if edges
        .values()
        .any(|edge| edge.adjacent_triangles[1] == usize::MAX)
    {
        return Err(ConvexHullError::UnfinishedTriangle);
    }

    // Euler characteristic.
    if points.len() + triangles.len() != edges.len() + 2 {
        return Err(ConvexHullError::InternalError(
            "the hull does not have the topology of a sphere",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::check_convex_hull;
    use crate::math::Point;
    use crate::transformation::ConvexHullError;

    fn tetrahedron() -> (Vec<Point<f64>>, Vec<[u32; 3]>) {
        let pts = vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
            Point::new(0.0, 0.0, 1.0),
        ];
        let idx = vec![[0, 2, 1], [0, 1, 3], [1, 2, 3], [0, 3, 2]];
        (pts, idx)
    }

    #[test]
    fn tetrahedron_is_valid() {
        let (pts, idx) = tetrahedron();
        assert_eq!(check_convex_hull(&pts, &idx), Ok(()));
    }

    #[test]
    fn invalid_hulls_are_reported() {
        let (mut pts, idx) = tetrahedron();
        assert_eq!(
            check_convex_hull(&pts, &idx[..3]),
            Err(ConvexHullError::UnfinishedTriangle)
        );

        let mut doubled = idx.clone();
        doubled.push([0, 2, 1]);
        assert_eq!(
            check_convex_hull(&pts, &doubled),
            Err(ConvexHullError::TJunction(4, 0, 2))
        );

        pts[3] = pts[0];
        assert_eq!(
            check_convex_hull(&pts, &idx),
            Err(ConvexHullError::DuplicatePoints(0, 3))
        );
    }
}
