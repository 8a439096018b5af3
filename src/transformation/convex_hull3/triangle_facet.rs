use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};

#[derive(Debug)]
pub struct TriangleFacet {
    pub valid: bool,
    pub affinely_dependent: bool,
    pub normal: Vector<Real>,
    pub adj: [usize; 3],
    pub indirect_adj_id: [usize; 3],
    pub pts: [usize; 3],
    pub visible_points: Vec<usize>,
}

impl TriangleFacet {
    pub fn new(p1: usize, p2: usize, p3: usize, points: &[Point<Real>]) -> TriangleFacet {
        let p1p2 = points[p2] - points[p1];
        let p1p3 = points[p3] - points[p1];
        let cross = p1p2.cross(&p1p3);
        let eps = DEFAULT_EPSILON * 100.0;
        let affinely_dependent = relative_eq!(cross.norm_squared(), 0.0, epsilon = eps * eps);
        let normal = if affinely_dependent {
            Vector::zeros()
        } else {
            cross.normalize()
        };

        TriangleFacet {
            valid: true,
            affinely_dependent,
            normal,
            adj: [0, 0, 0],
            indirect_adj_id: [0, 0, 0],
            pts: [p1, p2, p3],
            visible_points: Vec::new(),
        }
    }

    pub fn add_visible_point(&mut self, pid: usize, points: &[Point<Real>]) {
        debug_assert!(self.distance_to_point(pid, points) > DEFAULT_EPSILON);
        self.visible_points.push(pid);
    }

    pub fn distance_to_point(&self, point: usize, points: &[Point<Real>]) -> Real {
        self.normal.dot(&(points[point] - points[self.pts[0]]))
    }

    pub fn set_facets_adjacency(&mut self, adj: [usize; 3], indirect_adj_id: [usize; 3]) {
        self.adj = adj;
        self.indirect_adj_id = indirect_adj_id;
    }

    pub fn first_point_from_edge(&self, id: usize) -> usize {
        self.pts[id]
    }

    pub fn second_point_from_edge(&self, id: usize) -> usize {
        self.pts[(id + 1) % 3]
    }

    pub fn can_see_point(&self, point: usize, points: &[Point<Real>]) -> bool {
        // A flat triangle has no reliable normal.
        if self.affinely_dependent {
            return false;
        }

        let p0 = points[self.pts[0]];
        let pt = points[point];

        (pt - p0).dot(&self.normal) >= DEFAULT_EPSILON * 100.0
    }

    // Visibility test that gives the same answer whatever vertex of the triangle is
    // used as the plane origin.
    pub fn order_independent_can_be_seen_by_point(
        &self,
        point: usize,
        points: &[Point<Real>],
    ) -> bool {
        if self.affinely_dependent {
            return true;
        }

        let pt = points[point];

        self.pts
            .iter()
            .any(|i| (pt - points[*i]).dot(&self.normal) >= 0.0)
    }
}
