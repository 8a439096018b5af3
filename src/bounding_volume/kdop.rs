//! Discrete-orientation polytopes.

use crate::bounding_volume::error::check_input;
use crate::bounding_volume::BoundingVolumeError;
use crate::math::{Point, Real, Vector};
use crate::transformation::{ConvexHull, ConvexHullBuilder};
use crate::utils;

/// The predefined direction sets of a k-DOP.
///
/// Each set contains `k / 2` directions; their negations give the other half of the
/// supporting planes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum KDopDirections {
    /// The coordinate axes. This is an axis-aligned bounding box.
    Dop6,
    /// The coordinate axes and the two diagonals of the `xy` plane.
    Dop10,
    /// The coordinate axes and the four diagonals of the unit cube.
    Dop14,
    /// The coordinate axes and the six diagonals of the coordinate planes.
    #[default]
    Dop18,
    /// The union of [`KDopDirections::Dop14`] and [`KDopDirections::Dop18`].
    Dop26,
}

const AXES: [[Real; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
const XY_EDGES: [[Real; 3]; 2] = [[1.0, 1.0, 0.0], [1.0, -1.0, 0.0]];
const EDGES: [[Real; 3]; 6] = [
    [1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, 1.0, -1.0],
];
const CORNERS: [[Real; 3]; 4] = [
    [1.0, 1.0, 1.0],
    [1.0, 1.0, -1.0],
    [1.0, -1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

impl KDopDirections {
    /// The number of supporting planes of this k-DOP.
    pub fn k(self) -> usize {
        match self {
            KDopDirections::Dop6 => 6,
            KDopDirections::Dop10 => 10,
            KDopDirections::Dop14 => 14,
            KDopDirections::Dop18 => 18,
            KDopDirections::Dop26 => 26,
        }
    }

    /// The `k / 2` unit directions of this set.
    pub fn directions(self) -> Vec<Vector<Real>> {
        let sets: &[&[[Real; 3]]] = match self {
            KDopDirections::Dop6 => &[&AXES],
            KDopDirections::Dop10 => &[&AXES, &XY_EDGES],
            KDopDirections::Dop14 => &[&AXES, &CORNERS],
            KDopDirections::Dop18 => &[&AXES, &EDGES],
            KDopDirections::Dop26 => &[&AXES, &CORNERS, &EDGES],
        };

        sets.iter()
            .flat_map(|set| set.iter())
            .map(|d| Vector::from(*d).normalize())
            .collect()
    }
}

/// A k-DOP: a convex polytope bounded by planes of fixed orientations.
///
/// The polytope is approximated by the convex hull of the extreme input points along each
/// direction and its negation. Its faces are not necessarily flush with the supporting
/// planes: the hull may be smaller than the exact intersection of half-spaces.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct KDop {
    /// The outward unit normals of the supporting planes: each direction, followed by its
    /// negation.
    pub normals: Vec<Vector<Real>>,
    /// The supporting plane offsets: every input point `x` satisfies
    /// `dot(x, normals[i]) <= offsets[i]`.
    pub offsets: Vec<Real>,
    /// The indices of the extreme input points, sorted and deduplicated.
    pub support_indices: Vec<usize>,
    /// The convex hull of the extreme points.
    pub hull: ConvexHull,
}

impl KDop {
    /// Computes the k-DOP of `points` with one of the predefined direction sets.
    pub fn new(
        points: &[Point<Real>],
        directions: KDopDirections,
        builder: &impl ConvexHullBuilder,
    ) -> Result<Self, BoundingVolumeError> {
        Self::with_directions(points, &directions.directions(), builder)
    }

    /// Computes the k-DOP of `points` with an arbitrary set of directions.
    ///
    /// The directions need not be normalized, but must not be zero. At least four points
    /// are needed.
    pub fn with_directions(
        points: &[Point<Real>],
        directions: &[Vector<Real>],
        builder: &impl ConvexHullBuilder,
    ) -> Result<Self, BoundingVolumeError> {
        check_input(points, 4)?;

        let normals: Vec<_> = directions
            .iter()
            .filter_map(|d| d.try_normalize(0.0))
            .flat_map(|d| [d, -d])
            .collect();
        if normals.is_empty() {
            return Err(BoundingVolumeError::DegenerateInput);
        }

        let mut offsets = Vec::with_capacity(normals.len());
        let mut support_indices = Vec::with_capacity(normals.len());

        for n in &normals {
            let id = utils::point_cloud_support_point_id(n, points);
            offsets.push(points[id].coords.dot(n));
            support_indices.push(id);
        }

        support_indices.sort_unstable();
        support_indices.dedup();

        let extreme_points: Vec<_> = support_indices.iter().map(|i| points[*i]).collect();
        let hull = builder.build(&extreme_points)?;
        hull.check_indices()?;

        log::debug!(
            "k-DOP with {} planes: {} extreme points, {} hull vertices.",
            normals.len(),
            support_indices.len(),
            hull.vertices.len()
        );

        Ok(Self {
            normals,
            offsets,
            support_indices,
            hull,
        })
    }

    /// The number of supporting planes.
    pub fn k(&self) -> usize {
        self.normals.len()
    }

    /// Checks if `pt` lies on the inner side of every supporting plane, with the absolute
    /// tolerance `tolerance`.
    pub fn contains_point(&self, pt: &Point<Real>, tolerance: Real) -> bool {
        self.normals
            .iter()
            .zip(self.offsets.iter())
            .all(|(n, offset)| pt.coords.dot(n) <= *offset + tolerance)
    }
}
