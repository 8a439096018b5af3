use crate::math::{Point, Real};
use crate::transformation::{check_convex_hull, try_convex_hull, ConvexHullError};

/// A convex hull, as a vertex buffer and a triangle index buffer.
///
/// Triangles are wound counter-clockwise when seen from outside of the hull. Degenerate
/// hulls (point, segment, polygon) are represented as flat closed meshes, see
/// [`try_convex_hull`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ConvexHull {
    /// The hull vertices.
    pub vertices: Vec<Point<Real>>,
    /// The hull triangles.
    pub indices: Vec<[u32; 3]>,
}

impl ConvexHull {
    /// Creates a convex hull from its raw buffers, without any check.
    pub fn new(vertices: Vec<Point<Real>>, indices: Vec<[u32; 3]>) -> Self {
        Self { vertices, indices }
    }

    /// Computes the convex hull of `points` with the built-in incremental algorithm.
    pub fn from_points(points: &[Point<Real>]) -> Result<Self, ConvexHullError> {
        IncrementalHull.build(points)
    }

    /// Iterates through the triangles of this hull, skipping the ones with repeated
    /// or out-of-bounds vertices.
    pub fn triangles(&self) -> impl Iterator<Item = [Point<Real>; 3]> + '_ {
        self.indices
            .iter()
            .filter(|idx| idx[0] != idx[1] && idx[0] != idx[2] && idx[1] != idx[2])
            .filter_map(move |idx| {
                Some([
                    *self.vertices.get(idx[0] as usize)?,
                    *self.vertices.get(idx[1] as usize)?,
                    *self.vertices.get(idx[2] as usize)?,
                ])
            })
    }

    /// Checks that every triangle of this hull refers to existing vertices.
    ///
    /// Hulls built by a custom [`ConvexHullBuilder`] or by [`ConvexHull::new`] are not
    /// checked on construction.
    pub fn check_indices(&self) -> Result<(), ConvexHullError> {
        let nvertices = self.vertices.len();

        for (itri, idx) in self.indices.iter().enumerate() {
            if let Some(i) = idx.iter().find(|i| **i as usize >= nvertices) {
                return Err(ConvexHullError::IndexOutOfBounds(itri, *i));
            }
        }

        Ok(())
    }

    /// Checks that this hull is a closed manifold without duplicate vertices.
    pub fn validate(&self) -> Result<(), ConvexHullError> {
        self.check_indices()?;
        check_convex_hull(&self.vertices, &self.indices)
    }
}

impl From<(Vec<Point<Real>>, Vec<[u32; 3]>)> for ConvexHull {
    fn from((vertices, indices): (Vec<Point<Real>>, Vec<[u32; 3]>)) -> Self {
        Self::new(vertices, indices)
    }
}

/// An algorithm computing the convex hull of a point set.
///
/// The oriented box and k-DOP solvers are generic over this trait so that an application
/// can plug its own hull routine. Closures with the signature of [`try_convex_hull`] implement
/// it.
pub trait ConvexHullBuilder {
    /// Computes the convex hull of `points`.
    fn build(&self, points: &[Point<Real>]) -> Result<ConvexHull, ConvexHullError>;
}

/// The incremental convex hull algorithm of this crate, see [`try_convex_hull`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct IncrementalHull;

impl ConvexHullBuilder for IncrementalHull {
    fn build(&self, points: &[Point<Real>]) -> Result<ConvexHull, ConvexHullError> {
        try_convex_hull(points).map(ConvexHull::from)
    }
}

impl<F> ConvexHullBuilder for F
where
    F: Fn(&[Point<Real>]) -> Result<(Vec<Point<Real>>, Vec<[u32; 3]>), ConvexHullError>,
{
    fn build(&self, points: &[Point<Real>]) -> Result<ConvexHull, ConvexHullError> {
        self(points).map(ConvexHull::from)
    }
}

#[cfg(test)]
mod test {
    use super::{ConvexHull, ConvexHullBuilder, IncrementalHull};
    use crate::math::{Point, Real};
    use crate::transformation::{try_convex_hull, ConvexHullError};

    fn tetrahedron() -> Vec<Point<Real>> {
        vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
            Point::new(0.0, 0.0, 1.0),
        ]
    }

    #[test]
    fn builders_agree() {
        let pts = tetrahedron();
        let a = IncrementalHull.build(&pts).unwrap();
        let b = try_convex_hull.build(&pts).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.triangles().count(), 4);
        assert_eq!(a.validate(), Ok(()));
    }

    #[test]
    fn custom_builder_errors_propagate() {
        let failing = |_: &[Point<Real>]| -> Result<(Vec<Point<Real>>, Vec<[u32; 3]>), ConvexHullError> {
            Err(ConvexHullError::MissingSupportPoint)
        };
        assert_eq!(
            failing.build(&tetrahedron()),
            Err(ConvexHullError::MissingSupportPoint)
        );
        assert!(ConvexHull::from_points(&[]).is_err());
    }

    #[test]
    fn out_of_bounds_indices() {
        let mut hull = ConvexHull::new(tetrahedron(), vec![[0, 2, 1], [0, 1, 3], [1, 2, 9]]);
        assert_eq!(
            hull.check_indices(),
            Err(ConvexHullError::IndexOutOfBounds(2, 9))
        );
        assert_eq!(
            hull.validate(),
            Err(ConvexHullError::IndexOutOfBounds(2, 9))
        );
        assert_eq!(hull.triangles().count(), 2);

        hull.indices[2] = [1, 2, 3];
        assert_eq!(hull.check_indices(), Ok(()));
    }
}
