/// Errors that can occur during convex hull computation.
///
/// The hull is built incrementally, one point at a time. Degenerate inputs (single point,
/// segment, planar polygon) are handled explicitly; the remaining failures come from
/// invalid data (NaN) or from floating-point rounding breaking the mesh topology.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConvexHullError {
    /// An internal error occurred during convex hull computation.
    #[error("Internal error: {0}")]
    InternalError(&'static str),
    /// The algorithm could not find a valid support point.
    ///
    /// This happens when the points are too close to each other for the floating-point
    /// precision.
    #[error("Input points are almost coplanar.")]
    MissingSupportPoint,
    /// The input point at the given index has a NaN or infinite coordinate.
    #[error("The input point {0} has a non-finite coordinate.")]
    NonFiniteInput(usize),
    /// A triangle of the hull refers to a vertex that does not exist.
    ///
    /// The error reports the triangle index, followed by the out-of-range vertex index.
    #[error("Triangle {0} refers to the vertex {1}, which is out of bounds.")]
    IndexOutOfBounds(usize, u32),
    /// No point was given to the convex hull algorithm.
    #[error("No point was given to the convex-hull algorithm.")]
    IncompleteInput,
    /// Internal error: reached an unreachable code path.
    #[error("Internal error: unreachable code path")]
    Unreachable,
    /// An edge of the hull is only referenced by a single triangle.
    #[error("Detected unfinished triangle")]
    UnfinishedTriangle,
    /// An edge of the hull is shared by more than two triangles.
    ///
    /// The error reports the triangle index, followed by the two vertex indices of the
    /// edge.
    #[error("Detected t-junction for triangle {0}, edge: ({1}, {2})")]
    TJunction(usize, u32, u32),
    /// Two vertices of the hull have the same coordinates.
    #[error("Detected duplicate points {0} and {1}")]
    DuplicatePoints(usize, usize),
}
