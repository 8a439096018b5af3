use crate::transformation::ConvexHullError;

/// Errors that can occur while fitting a bounding volume to a set of points.
///
/// Every solver of this crate reports bad input through this type rather than by
/// returning a volume with NaN or infinite components.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum BoundingVolumeError {
    /// Not enough points were given to the solver.
    ///
    /// Spheres need at least one point, oriented boxes at least three and k-DOPs at
    /// least four.
    #[error("At least {required} points are needed, but only {given} were given.")]
    InsufficientInput {
        /// The minimum number of points the solver needs.
        required: usize,
        /// The number of points actually given.
        given: usize,
    },
    /// The point at the given index has a NaN or infinite coordinate.
    #[error("The input point {0} has a non-finite coordinate.")]
    NonFiniteInput(usize),
    /// The input is too degenerate for the requested volume, e.g., every face of the convex
    /// hull given to the oriented box solver is flat.
    #[error("The input geometry is degenerate.")]
    DegenerateInput,
    /// Computing the convex hull of the input failed.
    #[error(transparent)]
    ConvexHull(#[from] ConvexHullError),
}

/// Checks that `points` contains at least `required` points, all finite.
pub(crate) fn check_input(
    points: &[crate::math::Point<crate::math::Real>],
    required: usize,
) -> Result<(), BoundingVolumeError> {
    check_input_with(points.len(), required, |i| {
        points[i].coords.iter().all(|c| c.is_finite())
    })
}

/// Checks that there are at least `required` points, and that `is_finite(i)` holds for
/// every point index `i`.
pub(crate) fn check_input_with(
    len: usize,
    required: usize,
    is_finite: impl Fn(usize) -> bool,
) -> Result<(), BoundingVolumeError> {
    if len < required {
        return Err(BoundingVolumeError::InsufficientInput {
            required,
            given: len,
        });
    }

    if let Some(i) = (0..len).find(|i| !is_finite(*i)) {
        return Err(BoundingVolumeError::NonFiniteInput(i));
    }

    Ok(())
}
