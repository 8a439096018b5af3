//! Minimum enclosing sphere of a point cloud (Welzl's algorithm).

use crate::bounding_volume::error::check_input;
use crate::bounding_volume::{BoundingSphere, BoundingVolumeError};
use crate::math::{Point, Real};
use arrayvec::ArrayVec;

/// Relative threshold under which a triangle is considered flat, or a tetrahedron coplanar.
///
/// This is compared against the squared sine of the angle spanned by the triangle edges
/// (resp. the normalized tetrahedron determinant).
const DEGENERACY_EPSILON: Real = 1.0e-12;

/// The seed used by [`WelzlSolver::default`].
pub const DEFAULT_WELZL_SEED: u64 = 0x5eed_0f_5fe7e;

/// Computes the smallest sphere enclosing a set of 3D points with Welzl's randomized
/// incremental algorithm.
///
/// The points are visited in a random order (drawn from a seedable generator so results are
/// reproducible), with the move-to-front heuristic. The classical recursion is replaced by an
/// explicit stack of at most five frames (one per boundary point, plus the root), so the call
/// stack depth does not depend on the number of input points.
///
/// The input slice is never modified: the solver permutes a private index buffer.
///
/// # Example
///
/// ```
/// use shellfit3d::bounding_volume::WelzlSolver;
/// use shellfit3d::math::Point;
///
/// let points = [Point::new(1.0, 0.0, 0.0), Point::new(5.0, 0.0, 0.0)];
/// let sphere = WelzlSolver::default().solve(&points).unwrap();
///
/// assert!((sphere.radius() - 2.0).abs() < 1.0e-9);
/// assert!((sphere.center.x - 3.0).abs() < 1.0e-9);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct WelzlSolver {
    /// Relative tolerance of the inside test: a point `p` is inside of the candidate sphere
    /// if `|p - center|² <= squared_radius * (1 + epsilon)`.
    ///
    /// Too small a value makes the solver chase floating-point noise, too large a value
    /// undersizes the sphere.
    pub epsilon: Real,
    /// The seed of the generator shuffling the points.
    pub seed: u64,
}

impl Default for WelzlSolver {
    fn default() -> Self {
        Self {
            epsilon: 1.0e-7,
            seed: DEFAULT_WELZL_SEED,
        }
    }
}

#[derive(Copy, Clone, Debug)]
struct Frame {
    // The frame checks the points `order[next..end]` against the current sphere.
    end: usize,
    next: usize,
}

impl WelzlSolver {
    /// Creates a solver with the given shuffling seed and the default tolerance.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Computes the smallest sphere enclosing `points`.
    pub fn solve(&self, points: &[Point<Real>]) -> Result<BoundingSphere, BoundingVolumeError> {
        self.solve_with_support(points).map(|res| res.0)
    }

    /// Computes the smallest sphere enclosing `points`, together with the indices (into
    /// `points`) of the one to four support points defining it.
    ///
    /// Solving again on the support points alone yields the same sphere.
    pub fn solve_with_support(
        &self,
        points: &[Point<Real>],
    ) -> Result<(BoundingSphere, ArrayVec<usize, 4>), BoundingVolumeError> {
        check_input(points, 1)?;

        let mut order: Vec<usize> = (0..points.len()).collect();
        shuffle(&mut order, self.seed);

        let mut boundary: ArrayVec<usize, 4> = ArrayVec::new();
        let mut frames: ArrayVec<Frame, 5> = ArrayVec::new();
        let mut best: Option<(BoundingSphere, ArrayVec<usize, 4>)> = None;

        frames.push(Frame {
            end: order.len(),
            next: 0,
        });

        while let Some(top) = frames.len().checked_sub(1) {
            let Frame { end, next } = frames[top];

            if next == end {
                let _ = frames.pop();

                if let Some(parent) = frames.last_mut() {
                    // The popped frame was opened for `order[parent.next]`: that point is on
                    // the boundary of the sphere of `order[..=parent.next]`. Move it to front.
                    let _ = boundary.pop();
                    order[..=parent.next].rotate_right(1);
                    parent.next += 1;
                }

                continue;
            }

            let id = order[next];
            let inside = best
                .as_ref()
                .map(|(sphere, _)| sphere.contains_point_rel(&points[id], self.epsilon))
                .unwrap_or(false);

            if inside {
                frames[top].next += 1;
                continue;
            }

            boundary.push(id);
            best = Some(sphere_from_boundary(points, &boundary, self.epsilon));

            // Four boundary points fully determine the sphere: nothing left to scan.
            let end = if boundary.len() == 4 { 0 } else { next };
            frames.push(Frame { end, next: 0 });
        }

        let (mut sphere, support) = best.ok_or(BoundingVolumeError::DegenerateInput)?;

        // Degenerate boundaries fall back to sub-spheres, which may leave a point slightly
        // outside. Grow the sphere over them so the result always encloses the input.
        let mut num_grown = 0;
        for pt in points {
            if !sphere.contains_point_rel(pt, self.epsilon) {
                sphere.enclose_point(pt);
                num_grown += 1;
            }
        }

        if num_grown > 0 {
            log::debug!(
                "Minimum sphere grown over {} point(s) after a degenerate boundary; it may not be minimal.",
                num_grown
            );
        }

        Ok((sphere, support))
    }
}

/// Computes the smallest sphere enclosing `points` with the default [`WelzlSolver`].
pub fn minimum_bounding_sphere(
    points: &[Point<Real>],
) -> Result<BoundingSphere, BoundingVolumeError> {
    WelzlSolver::default().solve(points)
}

// Fisher-Yates shuffle driven by a seeded generator.
fn shuffle(order: &mut [usize], seed: u64) {
    let mut rng = oorandom::Rand64::new(seed as u128);

    for i in (1..order.len()).rev() {
        let j = rng.rand_range(0..(i as u64 + 1)) as usize;
        order.swap(i, j);
    }
}

/// The sphere passing through the boundary points, or the best sphere of a subset of them
/// when they are degenerate (collinear triple, coplanar quadruple).
fn sphere_from_boundary(
    points: &[Point<Real>],
    boundary: &[usize],
    epsilon: Real,
) -> (BoundingSphere, ArrayVec<usize, 4>) {
    let pts: ArrayVec<Point<Real>, 4> = boundary.iter().map(|i| points[*i]).collect();

    if let Some(sphere) = circumsphere(&pts) {
        return (sphere, boundary.iter().copied().collect());
    }

    // Degenerate case: try every pair and triple. Keep the smallest candidate enclosing all
    // the boundary points; if rounding makes all of them miss a point, keep the largest.
    let n = boundary.len();
    let mut smallest_enclosing: Option<(BoundingSphere, ArrayVec<usize, 4>)> = None;
    let mut largest: Option<(BoundingSphere, ArrayVec<usize, 4>)> = None;

    let mut consider = |subset: ArrayVec<usize, 4>| {
        let sub_pts: ArrayVec<Point<Real>, 4> = subset.iter().map(|i| pts[*i]).collect();

        if let Some(sphere) = circumsphere(&sub_pts) {
            let support = subset.iter().map(|i| boundary[*i]).collect();
            let encloses = pts.iter().all(|p| sphere.contains_point_rel(p, epsilon));

            if encloses
                && smallest_enclosing
                    .as_ref()
                    .map(|(s, _)| sphere.squared_radius < s.squared_radius)
                    .unwrap_or(true)
            {
                smallest_enclosing = Some((sphere, support));
            } else if largest
                .as_ref()
                .map(|(s, _)| sphere.squared_radius > s.squared_radius)
                .unwrap_or(true)
            {
                largest = Some((sphere, support));
            }
        }
    };

    for i in 0..n {
        for j in i + 1..n {
            consider([i, j].into_iter().collect());

            for k in j + 1..n {
                if n == 4 {
                    consider([i, j, k].into_iter().collect());
                }
            }
        }
    }

    smallest_enclosing
        .or(largest)
        // Only reachable if every pair of boundary points coincides.
        .unwrap_or_else(|| {
            let mut support = ArrayVec::new();
            support.push(boundary[0]);
            (BoundingSphere::with_squared_radius(pts[0], 0.0), support)
        })
}

/// The sphere whose surface passes through all the given (one to four) points, with its
/// center on their affine hull.
///
/// Returns `None` if the points are affinely dependent (coincident pair, collinear triple,
/// coplanar quadruple).
pub(crate) fn circumsphere(pts: &[Point<Real>]) -> Option<BoundingSphere> {
    match pts {
        [a] => Some(BoundingSphere::with_squared_radius(*a, 0.0)),
        [a, b] => {
            if a == b {
                return None;
            }

            let center = na::center(a, b);
            Some(BoundingSphere::with_squared_radius(
                center,
                na::distance_squared(a, &center),
            ))
        }
        [a, b, c] => {
            let ab = b - a;
            let ac = c - a;
            let n = ab.cross(&ac);
            let n_sq = n.norm_squared();

            if n_sq <= DEGENERACY_EPSILON * ab.norm_squared() * ac.norm_squared() {
                return None;
            }

            let offset =
                (n.cross(&ab) * ac.norm_squared() + ac.cross(&n) * ab.norm_squared()) / (2.0 * n_sq);
            Some(BoundingSphere::with_squared_radius(
                a + offset,
                offset.norm_squared(),
            ))
        }
        [a, b, c, d] => {
            let u = b - a;
            let v = c - a;
            let w = d - a;
            let vw = v.cross(&w);
            let det = u.dot(&vw);

            if det.abs() <= DEGENERACY_EPSILON.sqrt() * u.norm() * v.norm() * w.norm() {
                return None;
            }

            let offset = (vw * u.norm_squared()
                + w.cross(&u) * v.norm_squared()
                + u.cross(&v) * w.norm_squared())
                / (2.0 * det);
            Some(BoundingSphere::with_squared_radius(
                a + offset,
                offset.norm_squared(),
            ))
        }
        _ => None,
    }
}
