//! Smallest enclosing ball in arbitrary dimension (Gärtner's pivoting variant of Welzl).

use crate::bounding_volume::error::check_input_with;
use crate::bounding_volume::BoundingVolumeError;
use crate::math::Real;
use na::SVector;

/// Configuration of the [`Miniball`] solver.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct MiniballConfig {
    /// A point is not added to the support set if the residual of its projection on the
    /// support's affine hull (`z = 2 * |residual|²`) is smaller than
    /// `stability_tolerance * current_squared_radius`.
    pub stability_tolerance: Real,
    /// Maximum number of pivoting steps.
    pub max_iterations: usize,
}

/// Squared residual, relative to the squared distance to the first support point, below
/// which a point is considered to lie on the affine hull of the support set.
const AFFINE_DEPENDENCE_TOLERANCE: Real = 1.0e-24;

impl Default for MiniballConfig {
    fn default() -> Self {
        Self {
            stability_tolerance: 1.0e-32,
            max_iterations: 2000,
        }
    }
}

/// The ball computed by [`Miniball::solve`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MiniballResult<const D: usize> {
    /// The center of the ball.
    pub center: na::Point<Real, D>,
    /// The squared radius of the ball.
    pub squared_radius: Real,
    /// Number of support points defining the ball.
    pub support_size: usize,
    /// Number of pivoting steps performed.
    pub iterations: usize,
    /// `false` if the pivoting loop was stopped by [`MiniballConfig::max_iterations`]. The
    /// ball is then the best one found, which may not be minimal.
    pub converged: bool,
}

impl<const D: usize> MiniballResult<D> {
    /// The radius of the ball.
    #[inline]
    pub fn radius(&self) -> Real {
        self.squared_radius.sqrt()
    }
}

/// Support set of the current ball.
///
/// The points pushed so far are stored implicitly: the first one as `q0`, the others as
/// their Gram-Schmidt residuals `v[i]` relative to `q0`. `c[i]` and `sqr_r[i]` is the
/// smallest ball with the first `i + 1` pushed points on its boundary.
struct Basis<const D: usize> {
    m: usize,
    s: usize,
    q0: SVector<Real, D>,
    z: Vec<Real>,
    v: Vec<SVector<Real, D>>,
    a: Vec<Vec<Real>>,
    c: Vec<SVector<Real, D>>,
    sqr_r: Vec<Real>,
    current_c: SVector<Real, D>,
    current_sqr_r: Real,
    stability_tolerance: Real,
}

impl<const D: usize> Basis<D> {
    fn new(stability_tolerance: Real) -> Self {
        Self {
            m: 0,
            s: 0,
            q0: SVector::zeros(),
            z: vec![0.0; D + 1],
            v: vec![SVector::zeros(); D + 1],
            a: vec![vec![0.0; D + 1]; D + 1],
            c: vec![SVector::zeros(); D + 1],
            sqr_r: vec![0.0; D + 1],
            current_c: SVector::zeros(),
            current_sqr_r: -1.0,
            stability_tolerance,
        }
    }

    #[inline]
    fn size(&self) -> usize {
        self.m
    }

    #[inline]
    fn excess(&self, p: &SVector<Real, D>) -> Real {
        (p - self.current_c).norm_squared() - self.current_sqr_r
    }

    /// Adds `p` to the support set, unless it is numerically dependent on the points
    /// already in it. Returns `false` (and leaves `self` unchanged) in that case.
    fn push(&mut self, p: &SVector<Real, D>) -> bool {
        let m = self.m;

        if m == 0 {
            self.q0 = *p;
            self.c[0] = *p;
            self.sqr_r[0] = 0.0;
        } else {
            let mut vm = p - self.q0;
            let sq_offset = vm.norm_squared();

            for i in 1..m {
                self.a[m][i] = self.v[i].dot(&vm) * (2.0 / self.z[i]);
            }

            for i in 1..m {
                vm -= self.v[i] * self.a[m][i];
            }

            let sq_residual = vm.norm_squared();
            let zm = sq_residual * 2.0;

            if zm < self.stability_tolerance * self.current_sqr_r
                || sq_residual <= AFFINE_DEPENDENCE_TOLERANCE * sq_offset
            {
                return false;
            }

            let e = (p - self.c[m - 1]).norm_squared() - self.sqr_r[m - 1];
            let fm = e / zm;

            self.v[m] = vm;
            self.z[m] = zm;
            self.c[m] = self.c[m - 1] + vm * fm;
            self.sqr_r[m] = self.sqr_r[m - 1] + e * fm * 0.5;
        }

        self.current_c = self.c[m];
        self.current_sqr_r = self.sqr_r[m];
        self.m += 1;
        self.s = self.m;
        true
    }

    /// Removes the last point pushed. The current ball is left untouched.
    fn pop(&mut self) {
        debug_assert!(self.m > 0, "Cannot pop an empty support set.");
        self.m -= 1;
    }
}

#[derive(Copy, Clone, Debug)]
struct MtfFrame {
    end: usize,
    next: usize,
}

/// Computes the smallest ball enclosing a set of `D`-dimensional points.
///
/// This is Gärtner's algorithm: the move-to-front variant of Welzl's algorithm is run on
/// a growing prefix of the points, and the point with the largest excess is pivoted into
/// the support set until every point is enclosed. The support set is maintained
/// incrementally with Gram-Schmidt orthogonalization, and a point whose projection residual
/// is too small is rejected to keep the ball computation stable.
///
/// The move-to-front recursion is unrolled on an explicit stack whose depth is bounded by
/// `D + 2`.
pub struct Miniball<const D: usize> {
    config: MiniballConfig,
}

impl<const D: usize> Default for Miniball<D> {
    fn default() -> Self {
        Self::new(MiniballConfig::default())
    }
}

struct MiniballState<'a, const D: usize> {
    points: &'a [na::Point<Real, D>],
    order: Vec<usize>,
    support_end: usize,
    basis: Basis<D>,
}

impl<'a, const D: usize> MiniballState<'a, D> {
    #[inline]
    fn point(&self, i: usize) -> &SVector<Real, D> {
        &self.points[self.order[i]].coords
    }

    fn move_to_front(&mut self, j: usize) {
        if self.support_end <= j {
            self.support_end += 1;
        }

        self.order[..=j].rotate_right(1);
    }

    /// Move-to-front ball of `order[..end]`, with the current basis points constrained to
    /// lie on its boundary.
    fn mtf_mb(&mut self, end: usize) {
        let mut frames = Vec::with_capacity(D + 2);
        self.support_end = 0;
        let end = if self.basis.size() == D + 1 { 0 } else { end };
        frames.push(MtfFrame { end, next: 0 });

        while let Some(top) = frames.len().checked_sub(1) {
            let MtfFrame { end, next } = frames[top];

            if next == end {
                let _ = frames.pop();

                if let Some(parent) = frames.last_mut() {
                    let j = parent.next;
                    parent.next += 1;
                    self.basis.pop();
                    self.move_to_front(j);
                }

                continue;
            }

            let p = *self.point(next);

            if self.basis.excess(&p) > 0.0 && self.basis.push(&p) {
                self.support_end = 0;
                let end = if self.basis.size() == D + 1 { 0 } else { next };
                frames.push(MtfFrame { end, next: 0 });
            } else {
                frames[top].next += 1;
            }
        }
    }

    /// Index (into `order`) and value of the largest excess among `order[start..]`.
    fn max_excess(&self, start: usize) -> (Real, usize) {
        let mut max_e = 0.0;
        let mut pivot = start;

        for k in start..self.order.len() {
            let e = self.basis.excess(self.point(k));

            if e > max_e {
                max_e = e;
                pivot = k;
            }
        }

        (max_e, pivot)
    }
}

impl<const D: usize> Miniball<D> {
    /// Creates a solver with the given configuration.
    pub fn new(config: MiniballConfig) -> Self {
        Self { config }
    }

    /// The configuration of this solver.
    pub fn config(&self) -> &MiniballConfig {
        &self.config
    }

    /// Computes the smallest ball enclosing `points`.
    ///
    /// The slice is left untouched: the move-to-front heuristic permutes a private index
    /// buffer.
    pub fn solve(
        &self,
        points: &[na::Point<Real, D>],
    ) -> Result<MiniballResult<D>, BoundingVolumeError> {
        check_input_with(points.len(), 1, |i| {
            points[i].coords.iter().all(|c| c.is_finite())
        })?;

        let mut state = MiniballState {
            points,
            order: (0..points.len()).collect(),
            support_end: 0,
            basis: Basis::new(self.config.stability_tolerance),
        };

        let mut t = 1;
        state.mtf_mb(t);

        let mut iterations = 0;
        let mut converged = true;

        loop {
            let (max_e, pivot) = state.max_excess(t);

            if max_e <= Real::EPSILON * state.basis.current_sqr_r {
                break;
            }

            if iterations == self.config.max_iterations {
                log::warn!(
                    "Miniball pivoting stopped after {} iterations; the ball may not be minimal.",
                    iterations
                );
                converged = false;
                break;
            }

            iterations += 1;

            t = state.support_end;
            if t == pivot {
                t += 1;
            }

            let old_sqr_r = state.basis.current_sqr_r;
            let p = *state.point(pivot);

            if state.basis.push(&p) {
                state.mtf_mb(state.support_end);
                state.basis.pop();
            }

            state.move_to_front(pivot);

            if t < pivot {
                t += 1;
            }

            if state.basis.current_sqr_r <= old_sqr_r {
                break;
            }
        }

        Ok(MiniballResult {
            center: na::Point::from(state.basis.current_c),
            squared_radius: state.basis.current_sqr_r.max(0.0),
            support_size: state.basis.s,
            iterations,
            converged,
        })
    }
}
