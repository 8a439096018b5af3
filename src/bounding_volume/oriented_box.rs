use crate::bounding_volume::error::check_input;
use crate::bounding_volume::{BoundingVolume, BoundingVolumeError};
use crate::math::{Isometry, Matrix, Point, Real, Rotation, Translation, Vector};
use crate::utils;
use na::UnitQuaternion;

/// An oriented bounding box.
///
/// The box is the set of points whose coordinates, expressed in the rotated frame `basis`,
/// lie between `mins` and `maxs`. The world-space position of a local point `p` is
/// `basis * p`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct OrientedBox {
    /// The orientation of the box. Its columns are the box axes.
    pub basis: Rotation<Real>,
    /// The minimum corner, in the rotated frame.
    pub mins: Point<Real>,
    /// The maximum corner, in the rotated frame.
    pub maxs: Point<Real>,
}

impl OrientedBox {
    /// Creates a new oriented box.
    ///
    /// Each component of `mins` must be smaller than the related component of `maxs`.
    pub fn new(basis: Rotation<Real>, mins: Point<Real>, maxs: Point<Real>) -> Self {
        Self { basis, mins, maxs }
    }

    /// The tightest box with the axes `basis` enclosing `points`.
    pub fn from_points_in_basis(
        points: &[Point<Real>],
        basis: Rotation<Real>,
    ) -> Result<Self, BoundingVolumeError> {
        check_input(points, 1)?;
        let (mins, maxs) = utils::point_cloud_aabb(basis.matrix(), points)
            .ok_or(BoundingVolumeError::InsufficientInput {
                required: 1,
                given: 0,
            })?;
        Ok(Self::new(basis, mins, maxs))
    }

    /// The axis-aligned bounding box of `points`.
    pub fn axis_aligned(points: &[Point<Real>]) -> Result<Self, BoundingVolumeError> {
        Self::from_points_in_basis(points, Rotation::identity())
    }

    /// A box aligned with the principal axes of `points`.
    ///
    /// The axes are the eigenvectors of the covariance matrix of the points. This is fast,
    /// but not guaranteed to be the smallest enclosing box, see
    /// [`minimum_oriented_box`](crate::bounding_volume::minimum_oriented_box) for that.
    pub fn from_principal_axes(points: &[Point<Real>]) -> Result<Self, BoundingVolumeError> {
        check_input(points, 1)?;
        let cov = utils::cov(points);
        let mut eigv = cov.symmetric_eigen().eigenvectors;

        if eigv.determinant() < 0.0 {
            eigv = -eigv;
        }

        Self::from_points_in_basis(points, Rotation::from_matrix_unchecked(eigv))
    }

    /// The center of this box, in world-space.
    pub fn center(&self) -> Point<Real> {
        self.basis * na::center(&self.mins, &self.maxs)
    }

    /// The half-lengths of this box along its axes.
    pub fn half_extents(&self) -> Vector<Real> {
        (self.maxs - self.mins) * 0.5
    }

    /// The lengths of this box along its axes.
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// The total area of the faces of this box.
    pub fn surface_area(&self) -> Real {
        let e = self.extents();
        2.0 * (e.x * e.y + e.y * e.z + e.z * e.x)
    }

    /// The rigid transformation mapping a box centered at the origin with the half-extents
    /// [`Self::half_extents`] to this box.
    pub fn to_isometry(&self) -> Isometry<Real> {
        Isometry::from_parts(
            Translation::from(self.center().coords),
            UnitQuaternion::from_rotation_matrix(&self.basis),
        )
    }

    /// The world-space corners of this box.
    ///
    /// The corner `i` uses the minimum or maximum coordinate along the `k`-th axis depending
    /// on whether the `k`-th bit of `i` is 0 or 1.
    pub fn vertices(&self) -> [Point<Real>; 8] {
        let (a, b) = (&self.mins, &self.maxs);
        let local = [
            Point::new(a.x, a.y, a.z),
            Point::new(b.x, a.y, a.z),
            Point::new(a.x, b.y, a.z),
            Point::new(b.x, b.y, a.z),
            Point::new(a.x, a.y, b.z),
            Point::new(b.x, a.y, b.z),
            Point::new(a.x, b.y, b.z),
            Point::new(b.x, b.y, b.z),
        ];
        local.map(|p| self.basis * p)
    }

    /// The rotation matrix of this box.
    #[inline]
    pub fn basis_matrix(&self) -> &Matrix<Real> {
        self.basis.matrix()
    }
}

impl BoundingVolume for OrientedBox {
    fn center(&self) -> Point<Real> {
        OrientedBox::center(self)
    }

    fn contains_local_point(&self, pt: &Point<Real>, tolerance: Real) -> bool {
        let local = self.basis.inverse_transform_point(pt);
        (0..3).all(|i| {
            local[i] >= self.mins[i] - tolerance && local[i] <= self.maxs[i] + tolerance
        })
    }

    fn volume(&self) -> Real {
        self.extents().product()
    }

    fn loosened(&self, amount: Real) -> Self {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        let margin = Vector::repeat(amount);
        Self::new(self.basis, self.mins - margin, self.maxs + margin)
    }

    fn transform_by(&self, m: &Isometry<Real>) -> Self {
        let basis = m.rotation.to_rotation_matrix() * self.basis;
        let shift = basis.inverse_transform_vector(&m.translation.vector);
        Self::new(basis, self.mins + shift, self.maxs + shift)
    }
}
