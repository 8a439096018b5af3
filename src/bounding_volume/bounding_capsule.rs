use crate::bounding_volume::error::check_input;
use crate::bounding_volume::{BoundingVolume, BoundingVolumeError, Miniball, OrientedBox};
use crate::math::{Isometry, Matrix, Point, Real, Rotation, Translation, Vector};
use crate::num::Bounded;
use na::{Point2, UnitQuaternion};

/// The axis along which a capsule or cylinder is fitted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum FitAxis {
    /// The world `x` axis.
    X,
    /// The world `y` axis.
    Y,
    /// The world `z` axis.
    Z,
    /// The principal axis of largest extent of the point cloud.
    #[default]
    Auto,
}

impl FitAxis {
    /// A rotation whose local `z` axis is the fitting axis.
    fn frame(self, points: &[Point<Real>]) -> Result<Rotation<Real>, BoundingVolumeError> {
        let (basis, k) = match self {
            FitAxis::X => (Matrix::identity(), 0),
            FitAxis::Y => (Matrix::identity(), 1),
            FitAxis::Z => return Ok(Rotation::identity()),
            FitAxis::Auto => {
                let obb = OrientedBox::from_principal_axes(points)?;
                let k = obb.extents().imax();
                (*obb.basis_matrix(), k)
            }
        };

        // Cyclic permutation of the columns: keeps the determinant positive.
        Ok(Rotation::from_matrix_unchecked(Matrix::from_columns(&[
            basis.column((k + 1) % 3).into_owned(),
            basis.column((k + 2) % 3).into_owned(),
            basis.column(k).into_owned(),
        ])))
    }
}

/// Expresses `points` in the frame `rotation`, and computes the smallest disk enclosing
/// their projection on the local `xy` plane.
fn fit_cross_section(
    points: &[Point<Real>],
    rotation: &Rotation<Real>,
) -> Result<(Vec<Point<Real>>, Point2<Real>, Real), BoundingVolumeError> {
    let local: Vec<_> = points
        .iter()
        .map(|p| rotation.inverse_transform_point(p))
        .collect();
    let section: Vec<_> = local.iter().map(|p| Point2::new(p.x, p.y)).collect();
    let disk = Miniball::<2>::default().solve(&section)?;

    if !disk.converged {
        log::warn!("The cross-section of the fitted primitive may not be minimal.");
    }

    Ok((local, disk.center, disk.radius()))
}

/// A capsule: the set of points at a distance at most `radius` from a segment.
///
/// The segment has the length `depth`, is centered at `center`, and is directed along the
/// local `z` axis of `rotation`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BoundingCapsule {
    /// The center of the capsule.
    pub center: Point<Real>,
    /// The orientation of the capsule.
    pub rotation: Rotation<Real>,
    /// The radius of the capsule.
    pub radius: Real,
    /// The length of the capsule segment, i.e., of its cylindrical part.
    pub depth: Real,
}

impl BoundingCapsule {
    /// Creates a new capsule.
    pub fn new(center: Point<Real>, rotation: Rotation<Real>, radius: Real, depth: Real) -> Self {
        Self {
            center,
            rotation,
            radius,
            depth,
        }
    }

    /// Fits a capsule enclosing `points` along the given axis.
    ///
    /// The radius is the one of the smallest disk enclosing the points projected on the plane
    /// orthogonal to the axis. The hemispheres are then pushed toward each other as much as
    /// every point allows, which gives the shortest enclosing capsule with this radius and
    /// axis.
    pub fn fit(points: &[Point<Real>], axis: FitAxis) -> Result<Self, BoundingVolumeError> {
        check_input(points, 1)?;
        let rotation = axis.frame(points)?;
        let (local, center2, radius) = fit_cross_section(points, &rotation)?;
        let sq_radius = radius * radius;

        let mut top = -<Real as Bounded>::max_value();
        let mut bottom = <Real as Bounded>::max_value();

        for p in &local {
            let sq_dist = na::distance_squared(&Point2::new(p.x, p.y), &center2);
            let h = (sq_radius - sq_dist).max(0.0).sqrt();
            top = top.max(p.z - h);
            bottom = bottom.min(p.z + h);
        }

        let local_center = Point::new(center2.x, center2.y, (top + bottom) * 0.5);

        Ok(Self::new(
            rotation * local_center,
            rotation,
            radius,
            (top - bottom).max(0.0),
        ))
    }

    /// The rigid transformation from the capsule local frame to world-space.
    pub fn pose(&self) -> Isometry<Real> {
        Isometry::from_parts(
            Translation::from(self.center.coords),
            UnitQuaternion::from_rotation_matrix(&self.rotation),
        )
    }

    /// The unit direction of the capsule axis.
    pub fn axis(&self) -> Vector<Real> {
        self.rotation * Vector::z()
    }

    /// The two endpoints of the capsule segment.
    pub fn segment(&self) -> [Point<Real>; 2] {
        let half = self.axis() * (self.depth * 0.5);
        [self.center - half, self.center + half]
    }
}

impl BoundingVolume for BoundingCapsule {
    fn center(&self) -> Point<Real> {
        self.center
    }

    fn contains_local_point(&self, pt: &Point<Real>, tolerance: Real) -> bool {
        let half_depth = self.depth * 0.5;
        let dpt = pt - self.center;
        let t = dpt.dot(&self.axis()).clamp(-half_depth, half_depth);
        let dist = (dpt - self.axis() * t).norm();
        dist <= self.radius + tolerance
    }

    fn volume(&self) -> Real {
        let pi = core::f64::consts::PI;
        let r2 = self.radius * self.radius;
        pi * r2 * self.depth + 4.0 / 3.0 * pi * r2 * self.radius
    }

    fn loosened(&self, amount: Real) -> Self {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        Self::new(self.center, self.rotation, self.radius + amount, self.depth)
    }

    fn transform_by(&self, m: &Isometry<Real>) -> Self {
        Self::new(
            m * self.center,
            m.rotation.to_rotation_matrix() * self.rotation,
            self.radius,
            self.depth,
        )
    }
}

/// A finite cylinder of height `depth`, centered at `center`, whose axis is the local `z` axis
/// of `rotation`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BoundingCylinder {
    /// The center of the cylinder.
    pub center: Point<Real>,
    /// The orientation of the cylinder.
    pub rotation: Rotation<Real>,
    /// The radius of the cylinder.
    pub radius: Real,
    /// The height of the cylinder.
    pub depth: Real,
}

impl BoundingCylinder {
    /// Creates a new cylinder.
    pub fn new(center: Point<Real>, rotation: Rotation<Real>, radius: Real, depth: Real) -> Self {
        Self {
            center,
            rotation,
            radius,
            depth,
        }
    }

    /// Fits a cylinder enclosing `points` along the given axis.
    ///
    /// The radius is the one of the smallest disk enclosing the points projected on the plane
    /// orthogonal to the axis, and the height is the extent of the points along the axis.
    pub fn fit(points: &[Point<Real>], axis: FitAxis) -> Result<Self, BoundingVolumeError> {
        check_input(points, 1)?;
        let rotation = axis.frame(points)?;
        let (local, center2, radius) = fit_cross_section(points, &rotation)?;

        let max = <Real as Bounded>::max_value();
        let (zmin, zmax) = local
            .iter()
            .fold((max, -max), |(lo, hi), p| (lo.min(p.z), hi.max(p.z)));
        let local_center = Point::new(center2.x, center2.y, (zmin + zmax) * 0.5);

        Ok(Self::new(
            rotation * local_center,
            rotation,
            radius,
            zmax - zmin,
        ))
    }

    /// The rigid transformation from the cylinder local frame to world-space.
    pub fn pose(&self) -> Isometry<Real> {
        Isometry::from_parts(
            Translation::from(self.center.coords),
            UnitQuaternion::from_rotation_matrix(&self.rotation),
        )
    }
}

impl BoundingVolume for BoundingCylinder {
    fn center(&self) -> Point<Real> {
        self.center
    }

    fn contains_local_point(&self, pt: &Point<Real>, tolerance: Real) -> bool {
        let local = self.rotation.inverse_transform_vector(&(pt - self.center));
        local.z.abs() <= self.depth * 0.5 + tolerance
            && local.xy().norm() <= self.radius + tolerance
    }

    fn volume(&self) -> Real {
        core::f64::consts::PI * self.radius * self.radius * self.depth
    }

    fn loosened(&self, amount: Real) -> Self {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        Self::new(
            self.center,
            self.rotation,
            self.radius + amount,
            self.depth + 2.0 * amount,
        )
    }

    fn transform_by(&self, m: &Isometry<Real>) -> Self {
        Self::new(
            m * self.center,
            m.rotation.to_rotation_matrix() * self.rotation,
            self.radius,
            self.depth,
        )
    }
}
