//! Bounding sphere.

use crate::bounding_volume::BoundingVolume;
use crate::math::{Isometry, Point, Real};

/// A bounding sphere, stored as its center and its squared radius.
///
/// The sphere solvers compute and compare squared radii, see [`Self::radius`] for the
/// radius.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct BoundingSphere {
    /// The sphere center.
    pub center: Point<Real>,
    /// The squared radius of the sphere. Always non-negative.
    pub squared_radius: Real,
}

impl BoundingSphere {
    /// Creates a new bounding sphere from its center and radius.
    pub fn new(center: Point<Real>, radius: Real) -> BoundingSphere {
        assert!(radius >= 0.0, "The radius of a sphere must be positive.");
        BoundingSphere {
            center,
            squared_radius: radius * radius,
        }
    }

    /// Creates a new bounding sphere from its center and squared radius.
    pub fn with_squared_radius(center: Point<Real>, squared_radius: Real) -> BoundingSphere {
        assert!(
            squared_radius >= 0.0,
            "The squared radius of a sphere must be positive."
        );
        BoundingSphere {
            center,
            squared_radius,
        }
    }

    /// The bounding sphere center.
    #[inline]
    pub fn center(&self) -> &Point<Real> {
        &self.center
    }

    /// The bounding sphere radius.
    #[inline]
    pub fn radius(&self) -> Real {
        self.squared_radius.sqrt()
    }

    /// Checks if `pt` lies inside of this sphere, with a tolerance relative to the squared
    /// radius: `|pt - center|² <= squared_radius * (1 + epsilon)`.
    #[inline]
    pub fn contains_point_rel(&self, pt: &Point<Real>, epsilon: Real) -> bool {
        na::distance_squared(pt, &self.center) <= self.squared_radius * (1.0 + epsilon)
    }

    /// Enlarges this sphere as little as possible so that it contains `pt`.
    ///
    /// The new sphere still contains the old one.
    pub fn enclose_point(&mut self, pt: &Point<Real>) {
        let dir = pt - self.center;
        let dist = dir.norm();
        let radius = self.radius();

        if dist > radius {
            let new_radius = (radius + dist) * 0.5;
            self.center += dir * ((new_radius - radius) / dist);
            self.squared_radius = new_radius * new_radius;
        }
    }

    /// Merges this bounding sphere with another one so that the result contains both.
    pub fn merged(&self, other: &BoundingSphere) -> BoundingSphere {
        let mut dir = other.center - self.center;
        let norm = dir.normalize_mut();
        let (r1, r2) = (self.radius(), other.radius());

        if norm == 0.0 || norm + r2 <= r1 {
            if r2 > r1 {
                BoundingSphere::new(self.center, r2)
            } else {
                *self
            }
        } else if norm + r1 <= r2 {
            *other
        } else {
            let left = self.center - dir * r1;
            let right = other.center + dir * r2;
            let center = na::center(&left, &right);
            BoundingSphere::new(center, na::distance(&right, &center))
        }
    }
}

impl BoundingVolume for BoundingSphere {
    #[inline]
    fn center(&self) -> Point<Real> {
        self.center
    }

    #[inline]
    fn contains_local_point(&self, pt: &Point<Real>, tolerance: Real) -> bool {
        na::distance(pt, &self.center) <= self.radius() + tolerance
    }

    #[inline]
    fn volume(&self) -> Real {
        let r = self.radius();
        4.0 / 3.0 * core::f64::consts::PI * r * r * r
    }

    #[inline]
    fn loosened(&self, amount: Real) -> BoundingSphere {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        BoundingSphere::new(self.center, self.radius() + amount)
    }

    #[inline]
    fn transform_by(&self, m: &Isometry<Real>) -> BoundingSphere {
        BoundingSphere::with_squared_radius(m * self.center, self.squared_radius)
    }
}
