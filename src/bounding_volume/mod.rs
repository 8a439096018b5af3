//! Bounding volumes.

#[doc(inline)]
pub use crate::bounding_volume::bounding_sphere::BoundingSphere;
#[doc(inline)]
pub use crate::bounding_volume::bounding_volume::BoundingVolume;

pub use self::bounding_capsule::{BoundingCapsule, BoundingCylinder, FitAxis};
pub use self::bounding_sphere_welzl::{minimum_bounding_sphere, WelzlSolver, DEFAULT_WELZL_SEED};
pub use self::error::BoundingVolumeError;
pub use self::kdop::{KDop, KDopDirections};
pub use self::miniball::{Miniball, MiniballConfig, MiniballResult};
pub use self::oriented_box::OrientedBox;
pub use self::oriented_box_calipers::{minimum_oriented_box, minimum_oriented_box_from_hull};

#[doc(hidden)]
pub mod bounding_volume;

#[doc(hidden)]
pub mod bounding_sphere;
mod bounding_sphere_welzl;

pub mod batch;
mod bounding_capsule;
pub(crate) mod error;
pub mod kdop;
mod miniball;
mod oriented_box;
mod oriented_box_calipers;
