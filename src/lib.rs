/*!
shellfit3d
==========

**shellfit3d** computes bounding primitives and collision proxies for 3D point
sets and meshes: minimum enclosing spheres, minimum-volume oriented boxes,
k-DOPs, capsules, cylinders and convex hulls, together with the meshes used to
render them.

All solvers are pure functions over caller-owned point slices. None of them
mutates its input, so they can be called concurrently from several threads.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![warn(unused_qualifications)]

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod shape;
pub mod transformation;
pub mod utils;

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use na::{Isometry3, Matrix3, Point2, Point3, Rotation3, Translation3, Vector2, Vector3};

    /// The scalar type used throughout this crate.
    ///
    /// Double precision keeps the sphere solvers stable on large or
    /// nearly-degenerate inputs.
    pub type Real = f64;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// The rotation matrix type.
    pub type Rotation<N> = Rotation3<N>;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;

    /// The translation type.
    pub use Translation3 as Translation;
}
