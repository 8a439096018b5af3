//! Convex hulls, mesh generation, and mesh analysis.

pub(crate) use self::convex_hull2::convex_hull2_idx;
pub use self::convex_hull::{ConvexHull, ConvexHullBuilder, IncrementalHull};
pub use self::convex_hull2::convex_hull2;
pub use self::convex_hull3::{check_convex_hull, try_convex_hull, ConvexHullError};
pub use self::islands::{merge_duplicate_vertices, MeshIslands};
pub use self::to_polymesh::{CapFill, CapsuleMeshParams, CylinderMeshParams, UvProfile};

mod convex_hull;
mod convex_hull2;
mod convex_hull3;
pub(crate) mod convex_hull_utils;
mod islands;

mod to_polymesh;
pub mod utils;

#[cfg(feature = "wavefront")]
pub mod wavefront;
