pub use self::convex_hull::try_convex_hull;
pub use self::error::ConvexHullError;
use self::initial_mesh::{get_initial_mesh, InitialMesh};
use self::triangle_facet::TriangleFacet;
use self::validation::check_facet_links;
pub use self::validation::check_convex_hull;

mod convex_hull;
mod error;
mod initial_mesh;
mod triangle_facet;
mod validation;
