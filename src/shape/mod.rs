//! Mesh types produced by the generators of this crate.

pub use self::poly_mesh::{PolyFace, PolyMesh, PolyMeshError};

mod poly_mesh;
