pub use self::capsule_to_polymesh::{CapsuleMeshParams, UvProfile};
pub use self::cylinder_to_polymesh::{CapFill, CylinderMeshParams};

mod capsule_to_polymesh;
mod cuboid_to_polymesh;
mod cylinder_to_polymesh;
mod sphere_to_polymesh;
