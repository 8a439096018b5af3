use crate::bounding_volume::BoundingSphere;
use crate::math::{Isometry, Real};
use crate::shape::PolyMesh;
use crate::transformation::utils::{revolve, RevolutionRing};

impl BoundingSphere {
    /// Discretize the boundary of this sphere as a polygonal mesh.
    ///
    /// `nlongitudes` is the number of vertices per circle of latitude (at least 3) and
    /// `nlatitudes` the number of bands of faces from pole to pole (at least 2). The poles are
    /// on the `z` axis.
    pub fn to_polymesh(&self, nlongitudes: u32, nlatitudes: u32) -> PolyMesh {
        let mut mesh = unit_sphere(nlongitudes.max(3), nlatitudes.max(2), self.radius());
        let c = self.center;
        mesh.transform_by(&Isometry::translation(c.x, c.y, c.z));
        mesh
    }
}

fn unit_sphere(nlongitudes: u32, nlatitudes: u32, radius: Real) -> PolyMesh {
    let dphi = core::f64::consts::PI / nlatitudes as Real;
    let mut rings = Vec::with_capacity(nlatitudes as usize - 1);
    let mut normal_rings = Vec::with_capacity(nlatitudes as usize - 1);

    for i in 1..nlatitudes {
        let (sin, cos) = (i as Real * dphi).sin_cos();
        normal_rings.push((sin, cos));
        rings.push(RevolutionRing {
            radius: radius * sin,
            z: radius * cos,
            normal_ring: i - 1,
            t: 1.0 - i as Real / nlatitudes as Real,
        });
    }

    revolve(nlongitudes, radius, -radius, &rings, &normal_rings)
}
