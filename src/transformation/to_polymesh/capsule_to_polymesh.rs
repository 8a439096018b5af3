use crate::bounding_volume::BoundingCapsule;
use crate::math::Real;
use crate::shape::PolyMesh;
use crate::transformation::utils::{revolve, RevolutionRing};

/// Where the texture seams between the hemispheres and the cylindrical body of a capsule
/// fall, along the texture `t` axis.
///
/// The north hemisphere is mapped to `t ∈ [1 - ratio, 1]`, the south one to `t ∈ [0, ratio]`
/// and the body in between.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum UvProfile {
    /// Each hemisphere and the body get one third of the texture.
    Fixed,
    /// The texture is split proportionally to the lengths of the hemispheres and the body,
    /// measured along the capsule axis: `ratio = radius / (depth + 2 * radius)`.
    #[default]
    Aspect,
    /// Every band of faces gets the same texture height:
    /// `ratio = (latitudes / 2) / (rings + 1 + latitudes)`.
    Uniform,
}

/// Parameters of the capsule mesh generator.
///
/// The capsule is `z`-up and centered at the origin: the cylindrical body spans
/// `z ∈ [-depth / 2, depth / 2]` and the hemispheres close it at both ends.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CapsuleMeshParams {
    /// Number of vertices on each circle of the mesh. At least 3.
    pub longitudes: u32,
    /// Number of bands of faces over both hemispheres. Even, at least 2.
    pub latitudes: u32,
    /// Number of intermediate circles subdividing the cylindrical body.
    pub rings: u32,
    /// Length of the cylindrical body. At least `0.0002`.
    pub depth: Real,
    /// Radius of the hemispheres and body. At least `0.0001`.
    pub radius: Real,
    /// Layout of the texture coordinates.
    pub uv_profile: UvProfile,
}

impl Default for CapsuleMeshParams {
    fn default() -> Self {
        Self {
            longitudes: 32,
            latitudes: 16,
            rings: 0,
            depth: 1.0,
            radius: 0.5,
            uv_profile: UvProfile::Aspect,
        }
    }
}

impl CapsuleMeshParams {
    /// Smallest accepted radius.
    pub const MIN_RADIUS: Real = 0.0001;
    /// Smallest accepted body length.
    pub const MIN_DEPTH: Real = 0.0002;

    /// Parameters for meshing the given capsule, with the default subdivisions.
    pub fn from_capsule(capsule: &BoundingCapsule) -> Self {
        Self {
            depth: capsule.depth,
            radius: capsule.radius,
            ..Self::default()
        }
    }

    /// These parameters, clamped to their valid ranges. An odd latitude count is rounded up.
    pub fn clamped(&self) -> Self {
        let latitudes = self.latitudes.max(2);

        Self {
            longitudes: self.longitudes.max(3),
            latitudes: latitudes + latitudes % 2,
            rings: self.rings,
            depth: self.depth.max(Self::MIN_DEPTH),
            radius: self.radius.max(Self::MIN_RADIUS),
            uv_profile: self.uv_profile,
        }
    }

    /// The texture `t` coordinate of the south seam, for the clamped parameters.
    pub fn uv_seam_ratio(&self) -> Real {
        let p = self.clamped();

        match p.uv_profile {
            UvProfile::Fixed => 1.0 / 3.0,
            UvProfile::Aspect => p.radius / (p.depth + 2.0 * p.radius),
            UvProfile::Uniform => {
                (p.latitudes / 2) as Real / (p.rings + 1 + p.latitudes) as Real
            }
        }
    }

    /// Number of vertex positions of the generated mesh.
    pub fn num_positions(&self) -> usize {
        let p = self.clamped();
        (p.longitudes * (p.latitudes + p.rings) + 2) as usize
    }

    /// Number of vertex normals of the generated mesh.
    ///
    /// The body circles share the normals of the two circles bounding it.
    pub fn num_normals(&self) -> usize {
        let p = self.clamped();
        (p.longitudes * (p.latitudes - 1) + 2) as usize
    }

    /// Number of texture coordinates of the generated mesh.
    pub fn num_uvs(&self) -> usize {
        let p = self.clamped();
        (2 * p.longitudes + (p.longitudes + 1) * (p.latitudes + p.rings)) as usize
    }

    /// Number of faces of the generated mesh: two pole fans, and quad bands in between.
    pub fn num_faces(&self) -> usize {
        let p = self.clamped();
        (p.longitudes * (p.latitudes + p.rings + 1)) as usize
    }

    /// Generates the capsule mesh.
    ///
    /// Faces are triangles around the poles and quads elsewhere, all counter-clockwise when
    /// seen from outside. Every corner has its own texture coordinate and normal index; the
    /// texture seam is at angle 0, where texture coordinates are duplicated.
    pub fn generate(&self) -> PolyMesh {
        let p = self.clamped();
        let half_lats = p.latitudes / 2;
        let half_depth = p.depth * 0.5;
        let dphi = core::f64::consts::PI / p.latitudes as Real;

        let aspect_south = self.uv_seam_ratio();
        let aspect_north = 1.0 - aspect_south;

        // Normals: north hemisphere, the equator shared by the body, south hemisphere.
        let mut normal_rings = Vec::with_capacity((p.latitudes - 1) as usize);
        for i in 1..half_lats {
            let (sin, cos) = (i as Real * dphi).sin_cos();
            normal_rings.push((sin, cos));
        }
        let equator_normals = normal_rings.len() as u32;
        normal_rings.push((1.0, 0.0));
        for i in 1..half_lats {
            let (sin, cos) = (i as Real * dphi).sin_cos();
            normal_rings.push((cos, -sin));
        }

        let mut rings = Vec::with_capacity((p.latitudes + p.rings) as usize);

        // North hemisphere, down to (and including) its equator.
        for i in 1..=half_lats {
            let (sin, cos) = (i as Real * dphi).sin_cos();
            let fac = i as Real / half_lats as Real;
            rings.push(RevolutionRing {
                radius: p.radius * sin,
                z: half_depth + p.radius * cos,
                normal_ring: i - 1,
                t: (1.0 - fac) + aspect_north * fac,
            });
        }

        // Cylindrical body.
        let body_bands = (p.rings + 1) as Real;
        for m in 1..=p.rings {
            let fac = m as Real / body_bands;
            rings.push(RevolutionRing {
                radius: p.radius,
                z: half_depth - p.depth * fac,
                normal_ring: equator_normals,
                t: aspect_north + (aspect_south - aspect_north) * fac,
            });
        }

        // South hemisphere, from its equator.
        for i in 0..half_lats {
            let (sin, cos) = (i as Real * dphi).sin_cos();
            let fac = i as Real / half_lats as Real;
            rings.push(RevolutionRing {
                radius: p.radius * cos,
                z: -half_depth - p.radius * sin,
                normal_ring: equator_normals + i,
                t: (1.0 - fac) * aspect_south,
            });
        }

        let pole = half_depth + p.radius;
        revolve(p.longitudes, pole, -pole, &rings, &normal_rings)
    }
}

impl BoundingCapsule {
    /// Meshes this capsule with the subdivisions and texture layout of `params`.
    ///
    /// The radius and depth of `params` are replaced by the ones of this capsule, and the mesh
    /// is moved to the capsule position.
    pub fn to_polymesh(&self, params: &CapsuleMeshParams) -> PolyMesh {
        let mut mesh = CapsuleMeshParams {
            depth: self.depth,
            radius: self.radius,
            ..*params
        }
        .generate();
        mesh.transform_by(&self.pose());
        mesh
    }
}
