use crate::bounding_volume::BoundingCylinder;
use crate::math::{Point, Point2, Real, Vector};
use crate::shape::{PolyFace, PolyMesh};
use crate::transformation::utils;
use smallvec::SmallVec;

/// How the two flat ends of a cylinder mesh are filled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum CapFill {
    /// Each cap is a single polygon.
    #[default]
    NGon,
    /// Each cap is a fan of triangles around an extra center vertex.
    TriangleFan,
}

/// Parameters of the cylinder mesh generator.
///
/// The cylinder is `z`-up and centered at the origin.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CylinderMeshParams {
    /// Number of vertices of each cap circle. At least 3.
    pub vertices: u32,
    /// Radius of the cylinder.
    pub radius: Real,
    /// Height of the cylinder.
    pub depth: Real,
    /// Filling of the caps.
    pub cap_fill: CapFill,
}

impl Default for CylinderMeshParams {
    fn default() -> Self {
        Self {
            vertices: 32,
            radius: 0.5,
            depth: 1.0,
            cap_fill: CapFill::NGon,
        }
    }
}

impl CylinderMeshParams {
    /// Generates the cylinder mesh.
    ///
    /// Side faces are quads with one normal per circle vertex. Cap faces use the `±z` normals
    /// and a planar projection of the cap onto the texture square.
    pub fn generate(&self) -> PolyMesh {
        let n = self.vertices.max(3);
        let half_depth = self.depth * 0.5;
        let dtheta = core::f64::consts::TAU / n as Real;
        let fan = self.cap_fill == CapFill::TriangleFan;

        let mut positions = Vec::with_capacity(2 * n as usize + 2);
        let mut normals = Vec::with_capacity(n as usize + 2);
        let mut uvs = Vec::with_capacity(3 * n as usize + 3);

        // Bottom circle, then top circle.
        utils::push_circle(self.radius, n, dtheta, -half_depth, &mut positions);
        utils::push_circle(self.radius, n, dtheta, half_depth, &mut positions);

        utils::push_circle_normals(1.0, 0.0, n, dtheta, &mut normals);
        normals.push(Vector::z());
        normals.push(-Vector::z());
        let (top_normal, bottom_normal) = (n, n + 1);

        utils::push_uv_line(0.0, n, &mut uvs);
        utils::push_uv_line(1.0, n, &mut uvs);
        let cap_uvs = uvs.len() as u32;
        for j in 0..n {
            let (sin, cos) = (j as Real * dtheta).sin_cos();
            uvs.push(Point2::new(0.5 + 0.5 * cos, 0.5 + 0.5 * sin));
        }

        let mut faces = Vec::with_capacity(if fan { 3 * n } else { n + 2 } as usize);
        utils::push_ring_quads(n, 0, n + 1, 0, 0, 0, n, &mut faces);

        if fan {
            let top_center = positions.len() as u32;
            positions.push(Point::new(0.0, 0.0, half_depth));
            positions.push(Point::new(0.0, 0.0, -half_depth));
            let bottom_center = top_center + 1;
            let center_uv = uvs.len() as u32;
            uvs.push(Point2::new(0.5, 0.5));

            for j in 0..n {
                let jn = (j + 1) % n;
                faces.push(PolyFace::triangle(
                    [top_center, n + j, n + jn],
                    [center_uv, cap_uvs + j, cap_uvs + jn],
                    [top_normal; 3],
                ));
            }

            let first_bottom = faces.len();
            for j in 0..n {
                let jn = (j + 1) % n;
                faces.push(PolyFace::triangle(
                    [bottom_center, j, jn],
                    [center_uv, cap_uvs + j, cap_uvs + jn],
                    [bottom_normal; 3],
                ));
            }
            utils::reverse_clockwising(&mut faces[first_bottom..]);
        } else {
            let top = PolyFace {
                positions: (n..2 * n).collect(),
                uvs: (cap_uvs..cap_uvs + n).collect(),
                normals: SmallVec::from_elem(top_normal, n as usize),
            };
            let bottom = PolyFace {
                positions: (0..n).collect(),
                uvs: (cap_uvs..cap_uvs + n).collect(),
                normals: SmallVec::from_elem(bottom_normal, n as usize),
            };
            faces.push(top);
            faces.push(bottom);

            let last = faces.len() - 1;
            utils::reverse_clockwising(&mut faces[last..]);
        }

        PolyMesh {
            positions,
            uvs,
            normals,
            faces,
        }
    }
}

impl BoundingCylinder {
    /// Meshes this cylinder with `nsubdiv` vertices per cap circle.
    pub fn to_polymesh(&self, nsubdiv: u32, cap_fill: CapFill) -> PolyMesh {
        let mut mesh = CylinderMeshParams {
            vertices: nsubdiv,
            radius: self.radius,
            depth: self.depth,
            cap_fill,
        }
        .generate();
        mesh.transform_by(&self.pose());
        mesh
    }
}
