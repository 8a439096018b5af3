use crate::shape::PolyMesh;
use obj::{Group, IndexTuple, ObjData, ObjError, Object, SimplePolygon};
use std::path::Path;

impl PolyMesh {
    /// Converts this mesh to the in-memory representation of a Wavefront file.
    ///
    /// Texture coordinates and normals are kept, and every face becomes a polygon of the
    /// single group of the single object `name`.
    pub fn to_obj_data(&self, name: &str) -> ObjData {
        ObjData {
            position: self
                .positions
                .iter()
                .map(|v| [v.x as f32, v.y as f32, v.z as f32])
                .collect(),
            texture: self
                .uvs
                .iter()
                .map(|uv| [uv.x as f32, uv.y as f32])
                .collect(),
            normal: self
                .normals
                .iter()
                .map(|n| [n.x as f32, n.y as f32, n.z as f32])
                .collect(),
            objects: vec![Object {
                groups: vec![Group {
                    polys: self
                        .faces
                        .iter()
                        .map(|face| {
                            SimplePolygon(
                                face.positions
                                    .iter()
                                    .zip(face.uvs.iter())
                                    .zip(face.normals.iter())
                                    .map(|((p, uv), n)| {
                                        IndexTuple(
                                            *p as usize,
                                            Some(*uv as usize),
                                            Some(*n as usize),
                                        )
                                    })
                                    .collect(),
                            )
                        })
                        .collect(),
                    name: name.to_string(),
                    index: 0,
                    material: None,
                }],
                name: name.to_string(),
            }],
            ..Default::default()
        }
    }

    /// Outputs a Wavefront (`.obj`) file at the given path.
    ///
    /// This function is enabled by the `wavefront` feature flag.
    pub fn to_obj_file(&self, path: impl AsRef<Path>) -> Result<(), ObjError> {
        let mut file = std::fs::File::create(path)?;
        self.to_obj_data("").write_to_buf(&mut file)
    }
}
