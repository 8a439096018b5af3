use crate::math::{Isometry, Point, Point2, Real, Vector};
use crate::utils::hashmap::{Entry, HashMap};
use crate::utils::SortedPair;
use smallvec::SmallVec;

/// The per-corner index lists of one polygonal face.
///
/// The three lists are parallel: corner `i` of the face uses position `positions[i]`,
/// texture coordinate `uvs[i]` and normal `normals[i]`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PolyFace {
    /// Indices into [`PolyMesh::positions`].
    pub positions: SmallVec<[u32; 4]>,
    /// Indices into [`PolyMesh::uvs`].
    pub uvs: SmallVec<[u32; 4]>,
    /// Indices into [`PolyMesh::normals`].
    pub normals: SmallVec<[u32; 4]>,
}

impl PolyFace {
    /// A triangle.
    pub fn triangle(positions: [u32; 3], uvs: [u32; 3], normals: [u32; 3]) -> Self {
        Self {
            positions: SmallVec::from_slice(&positions),
            uvs: SmallVec::from_slice(&uvs),
            normals: SmallVec::from_slice(&normals),
        }
    }

    /// A quadrilateral.
    pub fn quad(positions: [u32; 4], uvs: [u32; 4], normals: [u32; 4]) -> Self {
        Self {
            positions: SmallVec::from_buf(positions),
            uvs: SmallVec::from_buf(uvs),
            normals: SmallVec::from_buf(normals),
        }
    }

    /// The number of corners of this face.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Is this face empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Indicates an inconsistency in a polygonal mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PolyMeshError {
    /// A face has less than three corners.
    #[error("Face {0} has less than three corners.")]
    DegenerateFace(usize),
    /// The three index lists of a face do not have the same length.
    #[error("Face {0} has index lists of different lengths.")]
    MismatchedCorners(usize),
    /// A face references a position, texture coordinate, or normal that does not exist.
    #[error("Face {0} has an out-of-bounds index.")]
    IndexOutOfBounds(usize),
}

/// A polygonal mesh with per-corner texture coordinates and normals.
///
/// This is the output of the parametric mesh generators (capsule, cylinder, box, sphere).
/// Positions, texture coordinates and normals live in separate, independently indexed
/// buffers, the same way Wavefront OBJ files lay them out.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PolyMesh {
    /// The vertex positions.
    pub positions: Vec<Point<Real>>,
    /// The texture coordinates.
    pub uvs: Vec<Point2<Real>>,
    /// The unit normals.
    pub normals: Vec<Vector<Real>>,
    /// The faces, as per-corner index lists.
    pub faces: Vec<PolyFace>,
}

impl PolyMesh {
    /// Checks that every face has at least three corners, parallel index lists of equal
    /// lengths, and only in-bound indices.
    pub fn validate(&self) -> Result<(), PolyMeshError> {
        for (i, face) in self.faces.iter().enumerate() {
            if face.len() < 3 {
                return Err(PolyMeshError::DegenerateFace(i));
            }

            if face.uvs.len() != face.len() || face.normals.len() != face.len() {
                return Err(PolyMeshError::MismatchedCorners(i));
            }

            let in_bounds = face
                .positions
                .iter()
                .all(|id| (*id as usize) < self.positions.len())
                && face.uvs.iter().all(|id| (*id as usize) < self.uvs.len())
                && face
                    .normals
                    .iter()
                    .all(|id| (*id as usize) < self.normals.len());

            if !in_bounds {
                return Err(PolyMeshError::IndexOutOfBounds(i));
            }
        }

        Ok(())
    }

    /// The number of triangles [`Self::to_trimesh`] outputs.
    pub fn num_triangles(&self) -> usize {
        self.faces
            .iter()
            .map(|f| f.len().saturating_sub(2))
            .sum()
    }

    /// Applies in-place a rigid transformation to the positions and normals of this mesh.
    pub fn transform_by(&mut self, m: &Isometry<Real>) {
        for p in &mut self.positions {
            *p = m * *p;
        }

        for n in &mut self.normals {
            *n = m * *n;
        }
    }

    /// Triangulates every face as a fan around its first corner.
    ///
    /// Texture coordinates and normals are dropped; positions are shared.
    pub fn to_trimesh(&self) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
        let mut indices = Vec::with_capacity(self.num_triangles());

        for face in &self.faces {
            let ids = &face.positions;
            for k in 1..ids.len().saturating_sub(1) {
                indices.push([ids[0], ids[k], ids[k + 1]]);
            }
        }

        (self.positions.clone(), indices)
    }

    /// Returns `true` if every position-edge of this mesh is shared by exactly two faces,
    /// traversed in opposite directions.
    ///
    /// This is the closed, consistently-oriented 2-manifold property expected from the
    /// collider meshes.
    pub fn is_closed_manifold(&self) -> bool {
        // Count of (forward, backward) traversals of each undirected edge.
        let mut edges: HashMap<SortedPair<u32>, (u32, u32)> = HashMap::default();

        for face in &self.faces {
            let n = face.len();
            for k in 0..n {
                let a = face.positions[k];
                let b = face.positions[(k + 1) % n];

                if a == b {
                    return false;
                }

                let counts = match edges.entry(SortedPair::new(a, b)) {
                    Entry::Occupied(e) => e.into_mut(),
                    Entry::Vacant(e) => e.insert((0, 0)),
                };

                if a < b {
                    counts.0 += 1;
                } else {
                    counts.1 += 1;
                }
            }
        }

        !edges.is_empty() && edges.values().all(|c| *c == (1, 1))
    }
}

#[cfg(test)]
mod test {
    use super::{PolyFace, PolyMesh, PolyMeshError};
    use crate::math::{Point, Point2, Vector};

    fn tetrahedron() -> PolyMesh {
        PolyMesh {
            positions: vec![
                Point::new(0.0, 0.0, 0.0),
                Point::new(1.0, 0.0, 0.0),
                Point::new(0.0, 1.0, 0.0),
                Point::new(0.0, 0.0, 1.0),
            ],
            uvs: vec![Point2::origin()],
            normals: vec![Vector::z()],
            faces: vec![
                PolyFace::triangle([0, 2, 1], [0; 3], [0; 3]),
                PolyFace::triangle([0, 1, 3], [0; 3], [0; 3]),
                PolyFace::triangle([1, 2, 3], [0; 3], [0; 3]),
                PolyFace::triangle([0, 3, 2], [0; 3], [0; 3]),
            ],
        }
    }

    #[test]
    fn tetrahedron_is_closed() {
        let mesh = tetrahedron();
        assert_eq!(mesh.validate(), Ok(()));
        assert!(mesh.is_closed_manifold());
        assert_eq!(mesh.to_trimesh().1.len(), 4);
    }

    #[test]
    fn open_or_invalid_meshes_are_detected() {
        let mut mesh = tetrahedron();
        let _ = mesh.faces.pop();
        assert!(!mesh.is_closed_manifold());

        mesh.faces[0].uvs[1] = 5;
        assert_eq!(mesh.validate(), Err(PolyMeshError::IndexOutOfBounds(0)));

        let _ = mesh.faces[1].normals.pop();
        assert_eq!(
            mesh.validate(),
            Err(PolyMeshError::IndexOutOfBounds(0))
        );
        mesh.faces[0].uvs[1] = 0;
        assert_eq!(mesh.validate(), Err(PolyMeshError::MismatchedCorners(1)));
    }
}
