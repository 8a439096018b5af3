use crate::bounding_volume::OrientedBox;
use crate::math::{Point2, Vector};
use crate::shape::{PolyFace, PolyMesh};

// Corners of each face, counter-clockwise seen from outside, following the corner numbering
// of `OrientedBox::vertices`. Listed as -x, +x, -y, +y, -z, +z.
const FACES: [[u32; 4]; 6] = [
    [0, 4, 6, 2],
    [1, 3, 7, 5],
    [0, 1, 5, 4],
    [2, 6, 7, 3],
    [0, 2, 3, 1],
    [4, 5, 7, 6],
];

impl OrientedBox {
    /// Discretize the boundary of this box as a polygonal mesh of six quads.
    ///
    /// Each face has its own normal, and the whole texture square mapped on it.
    pub fn to_polymesh(&self) -> PolyMesh {
        let positions = self.vertices().to_vec();
        let normals = [
            -Vector::x(),
            Vector::x(),
            -Vector::y(),
            Vector::y(),
            -Vector::z(),
            Vector::z(),
        ]
        .iter()
        .map(|n| self.basis * n)
        .collect();
        let uvs = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];

        let faces = FACES
            .iter()
            .zip(0u32..)
            .map(|(corners, normal)| PolyFace::quad(*corners, [0, 1, 2, 3], [normal; 4]))
            .collect();

        PolyMesh {
            positions,
            uvs,
            normals,
            faces,
        }
    }
}
