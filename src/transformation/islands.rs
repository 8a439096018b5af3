//! Connected components ("islands") of a triangle mesh.

use crate::math::{Point, Real};
use crate::shape::PolyMeshError;
use crate::utils::hashmap::{Entry, HashMap};
use ena::unify::{InPlaceUnificationTable, UnifyKey};
use ordered_float::OrderedFloat;

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
struct IntKey(u32);

impl UnifyKey for IntKey {
    type Value = ();
    fn index(&self) -> u32 {
        self.0
    }
    fn from_index(u: u32) -> IntKey {
        IntKey(u)
    }
    fn tag() -> &'static str {
        "IntKey"
    }
}

/// The connected components of a triangle mesh.
///
/// Two triangles belong to the same island if they are linked by a chain of triangles
/// sharing at least one vertex index. Vertices with equal positions but different indices
/// are not considered shared: use [`merge_duplicate_vertices`] first if this matters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct MeshIslands {
    /// The `face_colors[i]` gives the island index of the i-th face.
    pub face_colors: Vec<u32>,
    /// The set of faces grouped by island.
    pub grouped_faces: Vec<u32>,
    /// The range of islands. `self.grouped_faces[self.ranges[i]..self.ranges[i + 1]]`
    /// contains the indices of all the faces part of the i-th island.
    pub ranges: Vec<usize>,
}

impl MeshIslands {
    /// Computes the islands of the triangle mesh with `num_vertices` vertices and the
    /// index buffer `indices`.
    ///
    /// Islands are numbered in order of their first face.
    pub fn new(num_vertices: usize, indices: &[[u32; 3]]) -> Result<Self, PolyMeshError> {
        if let Some(fid) = indices
            .iter()
            .position(|idx| idx.iter().any(|i| *i as usize >= num_vertices))
        {
            return Err(PolyMeshError::IndexOutOfBounds(fid));
        }

        let mut ufind: InPlaceUnificationTable<IntKey> = InPlaceUnificationTable::new();
        let mut face_colors = vec![u32::MAX; indices.len()];
        let mut ranges = vec![0];
        let mut vertex_to_range = vec![u32::MAX; num_vertices];
        let mut grouped_faces = vec![u32::MAX; indices.len()];
        let mut vertex_to_key = vec![IntKey(u32::MAX); num_vertices];

        let mut vertex_key = |id: u32, ufind: &mut InPlaceUnificationTable<IntKey>| {
            if vertex_to_key[id as usize].0 == u32::MAX {
                let new_key = ufind.new_key(());
                vertex_to_key[id as usize] = new_key;
                new_key
            } else {
                vertex_to_key[id as usize]
            }
        };

        for idx in indices {
            let keys = idx.map(|i| vertex_key(i, &mut ufind));
            ufind.union(keys[0], keys[1]);
            ufind.union(keys[1], keys[2]);
        }

        for (idx, face_color) in indices.iter().zip(face_colors.iter_mut()) {
            let group_index = ufind.find(vertex_to_key[idx[0] as usize]).0 as usize;

            if vertex_to_range[group_index] == u32::MAX {
                // New island.
                ranges.push(0);
                vertex_to_range[group_index] = ranges.len() as u32 - 1;
            }

            let range_id = vertex_to_range[group_index];
            ranges[range_id as usize] += 1;
            // NOTE: the range_id points to the range upper bound. The face color is the range lower bound.
            *face_color = range_id - 1;
        }

        // Cumulated sum on range indices, to find the first index faces need to be inserted into
        // for each range.
        for i in 1..ranges.len() {
            ranges[i] += ranges[i - 1];
        }

        // Group faces.
        let mut insertion_in_range_index = ranges.clone();
        for (face_id, face_color) in face_colors.iter().enumerate() {
            let insertion_index = &mut insertion_in_range_index[*face_color as usize];
            grouped_faces[*insertion_index] = face_id as u32;
            *insertion_index += 1;
        }

        Ok(MeshIslands {
            face_colors,
            grouped_faces,
            ranges,
        })
    }

    /// The total number of islands.
    pub fn num_islands(&self) -> usize {
        self.ranges.len() - 1
    }

    /// The indices of the faces of the `i`-th island.
    pub fn island_faces(&self, i: usize) -> &[u32] {
        &self.grouped_faces[self.ranges[i]..self.ranges[i + 1]]
    }

    /// Splits the mesh into one vertex and index buffer per island.
    ///
    /// `vertices` and `indices` must be the buffers used to compute `self`. Vertices not
    /// referenced by any face are dropped.
    pub fn to_mesh_buffers(
        &self,
        vertices: &[Point<Real>],
        indices: &[[u32; 3]],
    ) -> Vec<(Vec<Point<Real>>, Vec<[u32; 3]>)> {
        let mut result = vec![];
        let mut new_vtx_index: Vec<_> = vec![u32::MAX; vertices.len()];

        for ranges in self.ranges.windows(2) {
            let num_faces = ranges[1] - ranges[0];

            if num_faces == 0 {
                continue;
            }

            let mut island_vertices = Vec::with_capacity(num_faces);
            let mut island_indices = Vec::with_capacity(num_faces);

            for fid in ranges[0]..ranges[1] {
                let vids = indices[self.grouped_faces[fid] as usize];
                let new_vids = vids.map(|id| {
                    if new_vtx_index[id as usize] == u32::MAX {
                        island_vertices.push(vertices[id as usize]);
                        new_vtx_index[id as usize] = island_vertices.len() as u32 - 1;
                    }

                    new_vtx_index[id as usize]
                });
                island_indices.push(new_vids);
            }

            result.push((island_vertices, island_indices));
        }

        result
    }
}

/// Merges the vertices with exactly equal coordinates, and rewrites the index buffer
/// accordingly.
///
/// Triangles that become degenerate (with two identical indices) are removed.
pub fn merge_duplicate_vertices(
    vertices: &[Point<Real>],
    indices: &[[u32; 3]],
) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
    let mut vtx_to_id = HashMap::default();
    let mut new_vertices = Vec::with_capacity(vertices.len());
    let mut new_indices = Vec::with_capacity(indices.len());

    let mut resolve_coord_id = |coord: &Point<Real>| -> u32 {
        let key = [
            OrderedFloat(coord.x),
            OrderedFloat(coord.y),
            OrderedFloat(coord.z),
        ];

        match vtx_to_id.entry(key) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                new_vertices.push(*coord);
                *entry.insert(new_vertices.len() as u32 - 1)
            }
        }
    };

    for t in indices {
        let [va, vb, vc] = t.map(|i| resolve_coord_id(&vertices[i as usize]));

        if va != vb && va != vc && vb != vc {
            new_indices.push([va, vb, vc]);
        }
    }

    new_vertices.shrink_to_fit();
    (new_vertices, new_indices)
}
