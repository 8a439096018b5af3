use shellfit3d::bounding_volume::{BoundingSphere, OrientedBox};
use shellfit3d::math::{Point, Rotation};
use shellfit3d::transformation::{merge_duplicate_vertices, MeshIslands};

#[test]
fn islands_of_generated_meshes() {
    let mut vertices = Vec::new();
    let mut indices: Vec<[u32; 3]> = Vec::new();

    let meshes = [
        BoundingSphere::new(Point::new(0.0, 0.0, 0.0), 1.0).to_polymesh(8, 4),
        BoundingSphere::new(Point::new(5.0, 0.0, 0.0), 1.0).to_polymesh(8, 4),
        OrientedBox::new(
            Rotation::identity(),
            Point::new(10.0, 0.0, 0.0),
            Point::new(11.0, 1.0, 1.0),
        )
        .to_polymesh(),
    ];

    for mesh in &meshes {
        let (vtx, idx) = mesh.to_trimesh();
        let base = vertices.len() as u32;
        vertices.extend(vtx);
        indices.extend(idx.iter().map(|t| t.map(|i| i + base)));
    }

    let islands = MeshIslands::new(vertices.len(), &indices).unwrap();
    assert_eq!(islands.num_islands(), 3);

    let buffers = islands.to_mesh_buffers(&vertices, &indices);
    assert_eq!(buffers.len(), 3);
    assert_eq!(buffers[2].0.len(), 8);
    assert_eq!(buffers[2].1.len(), 12);
}

#[test]
fn duplicated_corners_are_welded() {
    // Two unit squares sharing an edge, stored with separate corners.
    let vertices = [
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(1.0, 1.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(2.0, 0.0, 0.0),
        Point::new(2.0, 1.0, 0.0),
        Point::new(1.0, 1.0, 0.0),
    ];
    let indices = [[0, 1, 2], [0, 2, 3], [4, 5, 6], [4, 6, 7]];

    assert_eq!(
        MeshIslands::new(vertices.len(), &indices).unwrap().num_islands(),
        2
    );

    let (welded, idx) = merge_duplicate_vertices(&vertices, &indices);
    assert_eq!(welded.len(), 6);
    assert_eq!(idx.len(), 4);

    let islands = MeshIslands::new(welded.len(), &idx).unwrap();
    assert_eq!(islands.num_islands(), 1);
    assert_eq!(islands.island_faces(0), &[0, 1, 2, 3]);
}
