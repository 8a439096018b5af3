use shellfit3d::bounding_volume::{BoundingCapsule, OrientedBox};
use shellfit3d::math::{Point, Real, Rotation, Vector};
use shellfit3d::shape::PolyMesh;
use shellfit3d::transformation::{CapFill, CapsuleMeshParams, CylinderMeshParams, UvProfile};

fn assert_well_formed(mesh: &PolyMesh) {
    assert_eq!(mesh.validate(), Ok(()));
    assert!(mesh.is_closed_manifold());

    for uv in &mesh.uvs {
        assert!(uv.x >= 0.0 && uv.x <= 1.0 && uv.y >= 0.0 && uv.y <= 1.0);
    }

    for n in &mesh.normals {
        assert_relative_eq!(n.norm(), 1.0, epsilon = 1.0e-9);
    }
}

#[test]
fn capsule_closure_over_parameter_grid() {
    for longitudes in [3, 4, 7, 32] {
        for latitudes in [2, 3, 4, 9, 16] {
            for rings in [0, 1, 5] {
                for uv_profile in [UvProfile::Fixed, UvProfile::Aspect, UvProfile::Uniform] {
                    let params = CapsuleMeshParams {
                        longitudes,
                        latitudes,
                        rings,
                        depth: 1.5,
                        radius: 0.25,
                        uv_profile,
                    };
                    let mesh = params.generate();
                    assert_well_formed(&mesh);

                    let lats = latitudes + latitudes % 2;
                    let expected = longitudes * (lats + rings) + 2;
                    assert_eq!(mesh.positions.len(), expected as usize);
                    assert_eq!(mesh.positions.len(), params.num_positions());
                    assert_eq!(mesh.normals.len(), params.num_normals());
                    assert_eq!(mesh.uvs.len(), params.num_uvs());
                    assert_eq!(mesh.faces.len(), params.num_faces());

                    let (vtx, idx) = mesh.to_trimesh();
                    assert_eq!(vtx.len(), mesh.positions.len());
                    assert_eq!(idx.len(), mesh.num_triangles());
                }
            }
        }
    }
}

#[test]
fn capsule_seams_follow_the_profile() {
    let params = CapsuleMeshParams {
        longitudes: 8,
        latitudes: 8,
        rings: 2,
        depth: 3.0,
        radius: 1.0,
        uv_profile: UvProfile::Aspect,
    };
    let mesh = params.generate();

    // North equator is the 4th ring; its uv line starts after the pole uvs.
    let north_equator_t = mesh.uvs[8 + 3 * 9].y;
    assert_relative_eq!(north_equator_t, 1.0 - 1.0 / 5.0, epsilon = 1.0e-12);

    let south_equator_t = mesh.uvs[8 + 6 * 9].y;
    assert_relative_eq!(south_equator_t, 1.0 / 5.0, epsilon = 1.0e-12);
}

#[test]
fn fitted_capsule_mesh_is_placed_in_world_space() {
    let rot = Rotation::from_axis_angle(&Vector::x_axis(), 1.0);
    let capsule = BoundingCapsule::new(Point::new(1.0, 2.0, 3.0), rot, 0.5, 2.0);
    let mesh = capsule.to_polymesh(&CapsuleMeshParams::default());
    assert_well_formed(&mesh);

    let [a, b] = capsule.segment();
    for p in &mesh.positions {
        let ab = b - a;
        let t = ((p - a).dot(&ab) / ab.norm_squared()).clamp(0.0, 1.0);
        let dist = (p - (a + ab * t)).norm();
        assert_relative_eq!(dist, 0.5, epsilon = 1.0e-9);
    }
}

#[test]
fn cylinder_and_box_meshes() {
    for vertices in [3, 8, 33] {
        for cap_fill in [CapFill::NGon, CapFill::TriangleFan] {
            let mesh = CylinderMeshParams {
                vertices,
                radius: 2.0,
                depth: 0.5,
                cap_fill,
            }
            .generate();
            assert_well_formed(&mesh);
        }
    }

    let obb = OrientedBox::new(
        Rotation::from_euler_angles(0.1, 0.2, 0.3),
        Point::new(-1.0, -2.0, -3.0),
        Point::new(4.0, 5.0, 6.0),
    );
    let mesh = obb.to_polymesh();
    assert_well_formed(&mesh);
    assert_eq!(mesh.faces.len(), 6);

    let volume: Real = mesh
        .to_trimesh()
        .1
        .iter()
        .map(|t| {
            let [a, b, c] = t.map(|i| mesh.positions[i as usize].coords);
            a.dot(&b.cross(&c)) / 6.0
        })
        .sum();
    assert_relative_eq!(volume, 5.0 * 7.0 * 9.0, epsilon = 1.0e-9);
}
