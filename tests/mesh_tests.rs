// Host-side tests for the carousel meshes.
// The renderer is wasm-only, so we include the pure-Rust mesh module directly.

#![allow(dead_code)]
#[path = "../src/render/meshes.rs"]
mod meshes;

use floor_core::Geometry;
use glam::Vec3;
use meshes::*;

fn faces(mesh: &[Vertex]) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
    mesh.chunks_exact(3).map(|tri| {
        let centroid = tri
            .iter()
            .map(|v| Vec3::from(v.position))
            .fold(Vec3::ZERO, |a, b| a + b)
            / 3.0;
        (centroid, Vec3::from(tri[0].normal))
    })
}

fn assert_unit_normals(mesh: &[Vertex]) {
    for v in mesh {
        let len = Vec3::from(v.normal).length();
        assert!((len - 1.0).abs() < 1e-4, "normal length {len}");
    }
}

#[test]
fn vertex_counts() {
    assert_eq!(box_mesh().len(), 36);
    assert_eq!(icosahedron(1.0).len(), 60);
    assert_eq!(torus(0.8, 0.3, 32, 16).len(), 32 * 16 * 6);
    assert_eq!(torus(0.8, 0.3, 1, 1).len(), 3 * 3 * 6);
    assert_eq!(mesh_for(Geometry::Torus).len(), 32 * 16 * 6);
}

#[test]
fn convex_meshes_face_outward() {
    for mesh in [box_mesh(), icosahedron(1.0)] {
        assert_unit_normals(&mesh);
        for (centroid, normal) in faces(&mesh) {
            assert!(centroid.dot(normal) > 0.0);
        }
    }
}

#[test]
fn icosahedron_vertices_lie_on_sphere() {
    for v in icosahedron(2.0) {
        assert!((Vec3::from(v.position).length() - 2.0).abs() < 1e-4);
    }
}

#[test]
fn torus_faces_point_away_from_tube() {
    let major = 0.8;
    let mesh = torus(major, 0.3, 32, 16);
    assert_unit_normals(&mesh);
    for (centroid, normal) in faces(&mesh) {
        let ring = Vec3::new(centroid.x, 0.0, centroid.z).normalize() * major;
        assert!((centroid - ring).dot(normal) > 0.0);
    }
}

#[test]
fn draw_order_is_farthest_first() {
    let eye = Vec3::new(0.0, 0.6, 6.0);
    let positions = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(3.2, 0.0, 0.0),
        Vec3::new(6.4, 0.0, 0.0),
    ];
    assert_eq!(back_to_front(eye, &positions), vec![2, 1, 0]);
    let eye = Vec3::new(6.4, 0.6, 6.0);
    assert_eq!(back_to_front(eye, &positions), vec![0, 1, 2]);
    assert!(back_to_front(eye, &[]).is_empty());
}

#[test]
fn vertex_is_plain_old_data() {
    let mesh = box_mesh();
    let bytes: &[u8] = bytemuck::cast_slice(&mesh);
    assert_eq!(bytes.len(), mesh.len() * 24);
}
