//! Flat-shaded triangle lists for the carousel geometries.
//!
//! No web or GPU types here so the host tests can include the file.

use floor_core::Geometry;
use std::f32::consts::TAU;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

fn sub(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn normalize(v: [f32; 3]) -> [f32; 3] {
    let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if len <= f32::EPSILON {
        return [0.0, 1.0, 0.0];
    }
    [v[0] / len, v[1] / len, v[2] / len]
}

/// Push one triangle with its face normal.
fn push_face(out: &mut Vec<Vertex>, a: [f32; 3], b: [f32; 3], c: [f32; 3]) {
    let normal = normalize(cross(sub(b, a), sub(c, a)));
    for position in [a, b, c] {
        out.push(Vertex { position, normal });
    }
}

/// Unit cube centred on the origin (side 1.4).
pub fn box_mesh() -> Vec<Vertex> {
    let h = 0.7;
    let corners = [
        [-h, -h, -h],
        [h, -h, -h],
        [h, h, -h],
        [-h, h, -h],
        [-h, -h, h],
        [h, -h, h],
        [h, h, h],
        [-h, h, h],
    ];
    // Counter-clockwise when seen from outside.
    const QUADS: [[usize; 4]; 6] = [
        [4, 5, 6, 7],
        [1, 0, 3, 2],
        [5, 1, 2, 6],
        [0, 4, 7, 3],
        [7, 6, 2, 3],
        [0, 1, 5, 4],
    ];
    let mut out = Vec::with_capacity(36);
    for [a, b, c, d] in QUADS {
        push_face(&mut out, corners[a], corners[b], corners[c]);
        push_face(&mut out, corners[a], corners[c], corners[d]);
    }
    out
}

pub fn icosahedron(radius: f32) -> Vec<Vertex> {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let raw = [
        [-1.0, t, 0.0],
        [1.0, t, 0.0],
        [-1.0, -t, 0.0],
        [1.0, -t, 0.0],
        [0.0, -1.0, t],
        [0.0, 1.0, t],
        [0.0, -1.0, -t],
        [0.0, 1.0, -t],
        [t, 0.0, -1.0],
        [t, 0.0, 1.0],
        [-t, 0.0, -1.0],
        [-t, 0.0, 1.0],
    ];
    let verts: Vec<[f32; 3]> = raw
        .iter()
        .map(|v| {
            let n = normalize(*v);
            [n[0] * radius, n[1] * radius, n[2] * radius]
        })
        .collect();
    const FACES: [[usize; 3]; 20] = [
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];
    let mut out = Vec::with_capacity(60);
    for [a, b, c] in FACES {
        push_face(&mut out, verts[a], verts[b], verts[c]);
    }
    out
}

/// Torus around the y axis, faceted per quad.
pub fn torus(major: f32, minor: f32, rings: usize, sides: usize) -> Vec<Vertex> {
    let rings = rings.max(3);
    let sides = sides.max(3);
    let point = |i: usize, j: usize| {
        let u = (i % rings) as f32 / rings as f32 * TAU;
        let v = (j % sides) as f32 / sides as f32 * TAU;
        let r = major + minor * v.cos();
        [r * u.cos(), minor * v.sin(), r * u.sin()]
    };
    let mut out = Vec::with_capacity(rings * sides * 6);
    for i in 0..rings {
        for j in 0..sides {
            let a = point(i, j);
            let b = point(i + 1, j);
            let c = point(i + 1, j + 1);
            let d = point(i, j + 1);
            push_face(&mut out, a, c, b);
            push_face(&mut out, a, d, c);
        }
    }
    out
}

pub fn mesh_for(geometry: Geometry) -> Vec<Vertex> {
    match geometry {
        Geometry::Box => box_mesh(),
        Geometry::Icosahedron => icosahedron(1.0),
        Geometry::Torus => torus(0.8, 0.3, 32, 16),
    }
}

/// Indices of `positions` sorted farthest-first from `eye`, the order
/// translucent objects have to be drawn in.
pub fn back_to_front(eye: glam::Vec3, positions: &[glam::Vec3]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..positions.len()).collect();
    order.sort_by(|&a, &b| {
        let da = positions[a].distance_squared(eye);
        let db = positions[b].distance_squared(eye);
        db.total_cmp(&da)
    });
    order
}
