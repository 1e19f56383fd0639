//! Mesh generation for the field, posts and footballs
//!
//! All meshes are plain triangle lists.

use glam::{Mat4, Vec3};
use std::f32::consts::{FRAC_PI_2, TAU};

use super::vertex::Vertex;
use crate::scene::{Field, Post};

fn push_quad(out: &mut Vec<Vertex>, a: Vertex, b: Vertex, c: Vertex, d: Vertex) {
    // a-b-c-d counter-clockwise
    out.extend_from_slice(&[a, b, c, c, d, a]);
}

/// The oval: top face at y = 0, bottom at y = -depth, with an outward rim
pub fn field(field: &Field, segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    let color = field.color;
    let bottom = -field.depth;
    let mut vertices = Vec::with_capacity((segments * 12) as usize);

    let rim = |i: u32| {
        let theta = (i as f32 / segments as f32) * TAU;
        let (sin, cos) = theta.sin_cos();
        let x = field.radius_x * cos;
        let z = field.radius_z * sin;
        // Ellipse gradient gives the outward normal
        let normal = Vec3::new(
            x / (field.radius_x * field.radius_x),
            0.0,
            z / (field.radius_z * field.radius_z),
        )
        .normalize_or_zero();
        (x, z, normal)
    };

    for i in 0..segments {
        let (x1, z1, n1) = rim(i);
        let (x2, z2, n2) = rim(i + 1);

        // Top
        vertices.push(Vertex::new(Vec3::ZERO, Vec3::Y, color));
        vertices.push(Vertex::new(Vec3::new(x2, 0.0, z2), Vec3::Y, color));
        vertices.push(Vertex::new(Vec3::new(x1, 0.0, z1), Vec3::Y, color));

        // Bottom
        vertices.push(Vertex::new(Vec3::new(0.0, bottom, 0.0), Vec3::NEG_Y, color));
        vertices.push(Vertex::new(Vec3::new(x1, bottom, z1), Vec3::NEG_Y, color));
        vertices.push(Vertex::new(Vec3::new(x2, bottom, z2), Vec3::NEG_Y, color));

        // Rim
        push_quad(
            &mut vertices,
            Vertex::new(Vec3::new(x1, bottom, z1), n1, color),
            Vertex::new(Vec3::new(x1, 0.0, z1), n1, color),
            Vertex::new(Vec3::new(x2, 0.0, z2), n2, color),
            Vertex::new(Vec3::new(x2, bottom, z2), n2, color),
        );
    }

    vertices
}

/// A capped vertical cylinder
pub fn cylinder(post: &Post, segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    let color = post.color;
    let half = post.height / 2.0;
    let top = post.center + Vec3::Y * half;
    let bottom = post.center - Vec3::Y * half;
    let mut vertices = Vec::with_capacity((segments * 12) as usize);

    for i in 0..segments {
        let t1 = (i as f32 / segments as f32) * TAU;
        let t2 = ((i + 1) as f32 / segments as f32) * TAU;
        let n1 = Vec3::new(t1.cos(), 0.0, t1.sin());
        let n2 = Vec3::new(t2.cos(), 0.0, t2.sin());
        let r1 = n1 * post.radius;
        let r2 = n2 * post.radius;

        push_quad(
            &mut vertices,
            Vertex::new(bottom + r1, n1, color),
            Vertex::new(top + r1, n1, color),
            Vertex::new(top + r2, n2, color),
            Vertex::new(bottom + r2, n2, color),
        );

        vertices.push(Vertex::new(top, Vec3::Y, color));
        vertices.push(Vertex::new(top + r2, Vec3::Y, color));
        vertices.push(Vertex::new(top + r1, Vec3::Y, color));

        vertices.push(Vertex::new(bottom, Vec3::NEG_Y, color));
        vertices.push(Vertex::new(bottom + r1, Vec3::NEG_Y, color));
        vertices.push(Vertex::new(bottom + r2, Vec3::NEG_Y, color));
    }

    vertices
}

/// Capsule centred on the origin along y: hemispherical caps joined by a
/// straight section of `length`
pub fn capsule(
    radius: f32,
    length: f32,
    cap_segments: u32,
    radial_segments: u32,
    color: [f32; 4],
) -> Vec<Vertex> {
    let cap_segments = cap_segments.max(1);
    let radial_segments = radial_segments.max(3);
    let half = length / 2.0;

    // Profile rings from the top pole to the bottom pole: (y, ring radius, polar angle)
    let mut rings = Vec::with_capacity(((cap_segments + 1) * 2) as usize);
    for i in 0..=cap_segments {
        let phi = (i as f32 / cap_segments as f32) * FRAC_PI_2;
        rings.push((half + radius * phi.cos(), radius * phi.sin(), phi));
    }
    for i in 0..=cap_segments {
        let phi = FRAC_PI_2 + (i as f32 / cap_segments as f32) * FRAC_PI_2;
        rings.push((-half + radius * phi.cos(), radius * phi.sin(), phi));
    }

    let point = |ring: (f32, f32, f32), j: u32| {
        let (y, r, phi) = ring;
        let theta = (j as f32 / radial_segments as f32) * TAU;
        let (sin_t, cos_t) = theta.sin_cos();
        let normal = Vec3::new(phi.sin() * cos_t, phi.cos(), phi.sin() * sin_t);
        Vertex::new(Vec3::new(r * cos_t, y, r * sin_t), normal, color)
    };

    let mut vertices = Vec::with_capacity(rings.len() * radial_segments as usize * 6);
    for pair in rings.windows(2) {
        for j in 0..radial_segments {
            push_quad(
                &mut vertices,
                point(pair[0], j),
                point(pair[0], j + 1),
                point(pair[1], j + 1),
                point(pair[1], j),
            );
        }
    }

    vertices
}

/// Apply a rigid transform to a mesh
pub fn transform(vertices: &[Vertex], matrix: Mat4) -> impl Iterator<Item = Vertex> + '_ {
    vertices.iter().map(move |v| Vertex {
        position: matrix
            .transform_point3(Vec3::from_array(v.position))
            .to_array(),
        normal: matrix
            .transform_vector3(Vec3::from_array(v.normal))
            .normalize_or_zero()
            .to_array(),
        color: v.color,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{PostKind, Scene};
    use crate::settings::Settings;

    fn normals_are_unit(vertices: &[Vertex]) -> bool {
        vertices
            .iter()
            .all(|v| (Vec3::from_array(v.normal).length() - 1.0).abs() < 1e-4)
    }

    fn y_range(vertices: &[Vertex]) -> (f32, f32) {
        vertices.iter().fold((f32::MAX, f32::MIN), |(lo, hi), v| {
            (lo.min(v.position[1]), hi.max(v.position[1]))
        })
    }

    #[test]
    fn test_field_mesh() {
        let scene = Scene::build(&Settings::default());
        let mesh = field(&scene.field, 32);
        assert_eq!(mesh.len(), 32 * 12);
        assert!(normals_are_unit(&mesh));

        let (lo, hi) = y_range(&mesh);
        assert_eq!(hi, 0.0);
        assert!((lo + scene.field.depth).abs() < 1e-6);

        let max_x = mesh.iter().map(|v| v.position[0].abs()).fold(0.0, f32::max);
        assert!((max_x - scene.field.radius_x).abs() < 1e-4);
    }

    #[test]
    fn test_cylinder_spans_height() {
        let post = Post {
            kind: PostKind::Goal,
            center: Vec3::new(5.1, 1.0, 0.5),
            radius: 0.05,
            height: 3.0,
            color: [1.0; 4],
        };
        let mesh = cylinder(&post, 10);
        assert_eq!(mesh.len(), 10 * 12);
        assert!(normals_are_unit(&mesh));

        let (lo, hi) = y_range(&mesh);
        assert!((lo + 0.5).abs() < 1e-5);
        assert!((hi - 2.5).abs() < 1e-5);
    }

    #[test]
    fn test_capsule_extent() {
        let mesh = capsule(0.1, 0.1, 4, 8, [1.0; 4]);
        // (4 + 1) * 2 rings, 9 bands, 8 quads each
        assert_eq!(mesh.len(), 9 * 8 * 6);
        assert!(normals_are_unit(&mesh));

        let (lo, hi) = y_range(&mesh);
        assert!((hi - 0.15).abs() < 1e-5);
        assert!((lo + 0.15).abs() < 1e-5);
    }

    #[test]
    fn test_transform_moves_and_keeps_unit_normals() {
        let mesh = capsule(0.1, 0.1, 2, 6, [1.0; 4]);
        let matrix = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0))
            * Mat4::from_rotation_z(0.7);
        let moved: Vec<Vertex> = transform(&mesh, matrix).collect();
        assert_eq!(moved.len(), mesh.len());
        assert!(normals_are_unit(&moved));

        let (lo, hi) = y_range(&moved);
        assert!(lo > 1.7 && hi < 2.3);
    }
}
