//! Shape generation for 2D primitives

use glam::{Affine2, Vec2};
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices (two triangles) for a square centered at `center`,
/// transformed by `transform`
pub fn square(transform: &Affine2, center: Vec2, size: f32, color: [f32; 4]) -> Vec<Vertex> {
    let h = size / 2.0;
    let corners = [
        center + Vec2::new(-h, -h),
        center + Vec2::new(h, -h),
        center + Vec2::new(h, h),
        center + Vec2::new(-h, h),
    ]
    .map(|c| transform.transform_point2(c));

    vec![
        Vertex::at(corners[0], color),
        Vertex::at(corners[1], color),
        Vertex::at(corners[2], color),
        Vertex::at(corners[2], color),
        Vertex::at(corners[3], color),
        Vertex::at(corners[0], color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(transform: &Affine2, center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);
    let c = transform.transform_point2(center);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        let p1 = center + Vec2::new(radius * theta1.cos(), radius * theta1.sin());
        let p2 = center + Vec2::new(radius * theta2.cos(), radius * theta2.sin());

        // Triangle from center to edge
        vertices.push(Vertex::at(c, color));
        vertices.push(Vertex::at(transform.transform_point2(p1), color));
        vertices.push(Vertex::at(transform.transform_point2(p2), color));
    }

    vertices
}
