use glam::{Mat4, Vec3, Vec4};

use crate::Material;

/// One corner of a model triangle, carrying the material attributes the
/// fragment stage later interpolates across the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub color: Vec3,
    pub alpha: f32,
    pub specular: f32,
    pub shine: f32,
}

impl Vertex {
    pub fn new(position: Vec3, normal: Vec3, material: &Material) -> Self {
        Self {
            position,
            normal,
            color: material.diffuse,
            alpha: material.alpha,
            specular: material.specular,
            shine: material.shine,
        }
    }
}

/// Vertex-stage result: the clip-space position plus everything handed to
/// interpolation. `view` is the unit vector from the vertex toward the
/// viewer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VertexOutput {
    pub clip_position: Vec4,
    pub view: Vec3,
    pub normal: Vec3,
    pub color: Vec3,
    pub alpha: f32,
    pub specular: f32,
    pub shine: f32,
}

/// The vertex stage. Pure linear algebra: project the position into clip
/// space, derive the viewing vector, and pass the surface attributes
/// through untouched.
pub fn transform_vertex(view_projection: Mat4, viewer_position: Vec3, v: &Vertex) -> VertexOutput {
    VertexOutput {
        clip_position: view_projection * v.position.extend(1.0),
        view: (viewer_position - v.position).normalize_or_zero(),
        normal: v.normal,
        color: v.color,
        alpha: v.alpha,
        specular: v.specular,
        shine: v.shine,
    }
}

#[cfg(test)]
mod tests {
    use super::{transform_vertex, Vertex};
    use crate::Material;
    use glam::{Mat4, Vec3};

    fn sample_vertex() -> Vertex {
        let material = Material::new(Vec3::new(0.7, 0.1, 0.7))
            .with_alpha(0.5)
            .with_specular(0.7, 20.0);
        Vertex::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Y, &material)
    }

    #[test]
    fn identity_transform_keeps_position() {
        let v = sample_vertex();
        let out = transform_vertex(Mat4::IDENTITY, Vec3::new(1.0, 2.0, 8.0), &v);
        assert_eq!(out.clip_position, v.position.extend(1.0));
    }

    #[test]
    fn view_vector_points_toward_viewer() {
        let v = sample_vertex();
        let out = transform_vertex(Mat4::IDENTITY, Vec3::new(1.0, 2.0, 8.0), &v);
        assert_eq!(out.view, Vec3::Z);
    }

    #[test]
    fn attributes_pass_through_unchanged() {
        let v = sample_vertex();
        let out = transform_vertex(Mat4::IDENTITY, Vec3::ZERO, &v);
        assert_eq!(out.normal, v.normal);
        assert_eq!(out.color, v.color);
        assert_eq!(out.alpha, v.alpha);
        assert_eq!(out.specular, v.specular);
        assert_eq!(out.shine, v.shine);
    }
}
