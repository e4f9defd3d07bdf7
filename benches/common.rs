#![allow(dead_code)] // each bench binary uses a subset of these helpers

use crystal3d::{
    Camera, DirectionalLight, DrawParams, FaceSelection, Fragment, Lighting, Material, Model,
    Vertex,
};
use glam::Vec3;

use std::f32::consts::PI;

pub const FRAGMENTS: usize = 320 * 180;

pub fn make_params() -> DrawParams {
    let camera = Camera::new(Vec3::new(0.0, 8.0, 35.0));
    let lighting = Lighting::new(0.1)
        .with_light(
            0,
            DirectionalLight::new(Vec3::new(0.3, 0.8, 0.5).normalize(), 0.9),
        )
        .with_light(
            1,
            DirectionalLight::new(Vec3::new(-0.6, 0.2, 0.8).normalize(), 0.4),
        );
    DrawParams {
        view_projection: camera.view_projection(),
        viewer_position: camera.position,
        lighting,
        faces: FaceSelection::Both,
    }
}

/// A hexagonal prism with pyramidal ends: the classic quartz habit, enough
/// triangles to make the vertex pass non-trivial but stable.
pub fn make_model() -> Model {
    let a = 4.9133_f32;
    let c = 5.4053_f32;
    let material = Material::new(Vec3::new(0.7, 0.1, 0.7))
        .with_alpha(0.5)
        .with_specular(0.7, 20.0);

    let top_prism = 10.0;
    let bottom_prism = -10.0;
    let top_apex = Vec3::new(0.0, top_prism + c, 0.0);
    let bottom_apex = Vec3::new(0.0, bottom_prism - c, 0.0);

    let ring = |y: f32| -> Vec<Vec3> {
        (0..6)
            .map(|i| {
                let angle = i as f32 * PI / 3.0;
                Vec3::new(a * angle.sin(), y, a * angle.cos())
            })
            .collect()
    };
    let top = ring(top_prism);
    let bottom = ring(bottom_prism);

    let mut model = Model::new();
    for i in 0..6 {
        let next = (i + 1) % 6;
        model.triangle(top_apex, top[i], top[next], &material);
        model.triangle(top[i], bottom[i], top[next], &material);
        model.triangle(top[next], bottom[i], bottom[next], &material);
        model.triangle(bottom[i], bottom_apex, bottom[next], &material);
    }
    model
}

pub fn make_vertices() -> Vec<Vertex> {
    make_model().vertices
}

pub fn make_fragments() -> Vec<Fragment> {
    let material = Material::new(Vec3::new(0.7, 0.1, 0.7))
        .with_alpha(0.5)
        .with_specular(0.7, 20.0);
    (0..FRAGMENTS)
        .map(|i| {
            let t = i as f32 * 0.37;
            Fragment {
                normal: Vec3::new(t.sin(), t.cos(), (t * 0.5).sin()),
                view: Vec3::new(0.1, (t * 0.11).cos() * 0.2, 0.95),
                color: material.diffuse,
                alpha: material.alpha,
                specular: material.specular,
                shine: material.shine,
            }
        })
        .collect()
}
