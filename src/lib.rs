#![forbid(unsafe_code)]

pub mod camera;
pub mod facing;
pub mod fragment;
pub mod light;
pub mod material;
pub mod model;
pub mod pipeline;
pub mod prelude;
pub mod shade;
pub mod stats;
pub mod target;
pub mod vertex;

pub use crate::{
    camera::Camera,
    facing::{classify, FaceSelection, Facing},
    fragment::Fragment,
    light::{DirectionalLight, Lighting, LIGHT_COUNT},
    material::Material,
    model::{Model, ModelValidationError},
    pipeline::{
        composite_passes, process_vertices, run_fragment, shade_fragments,
        shade_fragments_with_stats, DrawParams, DRAW_PASSES,
    },
    shade::shade_fragment,
    stats::PassStats,
    target::ImageTarget,
    vertex::{transform_vertex, Vertex, VertexOutput},
};
