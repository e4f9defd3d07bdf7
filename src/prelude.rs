pub use crate::{
    classify, composite_passes, process_vertices, run_fragment, shade_fragment, shade_fragments,
    shade_fragments_with_stats, transform_vertex, Camera, DirectionalLight, DrawParams,
    FaceSelection, Facing, Fragment, ImageTarget, Lighting, Material, Model, PassStats, Vertex,
    VertexOutput, DRAW_PASSES, LIGHT_COUNT,
};

pub use glam::{Mat4, Vec3, Vec4};
