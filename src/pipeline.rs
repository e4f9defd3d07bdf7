use glam::{Mat4, Vec3, Vec4};

use std::time::Instant;

use crate::{
    facing::{classify, FaceSelection},
    fragment::Fragment,
    light::Lighting,
    shade::shade_fragment,
    stats::PassStats,
    target::ImageTarget,
    vertex::{transform_vertex, Vertex, VertexOutput},
};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Read-only state for one draw call, shared by every vertex and fragment
/// evaluation in the call. Never mutated while a pass runs; changing it
/// between draw calls is the caller's business.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrawParams {
    pub view_projection: Mat4,
    pub viewer_position: Vec3,
    pub lighting: Lighting,
    pub faces: FaceSelection,
}

impl Default for DrawParams {
    fn default() -> Self {
        Self {
            view_projection: Mat4::IDENTITY,
            viewer_position: Vec3::Z,
            lighting: Lighting::default(),
            faces: FaceSelection::Both,
        }
    }
}

/// Back faces draw before front faces, so translucent fronts blend over the
/// far side of the crystal.
pub const DRAW_PASSES: [FaceSelection; 2] = [FaceSelection::Back, FaceSelection::Front];

/// The full fragment stage for one sample: the visibility decision, then
/// lighting. `None` is a discarded fragment, not an error.
pub fn run_fragment(params: &DrawParams, frag: &Fragment) -> Option<Vec4> {
    let facing = classify(frag.normal, frag.view, frag.alpha, params.faces)?;
    Some(shade_fragment(frag, &facing, &params.lighting))
}

/// Vertex stage over a whole buffer. Every element is independent; with the
/// `rayon` feature the buffer is evaluated in parallel.
#[cfg(feature = "rayon")]
pub fn process_vertices(params: &DrawParams, vertices: &[Vertex]) -> Vec<VertexOutput> {
    vertices
        .par_iter()
        .map(|v| transform_vertex(params.view_projection, params.viewer_position, v))
        .collect()
}

#[cfg(not(feature = "rayon"))]
pub fn process_vertices(params: &DrawParams, vertices: &[Vertex]) -> Vec<VertexOutput> {
    vertices
        .iter()
        .map(|v| transform_vertex(params.view_projection, params.viewer_position, v))
        .collect()
}

/// Fragment stage over a whole buffer; discarded fragments come back as
/// `None`. Same parallelism contract as `process_vertices`.
#[cfg(feature = "rayon")]
pub fn shade_fragments(params: &DrawParams, fragments: &[Fragment]) -> Vec<Option<Vec4>> {
    fragments
        .par_iter()
        .map(|frag| run_fragment(params, frag))
        .collect()
}

#[cfg(not(feature = "rayon"))]
pub fn shade_fragments(params: &DrawParams, fragments: &[Fragment]) -> Vec<Option<Vec4>> {
    fragments
        .iter()
        .map(|frag| run_fragment(params, frag))
        .collect()
}

/// `shade_fragments` plus pass counters. The counters are accumulated by
/// this driver after the parallel evaluation, so the per-fragment functions
/// stay pure.
pub fn shade_fragments_with_stats(
    params: &DrawParams,
    fragments: &[Fragment],
) -> (Vec<Option<Vec4>>, PassStats) {
    let started = Instant::now();
    let colors = shade_fragments(params, fragments);

    let mut stats = PassStats {
        fragments: fragments.len(),
        ..PassStats::default()
    };
    for (frag, color) in fragments.iter().zip(&colors) {
        if color.is_some() {
            stats.shaded += 1;
            if frag.normal.dot(frag.view) < 0.0 {
                stats.back_facing += 1;
            }
        } else {
            stats.discarded += 1;
        }
    }
    stats.total = started.elapsed();

    (colors, stats)
}

/// Two-pass translucent draw over a per-pixel fragment buffer: back faces
/// first, then front faces, alpha-blended into `target`. The buffer is
/// row-major at the target's resolution; `None` slots are background. The
/// face selection in `params` is ignored — the passes select.
pub fn composite_passes(
    params: &DrawParams,
    fragments: &[Option<Fragment>],
    target: &mut ImageTarget,
) {
    let width = target.width().max(1);
    for pass in DRAW_PASSES {
        let pass_params = DrawParams {
            faces: pass,
            ..*params
        };
        for (i, slot) in fragments.iter().enumerate() {
            let Some(frag) = slot else {
                continue;
            };
            let Some(color) = run_fragment(&pass_params, frag) else {
                continue;
            };
            target.blend_color(i % width, i / width, color);
        }
    }
}
