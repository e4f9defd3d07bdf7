use glam::Vec3;

use crate::vertex::VertexOutput;

/// One interpolated surface sample. The normal and viewing vector come
/// straight out of interpolation and are only approximately unit length;
/// the lighting stage re-normalizes them where the math is angle sensitive.
/// Ephemeral: exists only for the duration of one fragment evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fragment {
    pub normal: Vec3,
    pub view: Vec3,
    pub color: Vec3,
    pub alpha: f32,
    pub specular: f32,
    pub shine: f32,
}

impl Fragment {
    /// Barycentric interpolation of three vertex-stage outputs. The vectors
    /// are deliberately not renormalized, matching what interpolation hands
    /// a fragment evaluator.
    pub fn interpolate(
        a: &VertexOutput,
        b: &VertexOutput,
        c: &VertexOutput,
        w0: f32,
        w1: f32,
        w2: f32,
    ) -> Fragment {
        Fragment {
            normal: w0 * a.normal + w1 * b.normal + w2 * c.normal,
            view: w0 * a.view + w1 * b.view + w2 * c.view,
            color: w0 * a.color + w1 * b.color + w2 * c.color,
            alpha: w0 * a.alpha + w1 * b.alpha + w2 * c.alpha,
            specular: w0 * a.specular + w1 * b.specular + w2 * c.specular,
            shine: w0 * a.shine + w1 * b.shine + w2 * c.shine,
        }
    }

    /// The degenerate interpolation at a vertex itself.
    pub fn from_vertex(v: &VertexOutput) -> Fragment {
        Fragment {
            normal: v.normal,
            view: v.view,
            color: v.color,
            alpha: v.alpha,
            specular: v.specular,
            shine: v.shine,
        }
    }
}
