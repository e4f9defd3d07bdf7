use glam::Vec3;

/// Surface appearance of a crystal face: per-channel diffuse reflection,
/// opacity, and the strength and angular tightness of specular highlights.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Material {
    pub diffuse: Vec3,
    pub alpha: f32,
    pub specular: f32,
    pub shine: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            diffuse: Vec3::splat(0.8),
            alpha: 1.0,
            specular: 0.0,
            shine: 1.0,
        }
    }
}

impl Material {
    pub fn new(diffuse: Vec3) -> Self {
        Self {
            diffuse,
            ..Self::default()
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_specular(mut self, specular: f32, shine: f32) -> Self {
        self.specular = specular;
        self.shine = shine;
        self
    }
}
