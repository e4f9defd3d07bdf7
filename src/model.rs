use glam::Vec3;
use std::fmt;

use crate::{material::Material, vertex::Vertex};

/// Violations of the caller-side invariants the shading core itself never
/// checks. Validation is opt-in; the pure stages assume these hold.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModelValidationError {
    PositionNotFinite { index: usize },
    NormalDegenerate { index: usize },
    ColorOutOfRange { index: usize },
    AlphaOutOfRange { index: usize },
    NegativeSpecular { index: usize },
    NegativeShine { index: usize },
}

impl fmt::Display for ModelValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ModelValidationError::PositionNotFinite { index } => {
                write!(f, "position_not_finite:{index}")
            }
            ModelValidationError::NormalDegenerate { index } => {
                write!(f, "normal_degenerate:{index}")
            }
            ModelValidationError::ColorOutOfRange { index } => {
                write!(f, "color_out_of_range:{index}")
            }
            ModelValidationError::AlphaOutOfRange { index } => {
                write!(f, "alpha_out_of_range:{index}")
            }
            ModelValidationError::NegativeSpecular { index } => {
                write!(f, "negative_specular:{index}")
            }
            ModelValidationError::NegativeShine { index } => {
                write!(f, "negative_shine:{index}")
            }
        }
    }
}

impl std::error::Error for ModelValidationError {}

/// A flat-triangle model accumulated host-side before a draw. Each triangle
/// contributes three vertices sharing one outward normal and one material;
/// angular crystal faces get a separate normal per face even where faces
/// share a corner.
#[derive(Clone, Debug, Default)]
pub struct Model {
    pub vertices: Vec<Vertex>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one flat triangle. Vertices are counterclockwise as seen from
    /// outside, so the outward normal is `(v3 - v2) x (v1 - v2)`.
    pub fn triangle(&mut self, v1: Vec3, v2: Vec3, v3: Vec3, material: &Material) {
        let normal = (v3 - v2).cross(v1 - v2).normalize_or_zero();
        for position in [v1, v2, v3] {
            self.vertices.push(Vertex::new(position, normal, material));
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn validate(&self) -> Result<(), ModelValidationError> {
        for (index, v) in self.vertices.iter().enumerate() {
            if !v.position.is_finite() {
                return Err(ModelValidationError::PositionNotFinite { index });
            }
            if !v.normal.is_finite() || v.normal.length_squared() == 0.0 {
                return Err(ModelValidationError::NormalDegenerate { index });
            }
            if !v.color.is_finite()
                || v.color.cmplt(Vec3::ZERO).any()
                || v.color.cmpgt(Vec3::ONE).any()
            {
                return Err(ModelValidationError::ColorOutOfRange { index });
            }
            if !(0.0..=1.0).contains(&v.alpha) {
                return Err(ModelValidationError::AlphaOutOfRange { index });
            }
            if !(v.specular >= 0.0) {
                return Err(ModelValidationError::NegativeSpecular { index });
            }
            if !(v.shine >= 0.0) {
                return Err(ModelValidationError::NegativeShine { index });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Model, ModelValidationError};
    use crate::Material;
    use glam::Vec3;

    #[test]
    fn triangle_gets_outward_flat_normal() {
        let mut model = Model::new();
        model.triangle(Vec3::ZERO, Vec3::X, Vec3::Y, &Material::default());

        assert_eq!(model.triangle_count(), 1);
        for v in &model.vertices {
            assert_eq!(v.normal, Vec3::Z);
        }
    }

    #[test]
    fn vertices_carry_the_material() {
        let material = Material::new(Vec3::new(0.7, 0.1, 0.7))
            .with_alpha(0.5)
            .with_specular(0.7, 20.0);
        let mut model = Model::new();
        model.triangle(Vec3::ZERO, Vec3::X, Vec3::Y, &material);

        let v = &model.vertices[0];
        assert_eq!(v.color, material.diffuse);
        assert_eq!(v.alpha, 0.5);
        assert_eq!(v.specular, 0.7);
        assert_eq!(v.shine, 20.0);
    }

    #[test]
    fn validate_accepts_a_well_formed_model() {
        let mut model = Model::new();
        model.triangle(Vec3::ZERO, Vec3::X, Vec3::Y, &Material::default());
        assert!(model.validate().is_ok());
    }

    #[test]
    fn validate_flags_degenerate_normals() {
        let mut model = Model::new();
        // Collinear vertices produce a zero cross product.
        model.triangle(Vec3::ZERO, Vec3::X, Vec3::X * 2.0, &Material::default());
        assert_eq!(
            model.validate(),
            Err(ModelValidationError::NormalDegenerate { index: 0 })
        );
    }

    #[test]
    fn validate_flags_out_of_range_alpha() {
        let mut model = Model::new();
        let material = Material::default().with_alpha(1.5);
        model.triangle(Vec3::ZERO, Vec3::X, Vec3::Y, &material);
        assert_eq!(
            model.validate(),
            Err(ModelValidationError::AlphaOutOfRange { index: 0 })
        );
    }

    #[test]
    fn validate_flags_non_finite_positions() {
        let mut model = Model::new();
        model.triangle(
            Vec3::new(f32::NAN, 0.0, 0.0),
            Vec3::X,
            Vec3::Y,
            &Material::default(),
        );
        assert!(matches!(
            model.validate(),
            Err(ModelValidationError::PositionNotFinite { .. })
                | Err(ModelValidationError::NormalDegenerate { .. })
        ));
    }
}
