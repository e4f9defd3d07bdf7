use glam::{Vec3, Vec4};

use crate::{facing::Facing, fragment::Fragment, light::Lighting};

/// The lighting model: ambient, diffuse, and specular contributions from up
/// to four directional lights, evaluated once per visible fragment.
///
/// The effective normal and attenuation come from the facing decision; a
/// back-lit translucent surface has already had its normal flipped and its
/// directed light scaled by `1 - alpha`. Alpha itself is never lit or
/// attenuated, only passed through to the output.
///
/// Pure arithmetic with no error paths: degenerate inputs (zero light
/// directions, wildly non-unit normals) yield geometrically nonsensical but
/// finite output.
pub fn shade_fragment(frag: &Fragment, facing: &Facing, lighting: &Lighting) -> Vec4 {
    let n = facing.normal.normalize_or_zero();
    let v = frag.view.normalize_or_zero();

    let mut rgb = lighting.ambient * frag.color;

    for light in &lighting.lights {
        if light.is_off() {
            continue;
        }
        let l = light.direction;

        // A light on the far side of the surface contributes nothing,
        // neither diffuse nor specular.
        let cos_theta = n.dot(l);
        if cos_theta <= 0.0 {
            continue;
        }

        let directed = light.intensity * facing.attenuation;
        rgb += directed * cos_theta * frag.color;

        // Mirror-like highlight along the reflection of the light about the
        // normal, narrowed by the shininess exponent. Added equally to all
        // three channels.
        let reflection = (2.0 * cos_theta * n - l).normalize_or_zero();
        let cos_phi = reflection.dot(v).max(0.0);
        rgb += Vec3::splat(directed * cos_phi.powf(frag.shine) * frag.specular);
    }

    rgb.extend(frag.alpha)
}
