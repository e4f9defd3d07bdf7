use glam::Vec3;

/// Number of directional light slots in a draw call. Unused slots stay off.
pub const LIGHT_COUNT: usize = 4;

/// An infinitely distant light: a unit direction pointing from the scene
/// toward the light, and an intensity in [0, 1]. The direction must never
/// be the zero vector; that invariant belongs to the caller.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectionalLight {
    pub direction: Vec3,
    pub intensity: f32,
}

impl DirectionalLight {
    pub fn new(direction: Vec3, intensity: f32) -> Self {
        Self {
            direction,
            intensity,
        }
    }

    /// An empty slot: intensity zero, so the light contributes nothing.
    pub fn off() -> Self {
        Self {
            direction: Vec3::Z,
            intensity: 0.0,
        }
    }

    pub fn is_off(&self) -> bool {
        self.intensity <= 0.0
    }
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self::off()
    }
}

/// The scene's light configuration: a uniform ambient intensity plus the
/// four directional light slots. Set once per draw call and read-only while
/// the call runs.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lighting {
    pub ambient: f32,
    pub lights: [DirectionalLight; LIGHT_COUNT],
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: 0.0,
            lights: [DirectionalLight::off(); LIGHT_COUNT],
        }
    }
}

impl Lighting {
    pub fn new(ambient: f32) -> Self {
        Self {
            ambient,
            ..Self::default()
        }
    }

    /// Fill one of the four slots. Panics if `slot >= LIGHT_COUNT`.
    pub fn with_light(mut self, slot: usize, light: DirectionalLight) -> Self {
        self.lights[slot] = light;
        self
    }
}
