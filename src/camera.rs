use glam::{Mat4, Vec3, Vec4};

/// A viewer at `position` looking toward the origin, projecting into a
/// viewing volume whose front plane sits 1 unit in front of the viewer and
/// whose back plane mirrors the front plane across the origin. The front
/// face of the volume is 1 unit wide and high, centered on the view axis.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Camera {
    pub position: Vec3,
}

impl Camera {
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }

    /// World-to-viewer transform. The viewer's orthonormal basis vectors
    /// form the rows of the rotation part, and the translation moves points
    /// back along the view axis by the viewer's distance from the origin.
    pub fn view_matrix(&self) -> Mat4 {
        let back = self.position.normalize_or_zero();
        let mut up = (Vec3::Y - back * Vec3::Y.dot(back)).normalize_or_zero();
        if up.length_squared() == 0.0 {
            // Viewer on the vertical axis; any horizontal up will do.
            up = Vec3::Z;
        }
        let right = up.cross(back);
        let distance = self.position.length();

        Mat4::from_cols(
            Vec4::new(right.x, up.x, back.x, 0.0),
            Vec4::new(right.y, up.y, back.y, 0.0),
            Vec4::new(right.z, up.z, back.z, 0.0),
            Vec4::new(0.0, 0.0, -distance, 1.0),
        )
    }

    /// Viewer-to-clip transform for the origin-centered viewing volume.
    /// Coefficients follow from the volume parameters: for viewer distance
    /// `d`, depth maps through `a = d / (1 - d)` and
    /// `b = (2d - 1) / (1 - d)`.
    pub fn projection_matrix(&self) -> Mat4 {
        let d = self.position.length();
        let a = d / (1.0 - d);
        let b = (2.0 * d - 1.0) / (1.0 - d);

        Mat4::from_cols(
            Vec4::new(2.0, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 2.0, 0.0, 0.0),
            Vec4::new(0.0, 0.0, a, -1.0),
            Vec4::new(0.0, 0.0, b, 0.0),
        )
    }

    /// The combined world-to-clip transform fed to the vertex stage.
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
