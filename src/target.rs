use glam::Vec4;

/// An RGBA8 output surface with the source-over blend the two-pass
/// translucent draw relies on (`src_alpha`, `one_minus_src_alpha`, applied
/// to all four channels).
#[derive(Clone, Debug)]
pub struct ImageTarget {
    width: usize,
    height: usize,
    rgba: Vec<u8>,
}

impl ImageTarget {
    pub fn new(width: usize, height: usize) -> Self {
        let mut out = Self {
            width,
            height,
            rgba: vec![0u8; width.saturating_mul(height).saturating_mul(4)],
        };
        out.clear_rgba(0, 0, 0, 255);
        out
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear_rgba(&mut self, r: u8, g: u8, b: u8, a: u8) {
        for px in self.rgba.chunks_exact_mut(4) {
            px[0] = r;
            px[1] = g;
            px[2] = b;
            px[3] = a;
        }
    }

    pub fn set_rgba(&mut self, x: usize, y: usize, r: u8, g: u8, b: u8, a: u8) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let idx = (y * self.width + x) * 4;
        self.rgba[idx] = r;
        self.rgba[idx + 1] = g;
        self.rgba[idx + 2] = b;
        self.rgba[idx + 3] = a;
        true
    }

    /// Blend a shaded fragment color over the existing pixel. Color channels
    /// are clamped to [0, 1] before weighting by the source alpha.
    pub fn blend_color(&mut self, x: usize, y: usize, color: Vec4) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let idx = (y * self.width + x) * 4;
        let sa = color.w.clamp(0.0, 1.0);

        let src = [
            color.x.clamp(0.0, 1.0),
            color.y.clamp(0.0, 1.0),
            color.z.clamp(0.0, 1.0),
            sa,
        ];
        for (c, s) in src.iter().enumerate() {
            let dst = self.rgba[idx + c] as f32 / 255.0;
            let blended = s * sa + dst * (1.0 - sa);
            self.rgba[idx + c] = (blended * 255.0 + 0.5) as u8;
        }
        true
    }

    pub fn get_rgba(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 4;
        Some([
            self.rgba[idx],
            self.rgba[idx + 1],
            self.rgba[idx + 2],
            self.rgba[idx + 3],
        ])
    }

    pub fn as_rgba_slice(&self) -> &[u8] {
        &self.rgba
    }

    pub fn hash64(&self) -> u64 {
        let mut h: u64 = 0xcbf29ce484222325;
        fn mix(h: &mut u64, b: u8) {
            *h ^= b as u64;
            *h = h.wrapping_mul(0x100000001b3);
        }
        for b in self.width.to_le_bytes() {
            mix(&mut h, b);
        }
        for b in self.height.to_le_bytes() {
            mix(&mut h, b);
        }
        for &b in &self.rgba {
            mix(&mut h, b);
        }
        h
    }

    #[cfg(feature = "png")]
    pub fn write_png_to_vec(&self) -> Result<Vec<u8>, image::ImageError> {
        use image::ImageEncoder;

        let mut out = Vec::new();
        let encoder = image::codecs::png::PngEncoder::new(&mut out);
        encoder.write_image(
            &self.rgba,
            self.width as u32,
            self.height as u32,
            image::ExtendedColorType::Rgba8,
        )?;
        Ok(out)
    }
}
