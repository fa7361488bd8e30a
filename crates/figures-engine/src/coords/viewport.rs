use glam::Vec2;

/// Viewport size in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Converts a pointer movement in logical pixels into an NDC displacement.
    ///
    /// NDC spans 2 units across each axis and points +Y up, so the pixel delta is
    /// divided by the extent, doubled, and Y is negated. Returns zero for an
    /// invalid (e.g. minimized) viewport.
    #[inline]
    pub fn pixel_delta_to_ndc(self, dx: f32, dy: f32) -> Vec2 {
        if !self.is_valid() {
            return Vec2::ZERO;
        }
        Vec2::new(dx / self.width * 2.0, -dy / self.height * 2.0)
    }
}
