//! Perspective projection from camera space to screen cells.
//!
//! ```text
//! column = width/2  + fov * invz * x * aspect - x_offset
//! row    = height/2 + fov * invz * y          + y_offset
//! ```
//!
//! `width/2` and `height/2` are integer halves. The float result is truncated toward
//! zero (`as i32`), never rounded. No bounds checks happen here.

use crate::settings::RenderSettings;

/// Projection parameters captured from [`RenderSettings`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    half_width: f32,
    half_height: f32,
    fov: f32,
    aspect: f32,
    x_offset: f32,
    y_offset: f32,
}

impl Projector {
    pub fn new(settings: &RenderSettings) -> Self {
        Self {
            half_width: (settings.width / 2) as f32,
            half_height: (settings.height / 2) as f32,
            fov: settings.fov,
            aspect: settings.aspect,
            x_offset: settings.x_offset,
            y_offset: settings.y_offset,
        }
    }

    /// Screen column for camera-space `x` at inverse depth `invz`.
    #[inline]
    pub fn column(&self, invz: f32, x: f32) -> i32 {
        truncate(self.half_width + self.fov * invz * x * self.aspect - self.x_offset)
    }

    /// Screen row for camera-space `y` at inverse depth `invz`.
    #[inline]
    pub fn row(&self, invz: f32, y: f32) -> i32 {
        truncate(self.half_height + self.fov * invz * y + self.y_offset)
    }
}

/// Float to cell conversion: truncation toward zero.
///
/// NaN maps to 0 and infinities saturate, which is what `as` does.
#[inline(always)]
pub fn truncate(v: f32) -> i32 {
    v as i32
}
