//! Combined three-axis rotation.
//!
//! Each output coordinate is the closed-form expansion of the X-Y-Z rotation product.
//! The sines and cosines are computed once per call and shared by all three outputs.

use crate::types::{Angles, Point3};

/// Precomputed sines and cosines for one set of [`Angles`].
///
/// The rasterizer builds one of these per frame so the per-sample cost is just the
/// multiply-adds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    sin_a: f32,
    cos_a: f32,
    sin_b: f32,
    cos_b: f32,
    sin_c: f32,
    cos_c: f32,
}

impl Rotation {
    pub fn new(angles: Angles) -> Self {
        let (sin_a, cos_a) = angles.a.sin_cos();
        let (sin_b, cos_b) = angles.b.sin_cos();
        let (sin_c, cos_c) = angles.c.sin_cos();
        Self {
            sin_a,
            cos_a,
            sin_b,
            cos_b,
            sin_c,
            cos_c,
        }
    }

    #[inline]
    pub fn x(&self, i: f32, j: f32, k: f32) -> f32 {
        let (sa, ca, sb, cb, sc, cc) = self.parts();
        j * sa * sb * cc - k * ca * sb * cc + j * ca * sc + k * sa * sc + i * cb * cc
    }

    #[inline]
    pub fn y(&self, i: f32, j: f32, k: f32) -> f32 {
        let (sa, ca, sb, cb, sc, cc) = self.parts();
        j * ca * cc + k * sa * cc - j * sa * sb * sc + k * ca * sb * sc - i * cb * sc
    }

    #[inline]
    pub fn z(&self, i: f32, j: f32, k: f32) -> f32 {
        let (sa, ca, sb, cb, _, _) = self.parts();
        k * ca * cb - j * sa * cb + i * sb
    }

    #[inline]
    pub fn apply(&self, p: Point3) -> Point3 {
        Point3::new(self.x(p.x, p.y, p.z), self.y(p.x, p.y, p.z), self.z(p.x, p.y, p.z))
    }

    #[inline(always)]
    fn parts(&self) -> (f32, f32, f32, f32, f32, f32) {
        (
            self.sin_a, self.cos_a, self.sin_b, self.cos_b, self.sin_c, self.cos_c,
        )
    }
}

/// Rotate `p` about all three axes by `angles`.
pub fn rotate(p: Point3, angles: Angles) -> Point3 {
    Rotation::new(angles).apply(p)
}
