//! Surface sampler and depth-tested compositing.
//!
//! Every face is swept over its two free axes at a fixed step. Each sample is rotated,
//! pushed back by the view distance, projected and written into the frame if it is
//! nearer (larger `1/z`) than what the cell already holds.

use anyhow::{bail, Result};

use crate::buffer::{DepthBuffer, FrameBuffer};
use crate::project::Projector;
use crate::rotate::Rotation;
use crate::settings::RenderSettings;
use crate::shape::ShapeConfig;
use crate::types::{Angles, Axis, FaceId, Point3, ShapeDimensions};

/// How one face is swept.
///
/// The outer loop runs over `outer`, the inner loop over `inner`, and `normal` is held
/// at `normal_sign * half`. The signs mirror the sweep so every face reads its pattern
/// the right way round when seen from outside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceSweep {
    pub face: FaceId,
    pub outer: Axis,
    pub outer_sign: f32,
    pub inner: Axis,
    pub inner_sign: f32,
    pub normal: Axis,
    pub normal_sign: f32,
}

/// Sweep descriptors in draw order. Exact depth ties keep the earlier face.
pub const FACE_TABLE: [FaceSweep; 6] = [
    FaceSweep {
        face: FaceId::Front,
        outer: Axis::X,
        outer_sign: 1.0,
        inner: Axis::Y,
        inner_sign: 1.0,
        normal: Axis::Z,
        normal_sign: -1.0,
    },
    FaceSweep {
        face: FaceId::Right,
        outer: Axis::Z,
        outer_sign: 1.0,
        inner: Axis::Y,
        inner_sign: 1.0,
        normal: Axis::X,
        normal_sign: 1.0,
    },
    FaceSweep {
        face: FaceId::Left,
        outer: Axis::Z,
        outer_sign: -1.0,
        inner: Axis::Y,
        inner_sign: 1.0,
        normal: Axis::X,
        normal_sign: -1.0,
    },
    FaceSweep {
        face: FaceId::Back,
        outer: Axis::X,
        outer_sign: -1.0,
        inner: Axis::Y,
        inner_sign: 1.0,
        normal: Axis::Z,
        normal_sign: 1.0,
    },
    FaceSweep {
        face: FaceId::Bottom,
        outer: Axis::X,
        outer_sign: 1.0,
        inner: Axis::Z,
        inner_sign: -1.0,
        normal: Axis::Y,
        normal_sign: -1.0,
    },
    FaceSweep {
        face: FaceId::Top,
        outer: Axis::X,
        outer_sign: 1.0,
        inner: Axis::Z,
        inner_sign: 1.0,
        normal: Axis::Y,
        normal_sign: 1.0,
    },
];

impl FaceSweep {
    pub fn for_face(face: FaceId) -> &'static FaceSweep {
        &FACE_TABLE[face.index()]
    }

    /// Object-space point for sweep coordinates `(s, t)`.
    #[inline]
    pub fn point(&self, dims: ShapeDimensions, s: f32, t: f32) -> Point3 {
        let mut p = Point3::default();
        p.set(self.outer, self.outer_sign * s);
        p.set(self.inner, self.inner_sign * t);
        p.set(self.normal, self.normal_sign * dims.half(self.normal));
        p
    }

    /// Normalized face coordinates of an on-face point, each in `[0, 1]`.
    #[inline]
    pub fn uv(&self, dims: ShapeDimensions, p: Point3) -> (f32, f32) {
        let hu = dims.half(self.outer);
        let hv = dims.half(self.inner);
        (
            (p.get(self.outer) + hu) / (2.0 * hu),
            (p.get(self.inner) + hv) / (2.0 * hv),
        )
    }
}

/// Upper bound on sweep steps along one face axis.
///
/// At or below this count the step is at least `2^-15` of the half extent, far above
/// the f32 spacing near it, so the accumulating sweep always terminates.
pub const MAX_STEPS_PER_AXIS: f32 = 65_536.0;

/// Number of sweep steps across an axis of half extent `half`.
#[inline]
fn sweep_steps(half: f32, density: f32) -> f32 {
    2.0 * half / density
}

/// Reject a density too fine for `dims`.
pub fn check_density(density: f32, dims: ShapeDimensions) -> Result<()> {
    for axis in [Axis::X, Axis::Y, Axis::Z] {
        let half = dims.half(axis);
        let steps = sweep_steps(half, density);
        if steps > MAX_STEPS_PER_AXIS {
            bail!(
                "density {} too fine for half extent {} on {:?} ({} steps, max {})",
                density,
                half,
                axis,
                steps,
                MAX_STEPS_PER_AXIS
            );
        }
    }
    Ok(())
}

/// Per-frame counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RasterStats {
    /// Samples generated by the sweep.
    pub samples: u64,
    /// Samples that landed inside the buffer.
    pub in_bounds: u64,
    /// Samples that passed the depth test.
    pub written: u64,
}

impl RasterStats {
    fn add(&mut self, other: RasterStats) {
        self.samples += other.samples;
        self.in_bounds += other.in_bounds;
        self.written += other.written;
    }
}

/// Outcome of plotting one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plot {
    /// Landed outside `[0, width * height)`.
    Discarded,
    /// In bounds, but not strictly nearer than what the cell already holds.
    Occluded,
    Written,
}

/// Linear buffer index for a projected cell. May be negative or past the end.
///
/// Columns are not range-checked on their own, so a column just past the right edge
/// wraps onto the next row.
#[inline(always)]
pub fn linear_index(column: i32, row: i32, width: u16) -> i64 {
    column as i64 + row as i64 * width as i64
}

/// Depth-tested write of one sample.
///
/// Nothing happens unless `index` is in range and `invz` is strictly greater than the
/// stored inverse depth.
#[inline]
pub fn depth_write(
    frame: &mut FrameBuffer,
    depth: &mut DepthBuffer,
    index: i64,
    invz: f32,
    ch: char,
) -> Plot {
    if index < 0 || index >= depth.len() as i64 || index >= frame.len() as i64 {
        return Plot::Discarded;
    }
    let i = index as usize;
    match depth.get_linear(i) {
        Some(current) if invz > current => {
            depth.set_linear(i, invz);
            frame.set_linear(i, ch);
            Plot::Written
        }
        _ => Plot::Occluded,
    }
}

/// Rotates, projects and composites shape samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rasterizer {
    projector: Projector,
    width: u16,
    view_distance: f32,
    density: f32,
}

impl Rasterizer {
    pub fn new(settings: &RenderSettings) -> Self {
        Self {
            projector: Projector::new(settings),
            width: settings.width,
            view_distance: settings.view_distance,
            density: settings.density,
        }
    }

    /// Fails when the sweep over `shape` would exceed [`MAX_STEPS_PER_AXIS`].
    pub fn check_shape(&self, shape: &ShapeConfig) -> Result<()> {
        check_density(self.density, shape.dimensions())
    }

    /// Draw all six faces of `shape` at `angles`.
    pub fn draw_shape(
        &self,
        shape: &ShapeConfig,
        angles: Angles,
        frame: &mut FrameBuffer,
        depth: &mut DepthBuffer,
    ) -> RasterStats {
        let rot = Rotation::new(angles);
        let mut stats = RasterStats::default();
        for sweep in &FACE_TABLE {
            stats.add(self.draw_face(sweep, shape, &rot, frame, depth));
        }
        stats
    }

    /// Sweep one face. Faces too large for the step are skipped (see [`check_density`]).
    pub fn draw_face(
        &self,
        sweep: &FaceSweep,
        shape: &ShapeConfig,
        rot: &Rotation,
        frame: &mut FrameBuffer,
        depth: &mut DepthBuffer,
    ) -> RasterStats {
        let dims = shape.dimensions();
        let pattern = shape.face(sweep.face);
        let half_outer = dims.half(sweep.outer);
        let half_inner = dims.half(sweep.inner);
        let mut stats = RasterStats::default();
        if sweep_steps(half_outer, self.density) > MAX_STEPS_PER_AXIS
            || sweep_steps(half_inner, self.density) > MAX_STEPS_PER_AXIS
        {
            log::warn!("{:?} face skipped: density {} too fine", sweep.face, self.density);
            return stats;
        }

        // Step by repeated addition; the accumulated rounding decides the last sample.
        let mut s = -half_outer;
        while s < half_outer {
            let mut t = -half_inner;
            while t < half_inner {
                let p = sweep.point(dims, s, t);
                let ch = if pattern.has_grid() {
                    let (u, v) = sweep.uv(dims, p);
                    pattern.sample(u, v)
                } else {
                    pattern.sample(0.0, 0.0)
                };

                stats.samples += 1;
                match self.plot(rot, p, ch, frame, depth) {
                    Plot::Discarded => {}
                    Plot::Occluded => stats.in_bounds += 1,
                    Plot::Written => {
                        stats.in_bounds += 1;
                        stats.written += 1;
                    }
                }
                t += self.density;
            }
            s += self.density;
        }
        stats
    }

    /// Rotate, project and depth-test a single object-space point.
    #[inline]
    pub fn plot(
        &self,
        rot: &Rotation,
        p: Point3,
        ch: char,
        frame: &mut FrameBuffer,
        depth: &mut DepthBuffer,
    ) -> Plot {
        let x = rot.x(p.x, p.y, p.z);
        let y = rot.y(p.x, p.y, p.z);
        let z = rot.z(p.x, p.y, p.z) + self.view_distance;

        // z <= 0 is passed through: 1/0 is +inf, negative z gives negative invz which
        // never beats the cleared 0.0.
        let invz = 1.0 / z;

        let column = self.projector.column(invz, x);
        let row = self.projector.row(invz, y);
        depth_write(frame, depth, linear_index(column, row, self.width), invz, ch)
    }
}
