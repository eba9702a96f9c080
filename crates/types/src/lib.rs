//! Core types module - shared data structures and constants
//!
//! This module defines the plain data that flows through the rendering pipeline.
//! All types are pure data with no external dependencies, so they can be used from
//! the pipeline, the terminal sinks and the input layer alike.
//!
//! # Coordinate Spaces
//!
//! - **Object space**: a box centred on the origin, extents given by [`ShapeDimensions`].
//! - **Camera space**: object space rotated by [`Angles`] and pushed away from the viewer by the
//!   view distance along +Z.
//! - **Screen space**: integer `(column, row)` cells, row 0 at the top.
//!
//! # Default Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WIDTH` | 90 | Display width in cells |
//! | `DEFAULT_HEIGHT` | 44 | Display height in cells |
//! | `DEFAULT_FOV` | 50.0 | Field-of-view scale |
//! | `DEFAULT_ASPECT` | 1.5 | Horizontal stretch for tall terminal glyphs |
//! | `DEFAULT_VIEW_DISTANCE` | 100.0 | Camera distance added to rotated Z |
//! | `DEFAULT_DENSITY` | 0.2 | Sweep step across each face |
//! | `FRAME_DELAY_MS` | 30 | Pause between ticks |
//!
//! # Examples
//!
//! ```
//! use tui_cube_types::{Angles, FaceId, Point3};
//!
//! let mut angles = Angles::ZERO;
//! angles.advance(Angles::new(0.05, 0.05, 0.01));
//! assert_eq!(angles, Angles::new(0.05, 0.05, 0.01));
//!
//! assert_eq!(FaceId::ALL.len(), 6);
//! assert_eq!(FaceId::Top.default_char(), '+');
//!
//! let p = Point3::new(1.0, 2.0, 3.0);
//! assert_eq!(p.get(tui_cube_types::Axis::Y), 2.0);
//! ```

/// Default display width in cells.
pub const DEFAULT_WIDTH: u16 = 90;

/// Default display height in cells.
pub const DEFAULT_HEIGHT: u16 = 44;

/// Field-of-view scale applied to projected coordinates.
pub const DEFAULT_FOV: f32 = 50.0;

/// Aspect-ratio correction (X only). Higher values make the solid wider.
pub const DEFAULT_ASPECT: f32 = 1.5;

/// Distance from the camera to the object's centre.
pub const DEFAULT_VIEW_DISTANCE: f32 = 100.0;

/// Sampling step across each face.
pub const DEFAULT_DENSITY: f32 = 0.2;

/// Character drawn where no surface lands.
pub const DEFAULT_BACKGROUND: char = ' ';

/// Per-tick rotation deltas (A, B, C) in radians.
pub const DEFAULT_DELTAS: Angles = Angles::new(0.05, 0.05, 0.01);

/// Pause between ticks in milliseconds.
pub const FRAME_DELAY_MS: u64 = 30;

/// A point in object or camera space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn get(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    #[inline]
    pub fn set(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
    }
}

/// One of the three object-space axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Rotation state in radians.
///
/// `a`, `b` and `c` are the angles about the first, second and third axis of the
/// combined rotation. They grow without bound; no wrapping is applied.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Angles {
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl Angles {
    pub const ZERO: Angles = Angles::new(0.0, 0.0, 0.0);

    pub const fn new(a: f32, b: f32, c: f32) -> Self {
        Self { a, b, c }
    }

    /// Add `delta` component-wise.
    #[inline]
    pub fn advance(&mut self, delta: Angles) {
        self.a += delta.a;
        self.b += delta.b;
        self.c += delta.c;
    }
}

/// Half-extents of a box (distance from centre to each pair of faces).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeDimensions {
    pub half_x: f32,
    pub half_y: f32,
    pub half_z: f32,
}

impl ShapeDimensions {
    pub const fn new(half_x: f32, half_y: f32, half_z: f32) -> Self {
        Self {
            half_x,
            half_y,
            half_z,
        }
    }

    pub const fn cube(half: f32) -> Self {
        Self::new(half, half, half)
    }

    #[inline]
    pub fn half(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.half_x,
            Axis::Y => self.half_y,
            Axis::Z => self.half_z,
        }
    }
}

/// The six faces of a box, in sweep order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceId {
    /// Facing -Z.
    Front,
    /// Facing +X.
    Right,
    /// Facing -X.
    Left,
    /// Facing +Z.
    Back,
    /// Facing -Y.
    Bottom,
    /// Facing +Y.
    Top,
}

impl FaceId {
    pub const ALL: [FaceId; 6] = [
        FaceId::Front,
        FaceId::Right,
        FaceId::Left,
        FaceId::Back,
        FaceId::Bottom,
        FaceId::Top,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Fill character used when a face carries no pattern grid.
    pub fn default_char(self) -> char {
        match self {
            FaceId::Front => '@',
            FaceId::Right => '$',
            FaceId::Left => '~',
            FaceId::Back => '#',
            FaceId::Bottom => ';',
            FaceId::Top => '+',
        }
    }
}

/// Viewer-level actions produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewerAction {
    NextShape,
    PrevShape,
    Quit,
}
