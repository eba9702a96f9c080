//! Core rendering pipeline - pure, deterministic, and testable
//!
//! Turns a box description into a character frame. There is no terminal I/O here;
//! finished frames leave through the [`FrameSink`] trait.
//!
//! # Module Structure
//!
//! - [`rotate`]: combined three-axis rotation
//! - [`project`]: perspective projection to integer screen cells
//! - [`shape`]: face patterns, shape configurations and the built-in presets
//! - [`buffer`]: character frame and inverse-depth buffers
//! - [`raster`]: face sweep table, per-sample pipeline and depth test
//! - [`settings`]: display, projection and pacing constants
//! - [`driver`]: buffer lifecycle and the tick loop
//!
//! # Pipeline
//!
//! For each face, for each sample on that face:
//!
//! 1. Rotate the object-space point by the current [`Angles`](types::Angles)
//! 2. Add the view distance to Z and take `invz = 1/z`
//! 3. Project X and Y to a screen column and row (truncating)
//! 4. Write the face character if the cell is in range and `invz` beats the stored value
//!
//! # Example
//!
//! ```
//! use tui_cube_core::{Driver, RenderSettings, ShapeConfig};
//!
//! let mut driver = Driver::new(RenderSettings::shape(), ShapeConfig::regular_cube()).unwrap();
//! driver.render_frame();
//! assert!(driver.frame().count_not(' ') > 0);
//!
//! driver.advance();
//! assert_eq!(driver.angles().a, 0.05);
//! ```

pub mod buffer;
pub mod driver;
pub mod project;
pub mod raster;
pub mod rotate;
pub mod settings;
pub mod shape;

pub use tui_cube_types as types;

pub use buffer::{DepthBuffer, FrameBuffer};
pub use driver::{CancelToken, Driver, FrameSink};
pub use project::Projector;
pub use raster::{
    check_density, depth_write, linear_index, FaceSweep, Plot, RasterStats, Rasterizer,
    FACE_TABLE, MAX_STEPS_PER_AXIS,
};
pub use rotate::{rotate, Rotation};
pub use settings::RenderSettings;
pub use shape::{FacePattern, ShapeConfig, ShapePreset};
