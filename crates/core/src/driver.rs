//! Frame driver: owns rotation state and buffers, runs the tick loop.
//!
//! One tick is: clear both buffers, rasterize the active shape, hand the frame to a
//! [`FrameSink`], advance the angles. The loop then waits for the frame delay. Ticks
//! never overlap and cancellation is only observed between them.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use crate::buffer::{DepthBuffer, FrameBuffer};
use crate::raster::{RasterStats, Rasterizer};
use crate::settings::RenderSettings;
use crate::shape::ShapeConfig;
use crate::types::Angles;

/// Receives each finished frame.
pub trait FrameSink {
    fn present(&mut self, frame: &FrameBuffer) -> Result<()>;
}

/// Shared stop flag, checked once before every tick.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

pub struct Driver {
    settings: RenderSettings,
    rasterizer: Rasterizer,
    shape: ShapeConfig,
    angles: Angles,
    frame: FrameBuffer,
    depth: DepthBuffer,
    ticks: u64,
}

impl Driver {
    /// Build a driver. Buffers are allocated here and reused for every tick.
    ///
    /// Fails on invalid settings or when the density is too fine for `shape`.
    pub fn new(settings: RenderSettings, shape: ShapeConfig) -> Result<Self> {
        settings.validate()?;
        let rasterizer = Rasterizer::new(&settings);
        rasterizer.check_shape(&shape)?;
        log::debug!(
            "driver: {}x{} display, density {}, view distance {}",
            settings.width,
            settings.height,
            settings.density,
            settings.view_distance
        );
        let mut frame = FrameBuffer::new(settings.width, settings.height);
        frame.clear(settings.background);
        Ok(Self {
            rasterizer,
            frame,
            depth: DepthBuffer::new(settings.width, settings.height),
            settings,
            shape,
            angles: Angles::ZERO,
            ticks: 0,
        })
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn shape(&self) -> &ShapeConfig {
        &self.shape
    }

    /// Swap the active shape. Takes effect from the next rendered frame.
    ///
    /// A shape the current density cannot sweep is rejected and the old one kept.
    pub fn set_shape(&mut self, shape: ShapeConfig) -> Result<()> {
        self.rasterizer.check_shape(&shape)?;
        log::debug!("driver: shape swapped at tick {}", self.ticks);
        self.shape = shape;
        Ok(())
    }

    pub fn angles(&self) -> Angles {
        self.angles
    }

    pub fn set_angles(&mut self, angles: Angles) {
        self.angles = angles;
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn depth(&self) -> &DepthBuffer {
        &self.depth
    }

    /// Completed ticks.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Clear both buffers and rasterize the active shape at the current angles.
    pub fn render_frame(&mut self) -> RasterStats {
        self.frame.clear(self.settings.background);
        self.depth.clear();
        self.rasterizer
            .draw_shape(&self.shape, self.angles, &mut self.frame, &mut self.depth)
    }

    /// Add the per-tick deltas to the angles.
    pub fn advance(&mut self) {
        self.angles.advance(self.settings.deltas);
    }

    /// Render, present and advance once.
    pub fn tick<S: FrameSink>(&mut self, sink: &mut S) -> Result<()> {
        let stats = self.render_frame();
        log::trace!(
            "tick {}: {} samples, {} in bounds, {} written",
            self.ticks,
            stats.samples,
            stats.in_bounds,
            stats.written
        );
        sink.present(&self.frame)?;
        self.advance();
        self.ticks += 1;
        Ok(())
    }

    /// Tick until `cancel` is set, sleeping the frame delay between ticks.
    ///
    /// Returns the number of ticks run by this call.
    pub fn run<S: FrameSink>(&mut self, sink: &mut S, cancel: &CancelToken) -> Result<u64> {
        self.run_with(sink, cancel, |_, delay| {
            std::thread::sleep(delay);
            Ok(())
        })
    }

    /// Tick until `cancel` is set, calling `wait` with the frame delay after each tick.
    ///
    /// `wait` gets the driver so it can swap shapes between frames (e.g. on key input).
    pub fn run_with<S, F>(&mut self, sink: &mut S, cancel: &CancelToken, mut wait: F) -> Result<u64>
    where
        S: FrameSink,
        F: FnMut(&mut Self, Duration) -> Result<()>,
    {
        let start = self.ticks;
        while !cancel.is_cancelled() {
            self.tick(sink)?;
            let delay = self.settings.frame_delay;
            wait(&mut *self, delay)?;
        }
        Ok(self.ticks - start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShapeDimensions;

    #[derive(Default)]
    struct Capture {
        frames: Vec<FrameBuffer>,
    }

    impl FrameSink for Capture {
        fn present(&mut self, frame: &FrameBuffer) -> Result<()> {
            self.frames.push(frame.clone());
            Ok(())
        }
    }

    struct Failing;

    impl FrameSink for Failing {
        fn present(&mut self, _frame: &FrameBuffer) -> Result<()> {
            anyhow::bail!("sink closed")
        }
    }

    fn small_settings() -> RenderSettings {
        RenderSettings {
            density: 1.0,
            frame_delay: Duration::ZERO,
            ..RenderSettings::shape()
        }
    }

    #[test]
    fn test_new_rejects_invalid_settings() {
        let settings = RenderSettings {
            width: 0,
            ..small_settings()
        };
        assert!(Driver::new(settings, ShapeConfig::regular_cube()).is_err());
    }

    #[test]
    fn test_new_rejects_density_too_fine_for_shape() {
        let settings = RenderSettings {
            density: 1e-7,
            ..small_settings()
        };
        settings.validate().unwrap();
        let err = Driver::new(settings, ShapeConfig::regular_cube())
            .err()
            .unwrap();
        assert!(err.to_string().contains("too fine"));
    }

    #[test]
    fn test_set_shape_keeps_old_shape_when_too_large() {
        let mut d = Driver::new(small_settings(), ShapeConfig::regular_cube()).unwrap();
        // density 1.0: a half extent of 40000 needs 80000 steps.
        let huge = ShapeConfig::solid(ShapeDimensions::cube(40_000.0)).unwrap();
        assert!(d.set_shape(huge).is_err());
        assert_eq!(d.shape(), &ShapeConfig::regular_cube());

        let mut sink = Capture::default();
        d.tick(&mut sink).unwrap();
        assert_eq!(sink.frames.len(), 1);
    }

    #[test]
    fn test_tick_presents_then_advances() {
        let mut d = Driver::new(small_settings(), ShapeConfig::regular_cube()).unwrap();
        let mut sink = Capture::default();
        d.tick(&mut sink).unwrap();
        assert_eq!(sink.frames.len(), 1);
        assert_eq!(d.ticks(), 1);
        assert_eq!(d.angles(), Angles::new(0.05, 0.05, 0.01));
        assert!(sink.frames[0].count_not(' ') > 0);
    }

    #[test]
    fn test_render_frame_clears_previous_content() {
        let mut d = Driver::new(small_settings(), ShapeConfig::regular_cube()).unwrap();
        d.render_frame();
        let tiny = ShapeConfig::solid(ShapeDimensions::cube(1.0)).unwrap();
        d.set_shape(tiny).unwrap();
        d.render_frame();
        let big = Driver::new(small_settings(), ShapeConfig::regular_cube())
            .map(|mut d| {
                d.render_frame();
                d.frame().count_not(' ')
            })
            .unwrap();
        assert!(d.frame().count_not(' ') < big);
    }

    #[test]
    fn test_failing_sink_stops_before_advancing() {
        let mut d = Driver::new(small_settings(), ShapeConfig::regular_cube()).unwrap();
        assert!(d.tick(&mut Failing).is_err());
        assert_eq!(d.ticks(), 0);
        assert_eq!(d.angles(), Angles::ZERO);
    }

    #[test]
    fn test_pre_cancelled_run_does_nothing() {
        let mut d = Driver::new(small_settings(), ShapeConfig::regular_cube()).unwrap();
        let cancel = CancelToken::new();
        cancel.cancel();
        let mut sink = Capture::default();
        assert_eq!(d.run(&mut sink, &cancel).unwrap(), 0);
        assert!(sink.frames.is_empty());
    }

    #[test]
    fn test_run_with_cancels_between_ticks() {
        let mut d = Driver::new(small_settings(), ShapeConfig::regular_cube()).unwrap();
        let cancel = CancelToken::new();
        let mut sink = Capture::default();
        let mut waits = Vec::new();
        let ran = d
            .run_with(&mut sink, &cancel, |driver, delay| {
                waits.push(delay);
                if driver.ticks() == 3 {
                    cancel.cancel();
                }
                Ok(())
            })
            .unwrap();
        assert_eq!(ran, 3);
        assert_eq!(sink.frames.len(), 3);
        assert_eq!(waits, vec![Duration::ZERO; 3]);
    }
}
