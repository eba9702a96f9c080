//! Render settings: every constant the pipeline consumes.

use std::time::Duration;

use anyhow::{bail, Result};

use crate::types::{
    Angles, DEFAULT_ASPECT, DEFAULT_BACKGROUND, DEFAULT_DELTAS, DEFAULT_DENSITY, DEFAULT_FOV,
    DEFAULT_HEIGHT, DEFAULT_VIEW_DISTANCE, DEFAULT_WIDTH, FRAME_DELAY_MS,
};

/// Display, projection, sweep and pacing parameters.
///
/// Fixed once a [`crate::Driver`] is built; buffers are sized from `width`/`height`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub width: u16,
    pub height: u16,
    pub fov: f32,
    pub aspect: f32,
    pub view_distance: f32,
    pub x_offset: f32,
    pub y_offset: f32,
    pub density: f32,
    pub background: char,
    pub deltas: Angles,
    pub frame_delay: Duration,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self::shape()
    }
}

impl RenderSettings {
    /// Settings for the configurable-shape viewer.
    pub fn shape() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fov: DEFAULT_FOV,
            aspect: DEFAULT_ASPECT,
            view_distance: DEFAULT_VIEW_DISTANCE,
            x_offset: -10.0,
            y_offset: 0.0,
            density: DEFAULT_DENSITY,
            background: DEFAULT_BACKGROUND,
            deltas: DEFAULT_DELTAS,
            frame_delay: Duration::from_millis(FRAME_DELAY_MS),
        }
    }

    /// Settings for the fixed-character cube: narrower display, camera further back.
    pub fn classic() -> Self {
        Self {
            width: 80,
            view_distance: 150.0,
            x_offset: 5.0,
            ..Self::shape()
        }
    }

    /// Apply environment overrides on top of `self`.
    ///
    /// Unset or unparsable variables leave the field unchanged.
    pub fn with_env(mut self) -> Self {
        fn parse<T: std::str::FromStr>(name: &str) -> Option<T> {
            std::env::var(name).ok().and_then(|s| s.trim().parse().ok())
        }

        if let Some(w) = parse("TUI_CUBE_WIDTH") {
            self.width = w;
        }
        if let Some(h) = parse("TUI_CUBE_HEIGHT") {
            self.height = h;
        }
        if let Some(d) = parse("TUI_CUBE_DENSITY") {
            self.density = d;
        }
        if let Some(f) = parse("TUI_CUBE_FOV") {
            self.fov = f;
        }
        if let Some(d) = parse("TUI_CUBE_DISTANCE") {
            self.view_distance = d;
        }
        if let Some(ms) = parse::<u64>("TUI_CUBE_DELAY_MS") {
            self.frame_delay = Duration::from_millis(ms);
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            bail!(
                "display must be at least 1x1 (got {}x{})",
                self.width,
                self.height
            );
        }
        if !self.density.is_finite() || self.density <= 0.0 {
            bail!("density must be a positive finite step (got {})", self.density);
        }
        let fields = [
            ("fov", self.fov),
            ("aspect", self.aspect),
            ("view_distance", self.view_distance),
            ("x_offset", self.x_offset),
            ("y_offset", self.y_offset),
            ("delta a", self.deltas.a),
            ("delta b", self.deltas.b),
            ("delta c", self.deltas.c),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                bail!("{} must be finite (got {})", name, value);
            }
        }
        Ok(())
    }
}
