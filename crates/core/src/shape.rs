//! Shape configuration: box extents plus one character pattern per face.

use anyhow::{bail, Result};

use crate::settings::RenderSettings;
use crate::types::{FaceId, ShapeDimensions};

/// Characters shown on one face.
///
/// Either a solid fill, or a grid of `width` x `height` characters sampled with
/// normalized face coordinates. Grid rows may be shorter than `width` and there may be
/// fewer rows than `height`; missing cells read as spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacePattern {
    grid: Option<Vec<Box<[char]>>>,
    width: usize,
    height: usize,
    fill: char,
}

impl FacePattern {
    /// A face drawn with a single character.
    pub fn solid(fill: char) -> Self {
        Self {
            grid: None,
            width: 1,
            height: 1,
            fill,
        }
    }

    /// A face drawn from `rows`, sampled over a declared `width` x `height` window.
    pub fn grid(rows: &[&str], width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            bail!("face pattern must be at least 1x1 (got {}x{})", width, height);
        }
        let grid = rows
            .iter()
            .map(|row| row.chars().collect::<Vec<_>>().into_boxed_slice())
            .collect();
        Ok(Self {
            grid: Some(grid),
            width,
            height,
            fill: ' ',
        })
    }

    /// A face drawn from `rows`, sized to the widest row.
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        Self::grid(rows, width, rows.len())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn has_grid(&self) -> bool {
        self.grid.is_some()
    }

    /// Clamped grid cell for face coordinates `(u, v)` in `[0, 1]`.
    ///
    /// Returns `None` for solid faces.
    #[inline]
    pub fn cell_index(&self, u: f32, v: f32) -> Option<(usize, usize)> {
        self.grid.as_ref()?;
        Some((clamp_index(u, self.width), clamp_index(v, self.height)))
    }

    /// Character at face coordinates `(u, v)`.
    #[inline]
    pub fn sample(&self, u: f32, v: f32) -> char {
        let Some(grid) = &self.grid else {
            return self.fill;
        };
        let x = clamp_index(u, self.width);
        let y = clamp_index(v, self.height);
        grid.get(y).and_then(|row| row.get(x)).copied().unwrap_or(' ')
    }
}

#[inline(always)]
fn clamp_index(t: f32, extent: usize) -> usize {
    let max = extent.saturating_sub(1);
    // Truncate first, then clamp (NaN truncates to 0).
    let i = (t * max as f32) as i64;
    i.clamp(0, max as i64) as usize
}

/// A box: half-extents plus the six face patterns in [`FaceId`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeConfig {
    dimensions: ShapeDimensions,
    faces: [FacePattern; 6],
}

impl ShapeConfig {
    pub fn new(dimensions: ShapeDimensions, faces: [FacePattern; 6]) -> Result<Self> {
        for (name, half) in [
            ("half_x", dimensions.half_x),
            ("half_y", dimensions.half_y),
            ("half_z", dimensions.half_z),
        ] {
            if !half.is_finite() || half <= 0.0 {
                bail!("{} must be positive and finite (got {})", name, half);
            }
        }
        Ok(Self { dimensions, faces })
    }

    /// A box whose faces all use their default characters.
    pub fn solid(dimensions: ShapeDimensions) -> Result<Self> {
        Self::new(dimensions, FaceId::ALL.map(|f| FacePattern::solid(f.default_char())))
    }

    /// Replace one face's pattern.
    pub fn with_face(mut self, face: FaceId, pattern: FacePattern) -> Self {
        self.faces[face.index()] = pattern;
        self
    }

    pub fn dimensions(&self) -> ShapeDimensions {
        self.dimensions
    }

    pub fn face(&self, face: FaceId) -> &FacePattern {
        &self.faces[face.index()]
    }

    /// 40-unit cube, default characters on every face.
    pub fn regular_cube() -> Self {
        Self {
            dimensions: ShapeDimensions::cube(20.0),
            faces: FaceId::ALL.map(|f| FacePattern::solid(f.default_char())),
        }
    }

    /// Flat box with blank sides and a pizza drawn on top.
    pub fn pizza_box() -> Self {
        let blank = FacePattern::solid(' ');
        let mut faces = FaceId::ALL.map(|_| blank.clone());
        faces[FaceId::Top.index()] = pattern_asset(PIZZA, 33, 16);
        Self {
            dimensions: ShapeDimensions::new(20.0, 2.0, 20.0),
            faces,
        }
    }

    /// Wide, shallow box labelled on the front and back.
    pub fn rectangular_box() -> Self {
        Self {
            dimensions: ShapeDimensions::new(25.0, 15.0, 8.0),
            faces: FaceId::ALL.map(|f| FacePattern::solid(f.default_char())),
        }
        .with_face(FaceId::Front, pattern_asset(&["  FRONT  "], 9, 1))
        .with_face(FaceId::Back, pattern_asset(&["  BACK   "], 9, 1))
    }

    /// The fixed-character cube.
    pub fn classic_cube() -> Self {
        Self::regular_cube()
    }
}

// Built-in assets have non-zero sizes.
fn pattern_asset(rows: &[&str], width: usize, height: usize) -> FacePattern {
    FacePattern {
        grid: Some(
            rows.iter()
                .map(|row| row.chars().collect::<Vec<_>>().into_boxed_slice())
                .collect(),
        ),
        width,
        height,
        fill: ' ',
    }
}

const PIZZA: &[&str] = &[
    "          .###########.          ",
    "       .##################.      ",
    "     .######################.    ",
    "   .##########################.  ",
    "  .############################. ",
    " .##############################.",
    ".#####O########O######O#########.",
    ".##############################. ",
    ".####O#########O######O#######.  ",
    ".###########################.    ",
    " .#####O######O######O#####.     ",
    "  .#######################.      ",
    "   .##O#######O######O##.        ",
    "     .#################.         ",
    "       .#############.           ",
    "          .#######.              ",
];

/// Built-in shapes selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapePreset {
    Cube,
    Pizza,
    Box,
    Classic,
}

impl ShapePreset {
    pub const ALL: [ShapePreset; 4] = [
        ShapePreset::Cube,
        ShapePreset::Pizza,
        ShapePreset::Box,
        ShapePreset::Classic,
    ];

    /// Parse from a CLI string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "cube" => Some(ShapePreset::Cube),
            "pizza" | "pizza-box" => Some(ShapePreset::Pizza),
            "box" | "rect" | "rectangular-box" => Some(ShapePreset::Box),
            "classic" => Some(ShapePreset::Classic),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShapePreset::Cube => "cube",
            ShapePreset::Pizza => "pizza",
            ShapePreset::Box => "box",
            ShapePreset::Classic => "classic",
        }
    }

    pub fn config(self) -> ShapeConfig {
        match self {
            ShapePreset::Cube => ShapeConfig::regular_cube(),
            ShapePreset::Pizza => ShapeConfig::pizza_box(),
            ShapePreset::Box => ShapeConfig::rectangular_box(),
            ShapePreset::Classic => ShapeConfig::classic_cube(),
        }
    }

    /// Display settings the preset was designed for.
    pub fn settings(self) -> RenderSettings {
        match self {
            ShapePreset::Classic => RenderSettings::classic(),
            _ => RenderSettings::shape(),
        }
    }

    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|&p| p == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|&p| p == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
