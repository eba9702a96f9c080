//! Character and depth buffers.
//!
//! Both are flat row-major grids addressed by `column + row * width`.

/// 2D grid of characters, one per screen cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<char>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![' '; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<char> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, ch: char) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = ch;
        }
    }

    #[inline]
    pub fn get_linear(&self, index: usize) -> Option<char> {
        self.cells.get(index).copied()
    }

    #[inline]
    pub(crate) fn set_linear(&mut self, index: usize, ch: char) {
        self.cells[index] = ch;
    }

    pub fn clear(&mut self, ch: char) {
        self.cells.fill(ch);
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        // chunks_exact(0) panics; an empty buffer has no rows anyway.
        self.cells.chunks_exact(self.width.max(1) as usize)
    }

    /// Number of cells not equal to `background`.
    pub fn count_not(&self, background: char) -> usize {
        self.cells.iter().filter(|&&c| c != background).count()
    }

    /// Render rows joined by `'\n'` (no trailing newline).
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(row.iter());
        }
        out
    }
}

/// Inverse-depth buffer. `0.0` means nothing has been drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthBuffer {
    width: u16,
    height: u16,
    values: Vec<f32>,
}

impl DepthBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            values: vec![0.0; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    #[inline]
    pub fn get_linear(&self, index: usize) -> Option<f32> {
        self.values.get(index).copied()
    }

    pub fn get(&self, x: u16, y: u16) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.get_linear((y as usize) * (self.width as usize) + (x as usize))
    }

    #[inline]
    pub(crate) fn set_linear(&mut self, index: usize, invz: f32) {
        self.values[index] = invz;
    }

    pub fn clear(&mut self) {
        self.values.fill(0.0);
    }
}
