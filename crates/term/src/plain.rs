//! Plain text sink: cursor-home plus raw rows, no alternate screen or raw mode.
//!
//! The stream matches the classic donut-style output: `ESC[H`, then one character per
//! cell where every row's first cell is replaced by a newline.

use std::io::Write;

use anyhow::Result;

use crate::core::{FrameBuffer, FrameSink};

const CLEAR_SCREEN: &[u8] = b"\x1b[2J";
const CURSOR_HOME: &[u8] = b"\x1b[H";

pub struct PlainSink<W: Write> {
    out: W,
    buf: Vec<u8>,
}

impl<W: Write> PlainSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Clear the screen once before the first frame.
    pub fn begin(&mut self) -> Result<()> {
        self.out.write_all(CLEAR_SCREEN)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Encode one frame into `out` (appending).
pub fn encode_plain_into(fb: &FrameBuffer, out: &mut Vec<u8>) {
    out.extend_from_slice(CURSOR_HOME);
    let width = fb.width().max(1) as usize;
    let mut utf8 = [0u8; 4];
    for (k, &ch) in fb.cells().iter().enumerate() {
        let ch = if k % width == 0 { '\n' } else { ch };
        out.extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
    }
}

impl<W: Write> FrameSink for PlainSink<W> {
    fn present(&mut self, frame: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_plain_into(frame, &mut self.buf);
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_column_becomes_newline() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.clear('#');
        let mut out = Vec::new();
        encode_plain_into(&fb, &mut out);
        assert_eq!(out, b"\x1b[H\n##\n##".to_vec());
    }

    #[test]
    fn sink_writes_each_frame() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.set(1, 0, 'é');
        let mut sink = PlainSink::new(Vec::new());
        sink.begin().unwrap();
        sink.present(&fb).unwrap();
        sink.present(&fb).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text, "\x1b[2J\x1b[H\né\x1b[H\né");
    }
}
