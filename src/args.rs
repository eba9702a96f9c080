//! Command-line arguments for the `tui-cube` binary.

use anyhow::{anyhow, Result};

use crate::core::{RenderSettings, ShapePreset};

pub const USAGE: &str = "\
usage: tui-cube [--shape cube|pizza|box|classic] [--frames N] [--plain]

  --shape NAME   shape to show first (default: pizza)
  --frames N     stop after N frames
  --plain        write plain frames to stdout instead of the alternate screen

keys: n/tab/right next shape, p/backtab/left previous shape, q/esc/ctrl-c quit
env:  TUI_CUBE_WIDTH, TUI_CUBE_HEIGHT, TUI_CUBE_DENSITY, TUI_CUBE_FOV,
      TUI_CUBE_DISTANCE, TUI_CUBE_DELAY_MS, RUST_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub shape: ShapePreset,
    pub frames: Option<u64>,
    pub plain: bool,
    pub help: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            shape: ShapePreset::Pizza,
            frames: None,
            plain: false,
            help: false,
        }
    }
}

impl Args {
    /// Settings for the chosen shape, with environment overrides applied.
    pub fn settings(&self) -> RenderSettings {
        self.shape.settings().with_env()
    }
}

/// Parse arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<Args> {
    let mut parsed = Args::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--shape" | "-s" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --shape"))?;
                parsed.shape =
                    ShapePreset::from_str(v).ok_or_else(|| anyhow!("unknown shape: {}", v))?;
            }
            "--frames" | "-n" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --frames"))?;
                let n = v
                    .parse::<u64>()
                    .map_err(|_| anyhow!("invalid --frames value: {}", v))?;
                parsed.frames = Some(n);
            }
            "--plain" => parsed.plain = true,
            "--help" | "-h" => parsed.help = true,
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(parsed)
}
