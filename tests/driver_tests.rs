use std::time::Duration;

use anyhow::Result;

use tui_cube::core::{
    CancelToken, Driver, FrameBuffer, FrameSink, RenderSettings, ShapeConfig, ShapePreset,
};
use tui_cube::term::PlainSink;
use tui_cube::types::Angles;

#[derive(Default)]
struct Recorder {
    frames: Vec<FrameBuffer>,
}

impl FrameSink for Recorder {
    fn present(&mut self, frame: &FrameBuffer) -> Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}

fn fast_settings() -> RenderSettings {
    RenderSettings {
        density: 0.5,
        frame_delay: Duration::ZERO,
        ..RenderSettings::shape()
    }
}

#[test]
fn angles_accumulate_per_tick() {
    let settings = fast_settings();
    let deltas = settings.deltas;
    assert_eq!(deltas, Angles::new(0.05, 0.05, 0.01));

    let mut driver = Driver::new(settings, ShapeConfig::regular_cube()).unwrap();
    let mut sink = Recorder::default();
    let n = 40;
    for _ in 0..n {
        driver.tick(&mut sink).unwrap();
    }

    let mut expected = Angles::ZERO;
    for _ in 0..n {
        expected.advance(deltas);
    }
    assert_eq!(driver.angles(), expected);
    assert_eq!(driver.ticks(), n);

    let a = driver.angles();
    assert!((a.a - n as f32 * 0.05).abs() < 1e-4);
    assert!((a.b - n as f32 * 0.05).abs() < 1e-4);
    assert!((a.c - n as f32 * 0.01).abs() < 1e-4);
}

#[test]
fn swapping_shape_never_rewrites_presented_frames() {
    let mut driver = Driver::new(fast_settings(), ShapeConfig::regular_cube()).unwrap();
    let mut sink = Recorder::default();

    driver.tick(&mut sink).unwrap();
    let first = sink.frames[0].clone();

    driver.set_shape(ShapeConfig::pizza_box());
    driver.tick(&mut sink).unwrap();

    assert_eq!(sink.frames.len(), 2);
    assert_eq!(sink.frames[0], first);
    assert_ne!(sink.frames[1], first);

    // The first frame is exactly the cube at the starting angles.
    let mut reference = Driver::new(fast_settings(), ShapeConfig::regular_cube()).unwrap();
    reference.render_frame();
    assert_eq!(reference.frame(), &first);
}

#[test]
fn rendering_is_deterministic() {
    let mut a = Driver::new(fast_settings(), ShapePreset::Box.config()).unwrap();
    let mut b = Driver::new(fast_settings(), ShapePreset::Box.config()).unwrap();
    let angles = Angles::new(0.7, 1.9, 0.3);
    a.set_angles(angles);
    b.set_angles(angles);
    a.render_frame();
    b.render_frame();
    assert_eq!(a.frame(), b.frame());
    assert_eq!(a.depth(), b.depth());
}

#[test]
fn every_drawn_cell_has_positive_depth() {
    let mut driver = Driver::new(fast_settings(), ShapeConfig::regular_cube()).unwrap();
    driver.set_angles(Angles::new(0.4, 0.8, 0.2));
    driver.render_frame();
    let background = driver.settings().background;
    for (ch, depth) in driver.frame().cells().iter().zip(driver.depth().values()) {
        if *ch == background {
            assert_eq!(*depth, 0.0);
        } else {
            assert!(*depth > 0.0);
        }
    }
}

#[test]
fn run_stops_when_cancelled_from_sink() {
    struct StopAfter {
        left: u32,
        cancel: CancelToken,
    }

    impl FrameSink for StopAfter {
        fn present(&mut self, _frame: &FrameBuffer) -> Result<()> {
            self.left -= 1;
            if self.left == 0 {
                self.cancel.cancel();
            }
            Ok(())
        }
    }

    let cancel = CancelToken::new();
    let mut sink = StopAfter {
        left: 5,
        cancel: cancel.clone(),
    };
    let mut driver = Driver::new(fast_settings(), ShapeConfig::regular_cube()).unwrap();
    let ran = driver.run(&mut sink, &cancel).unwrap();
    assert_eq!(ran, 5);
    assert!(cancel.is_cancelled());
}

#[test]
fn plain_sink_streams_every_frame() {
    let settings = RenderSettings {
        width: 30,
        height: 12,
        x_offset: 0.0,
        ..fast_settings()
    };
    let mut driver = Driver::new(settings, ShapeConfig::regular_cube()).unwrap();
    let mut sink = PlainSink::new(Vec::new());
    driver.tick(&mut sink).unwrap();
    driver.tick(&mut sink).unwrap();

    let out = String::from_utf8(sink.into_inner()).unwrap();
    let frames: Vec<&str> = out.split("\x1b[H").filter(|s| !s.is_empty()).collect();
    assert_eq!(frames.len(), 2);
    for frame in frames {
        assert_eq!(frame.chars().count(), 30 * 12);
        assert_eq!(frame.matches('\n').count(), 12);
    }
}

#[test]
fn classic_preset_uses_its_own_display() {
    let settings = ShapePreset::Classic.settings();
    let driver = Driver::new(settings, ShapePreset::Classic.config()).unwrap();
    assert_eq!(driver.frame().width(), 80);
    assert_eq!(driver.frame().height(), 44);
    assert_eq!(driver.depth().len(), 80 * 44);
}
