use std::time::Duration;

use tui_cube::core::{Driver, FrameBuffer, RenderSettings, ShapeConfig};
use tui_cube::term::{encode_diff_into, encode_full_into, encode_plain_into};
use tui_cube::types::Angles;

fn render(angles: Angles) -> FrameBuffer {
    let settings = RenderSettings {
        frame_delay: Duration::ZERO,
        ..RenderSettings::shape()
    };
    let mut driver = Driver::new(settings, ShapeConfig::regular_cube()).unwrap();
    driver.set_angles(angles);
    driver.render_frame();
    driver.frame().clone()
}

#[test]
fn full_redraw_contains_every_row() {
    let fb = render(Angles::new(0.3, 0.6, 0.1));
    let mut out = Vec::new();
    encode_full_into(&fb, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    for row in fb.rows() {
        let row: String = row.iter().collect();
        assert!(text.contains(&row));
    }
    assert_eq!(text.matches("\r\n").count(), fb.height() as usize - 1);
}

#[test]
fn identical_frames_produce_empty_diff() {
    let fb = render(Angles::new(1.0, 2.0, 3.0));
    let mut out = Vec::new();
    encode_diff_into(&fb, &fb, &mut out).unwrap();
    assert!(out.is_empty());
}

#[test]
fn diff_is_smaller_than_full_redraw_between_ticks() {
    let a = render(Angles::new(0.5, 0.5, 0.1));
    let b = render(Angles::new(0.55, 0.55, 0.11));
    assert_ne!(a, b);

    let mut full = Vec::new();
    encode_full_into(&b, &mut full).unwrap();
    let mut diff = Vec::new();
    encode_diff_into(&a, &b, &mut diff).unwrap();
    assert!(!diff.is_empty());
    assert!(diff.len() < full.len());
}

#[test]
fn plain_encoding_replaces_first_column() {
    let fb = render(Angles::ZERO);
    let mut out = Vec::new();
    encode_plain_into(&fb, &mut out);
    let text = String::from_utf8(out).unwrap();
    let body = text.strip_prefix("\x1b[H").unwrap();
    let w = fb.width() as usize;
    for (k, ch) in body.chars().enumerate() {
        if k % w == 0 {
            assert_eq!(ch, '\n');
        } else {
            assert_eq!(Some(ch), fb.get_linear(k));
        }
    }
}
