//! Rotating box viewer (default binary).
//!
//! Renders the active shape with the software pipeline in `tui_cube::core` and shows it
//! either on the alternate screen (crossterm, diffed redraws) or as plain frames on stdout.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_cube::args::{parse_args, USAGE};
use tui_cube::core::{check_density, CancelToken, Driver, FrameSink, ShapePreset};
use tui_cube::input::handle_key_event;
use tui_cube::term::{PlainSink, TerminalRenderer};
use tui_cube::types::ViewerAction;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_args(&argv)?;
    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let mut driver = Driver::new(args.settings(), args.shape.config())?;
    log::info!(
        "starting: shape {}, {}x{}",
        args.shape.as_str(),
        driver.settings().width,
        driver.settings().height
    );

    let frames = if args.plain {
        let mut sink = PlainSink::new(io::stdout().lock());
        sink.begin()?;
        run_plain(&mut driver, &mut sink, args.frames)?
    } else {
        // Every preset reachable by key must fit the density before the screen is taken.
        for preset in ShapePreset::ALL {
            check_density(driver.settings().density, preset.config().dimensions())?;
        }

        let mut term = TerminalRenderer::new();
        term.enter()?;

        let result = run_interactive(&mut driver, &mut term, args.shape, args.frames);

        // Always try to restore terminal state.
        let _ = term.exit();
        result?
    };

    log::info!("stopped after {} frames", frames);
    Ok(())
}

fn frame_limit_reached(driver: &Driver, limit: Option<u64>) -> bool {
    limit.is_some_and(|n| driver.ticks() >= n)
}

fn run_plain<S: FrameSink>(driver: &mut Driver, sink: &mut S, limit: Option<u64>) -> Result<u64> {
    let cancel = CancelToken::new();
    if limit == Some(0) {
        return Ok(0);
    }
    driver.run_with(sink, &cancel, |driver, delay| {
        if frame_limit_reached(driver, limit) {
            cancel.cancel();
        } else {
            std::thread::sleep(delay);
        }
        Ok(())
    })
}

fn run_interactive(
    driver: &mut Driver,
    term: &mut TerminalRenderer,
    first: ShapePreset,
    limit: Option<u64>,
) -> Result<u64> {
    let cancel = CancelToken::new();
    if limit == Some(0) {
        return Ok(0);
    }
    let mut preset = first;

    driver.run_with(term, &cancel, |driver, delay| {
        if frame_limit_reached(driver, limit) {
            cancel.cancel();
            return Ok(());
        }

        // Input with timeout until the next frame.
        let deadline = Instant::now() + delay;
        loop {
            let timeout = deadline
                .checked_duration_since(Instant::now())
                .unwrap_or(Duration::ZERO);
            if !event::poll(timeout)? {
                return Ok(());
            }

            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match handle_key_event(key) {
                Some(ViewerAction::Quit) => {
                    cancel.cancel();
                    return Ok(());
                }
                Some(ViewerAction::NextShape) => {
                    preset = preset.next();
                    log::debug!("shape: {}", preset.as_str());
                    driver.set_shape(preset.config())?;
                }
                Some(ViewerAction::PrevShape) => {
                    preset = preset.prev();
                    log::debug!("shape: {}", preset.as_str());
                    driver.set_shape(preset.config())?;
                }
                None => {}
            }
        }
    })
}
