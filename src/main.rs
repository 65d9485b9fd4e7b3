//! Terminal Connect Four runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from
//! `connect_four::term`. Logs go to `CONNECT4_LOG_PATH` when set, since the
//! terminal itself belongs to the UI.

use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use connect_four::core::AppConfig;
use connect_four::term::{FrameBuffer, RenderThrottle, TerminalRenderer, Viewport};
use connect_four::types::TICK_MS;
use connect_four::App;

/// Redraw interval for screens that only change on input.
const STATIC_REDRAW_MS: u64 = 250;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_logging(&config)?;
    info!(
        rows = config.settings.rows,
        cols = config.settings.cols,
        "starting"
    );

    let mut app = App::new(&config);
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();
    result?;

    for entry in app.session().history().entries() {
        println!("{}", serde_json::to_string(entry)?);
    }
    info!(games = app.session().history().len(), "exiting");
    Ok(())
}

fn init_logging(config: &AppConfig) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {path}"))?;
    let filter =
        EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, app: &mut App) -> Result<()> {
    let started = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();
    let mut fb = FrameBuffer::new(0, 0);
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        app.render_into(Viewport::new(w, h), &mut fb);
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, fb.fingerprint(), !app.is_animating()) {
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                // Ignore terminal auto-repeat and releases.
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Resize(_, _) => {
                    term.invalidate();
                    throttle.reset();
                }
                _ => {}
            }
            if app.should_quit() {
                return Ok(());
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            app.tick(TICK_MS);
        }
    }
}
