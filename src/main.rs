//! Terminal Snake runner (default binary).
//!
//! Runs the Input -> Step -> Render loop at a fixed tick, spending the time
//! between ticks waiting on terminal input. Drawing goes through the
//! framebuffer-based renderer in `tui_snake::term`.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use tui_snake::config::AppConfig;
use tui_snake::core::{run_tick, GameSession};
use tui_snake::input::TerminalInput;
use tui_snake::logging;
use tui_snake::term::{banner_text, Anchor, FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_snake::types::Outcome;

fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    logging::init(config.log_path.as_deref())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();

    let (outcome, score) = result?;
    println!("{} Score: {}", banner_text(outcome), score);
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<(Outcome, u32)> {
    let mut session = GameSession::new(config.game, config.seed);
    let mut input = TerminalInput::new();

    info!(
        width = config.game.width,
        height = config.game.height,
        wrap = config.game.wrap,
        seed = config.seed,
        "game started"
    );

    let view = GameView::default().with_anchor(Anchor::Center);
    let mut fb = FrameBuffer::new(0, 0);
    let tick = Duration::from_millis(u64::from(config.tick_ms));
    let mut last_tick = Instant::now();

    loop {
        draw(term, &view, &session, None, &mut fb)?;

        input.pump_until(last_tick + tick)?;
        last_tick = Instant::now();

        run_tick(&mut session, &mut input)?;
        if session.is_terminated() {
            break;
        }
    }

    let outcome = session.finish();
    info!(
        outcome = outcome.as_str(),
        score = session.score(),
        ticks = session.ticks(),
        length = session.snake().len(),
        "game finished"
    );

    draw(term, &view, &session, Some(outcome), &mut fb)?;
    if !input.quit_requested() {
        wait_for_key()?;
    }

    Ok((outcome, session.score()))
}

fn draw(
    term: &mut TerminalRenderer,
    view: &GameView,
    session: &GameSession,
    outcome: Option<Outcome>,
    fb: &mut FrameBuffer,
) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    view.render_into(session.snapshot(), outcome, Viewport::new(w, h), fb);
    term.draw_swap(fb)
}

/// Block until the next key press so the end banner stays visible.
fn wait_for_key() -> Result<()> {
    // Swallow keys that were already in flight when the game ended.
    let settle = Instant::now() + Duration::from_millis(300);
    while event::poll(settle.saturating_duration_since(Instant::now()))? {
        let _ = event::read()?;
    }

    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
