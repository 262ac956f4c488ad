//! Terminal runner (default binary).
//!
//! Reads settings from `BLOCKFALL_*` environment variables, then runs the
//! engine at a fixed frame rate: render, poll input until the next frame,
//! feed elapsed time to the gravity timer.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};

use blockfall::config::AppConfig;
use blockfall::core::{GameState, SimpleRng};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::session_log::{LogRecord, SessionLog};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::FRAME_MS;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    config.validate().context("invalid BLOCKFALL_* settings")?;

    let mut log = SessionLog::from_path(config.log_path.as_deref())?;
    log.record(&LogRecord::start(&config))?;

    let mut game = GameState::new(config.game, SimpleRng::new(config.seed));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, &mut log);

    // Always try to restore terminal state.
    let _ = term.exit();

    log.record(&LogRecord::Quit {
        pieces: game.piece_id(),
        episodes: game.episode_id(),
    })?;
    log.flush()?;

    eprintln!(
        "blockfall: seed {} | {} pieces | {} game overs",
        config.seed,
        game.piece_id(),
        game.episode_id()
    );
    if let Some(path) = &config.log_path {
        eprintln!("blockfall: session log written to {path}");
    }
    result
}

fn run(term: &mut TerminalRenderer, game: &mut GameState, log: &mut SessionLog) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(game, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next frame.
        let timeout = frame.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        let episode = game.episode_id();
                        game.apply_action(action);
                        record_lock(game, episode, log)?;
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity.
        let elapsed = last_tick.elapsed();
        if elapsed >= frame {
            last_tick = Instant::now();
            let episode = game.episode_id();
            game.tick(elapsed.as_millis().min(u32::MAX as u128) as u32);
            record_lock(game, episode, log)?;
        }
    }
}

/// Log the lock that just happened, if any. `episode` is the id before the
/// call, since a game over bumps it.
fn record_lock(game: &mut GameState, episode: u32, log: &mut SessionLog) -> Result<()> {
    if let Some(event) = game.take_last_event() {
        log.record(&LogRecord::lock(episode, &event))?;
    }
    Ok(())
}
