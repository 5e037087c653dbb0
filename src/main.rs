//! Terminal Plaintris runner (default binary).
//!
//! Owns the clock and the keyboard; the engine only sees `tick()` and movement calls.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use plaintris::config::HostConfig;
use plaintris::core::{Events, GameEngine, GameSnapshot};
use plaintris::input::{handle_key_event, should_quit};
use plaintris::term::TerminalRenderer;
use plaintris::types::{GameAction, GameEvent};

fn main() -> Result<()> {
    let config = HostConfig::from_env()?;
    let _guard = setup_logging(&config)?;

    let seed = config.seed.unwrap_or_else(clock_seed);
    tracing::info!(seed, tick_ms = config.tick_ms, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to a file only; the terminal belongs to the renderer.
fn setup_logging(config: &HostConfig) -> Result<WorkerGuard> {
    std::fs::create_dir_all(&config.log_dir)
        .with_context(|| format!("creating log dir {}", config.log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&config.log_dir, "plaintris.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    Ok(guard)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, config: &HostConfig, seed: u64) -> Result<()> {
    let mut engine = GameEngine::with_seed(seed);
    let mut snapshot = GameSnapshot::default();
    let mut pieces: u32 = 1;

    let tick_duration = Duration::from_millis(config.tick_ms);
    let mut last_tick = Instant::now();

    loop {
        engine.snapshot_into(&mut snapshot);
        term.draw(&snapshot)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        tracing::info!(score = engine.score(), pieces, "quit");
                        return Ok(());
                    }

                    if let Some(action) = handle_key_event(key) {
                        if action == GameAction::Reset {
                            pieces = 0;
                        }
                        let events = engine.apply_action(action);
                        track(&events, &engine, &mut pieces);
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            let events = engine.tick();
            track(&events, &engine, &mut pieces);
        }
    }
}

fn track(events: &Events, engine: &GameEngine, pieces: &mut u32) {
    for event in events {
        match event {
            GameEvent::PieceSpawned { .. } => *pieces += 1,
            GameEvent::PieceLocked { lines_cleared } if *lines_cleared > 0 => {
                tracing::debug!(lines_cleared, total = engine.lines_cleared(), "clear");
            }
            GameEvent::GameOver => {
                tracing::info!(score = engine.score(), pieces = *pieces, "game finished");
            }
            _ => {}
        }
    }
}
