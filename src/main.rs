//! Tetrominoes runner (default binary).
//!
//! Without arguments this plays in the terminal: a ticker thread drives
//! gravity while the main thread reads keys and renders. `headless` plays
//! random commands and prints the final snapshot as JSON.

use std::fs::File;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tetrominoes::config::{parse_headless_args, RunConfig};
use tetrominoes::engine::{SharedSession, Snapshot};
use tetrominoes::headless;
use tetrominoes::input::{handle_key_event, should_quit};
use tetrominoes::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tetrominoes::types::Command;

const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let mut config = RunConfig::from_env();
    init_logging(&config)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Some(headless_config) = parse_headless_args(&args)? {
        if headless_config.seed.is_some() {
            config.seed = headless_config.seed;
        }
        let mut session = config.session()?;
        let mut rng = headless::command_rng(config.seed);
        let snap = headless::play(&mut session, headless_config.max_pieces, &mut rng)?;
        println!("{}", serde_json::to_string(&snap)?);
        return Ok(());
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(config: &RunConfig) -> Result<()> {
    // The terminal owns stdout, so logs only go to a file when asked for.
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &RunConfig) -> Result<()> {
    let session = SharedSession::new(config.session()?);
    session.apply(Command::Start)?;
    info!(tick_ms = config.tick_ms, seed = ?config.seed, "session started");

    let stop = Arc::new(AtomicBool::new(false));
    let ticker = spawn_ticker(session.clone(), config.tick(), Arc::clone(&stop));

    let result = input_loop(term, &session);

    stop.store(true, Ordering::Relaxed);
    let _ = ticker.join();
    result
}

fn spawn_ticker(
    session: SharedSession,
    interval: Duration,
    stop: Arc<AtomicBool>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        while !stop.load(Ordering::Relaxed) {
            thread::sleep(interval);
            if let Err(err) = session.apply(Command::Tick) {
                error!(%err, "tick failed");
                return;
            }
        }
    })
}

fn input_loop(term: &mut TerminalRenderer, session: &SharedSession) -> Result<()> {
    let view = GameView::default();
    let mut snap = Snapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        session.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        if !event::poll(FRAME)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if should_quit(key) {
                return Ok(());
            }
            if let Some(command) = handle_key_event(key) {
                session.apply(command)?;
            }
        }
    }
}
