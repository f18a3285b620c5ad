//! Terminal 2048 runner (default binary).
//!
//! Reads keys and mouse drags with crossterm, feeds resolved directions to
//! the session, and redraws after every event. There is no tick: the board
//! only changes on input.

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use grow_2048::core::{GameSnapshot, SeededRng, Session};
use grow_2048::input::{handle_key_event, should_quit, SwipeTracker};
use grow_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use grow_2048::types::GameAction;
use grow_2048::Config;

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::from_env().context("load configuration")?;
    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!("starting with seed {}", seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, seed);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        log::warn!("failed to restore terminal: {:#}", err);
    }
    if let Err(err) = &result {
        log::error!("{:#}", err);
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &Config, seed: u64) -> Result<()> {
    let mut session = Session::new(SeededRng::new(seed));
    let view = GameView::new(config.cell_width, config.cell_height);
    let mut swipes = SwipeTracker::new(config.min_swipe);

    let mut snap = GameSnapshot::default();
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);
    let mut fb = FrameBuffer::new(w, h);

    loop {
        session.snapshot_into(&mut snap);
        view.render_into(&snap, viewport, &mut fb);
        term.draw(&fb)?;

        let action = match event::read().context("read terminal event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    log::info!("quit with score {}", session.score());
                    return Ok(());
                }
                handle_key_event(key)
            }
            Event::Mouse(mouse) => swipes.handle_mouse(mouse).map(GameAction::Move),
            Event::Resize(w, h) => {
                viewport = Viewport::new(w, h);
                term.invalidate();
                None
            }
            _ => None,
        };

        if let Some(action) = action {
            session.apply_action(action);
        }
    }
}
