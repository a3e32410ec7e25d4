//! Terminal 2048 runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `tui_2048::term`.
//! The engine resolves each move instantly; the slide animation is replayed
//! afterwards from the move's movement records.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use tui_2048::config::AppConfig;
use tui_2048::core::{BoardEngine, GameSnapshot, RandRng, TileRng};
use tui_2048::input::{accept_action, handle_key_event, should_quit};
use tui_2048::logging;
use tui_2048::term::{FrameBuffer, GameView, SlideAnimation, TerminalRenderer, Viewport, FRAME_MS};
use tui_2048::types::GameAction;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(&config)?;

    let mut rng = match config.seed {
        Some(seed) => RandRng::seeded(seed),
        None => RandRng::from_entropy(),
    };
    info!(seed = ?config.seed, animate = config.animate, "starting tui-2048");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &mut rng);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig, rng: &mut impl TileRng) -> Result<()> {
    let mut engine = BoardEngine::new(rng);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut animation: Option<SlideAnimation> = None;
    let frame = Duration::from_millis(FRAME_MS);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        engine.snapshot_into(&mut snap);
        match animation.as_ref() {
            Some(anim) => view.render_animated_into(&snap, anim, viewport, &mut fb),
            None => view.render_into(&snap, viewport, &mut fb),
        }
        term.draw(&fb)?;

        if let Some(anim) = animation.as_mut() {
            if anim.advance() {
                animation = None;
            }
        }

        // Poll briefly while animating; otherwise block until the next key.
        let timeout = if animation.is_some() {
            frame
        } else {
            Duration::from_millis(250)
        };
        if !event::poll(timeout)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!(score = engine.score(), moves = engine.moves(), "quit");
                    return Ok(());
                }
                match handle_key_event(key).and_then(|action| accept_action(action, animation.is_some())) {
                    Some(GameAction::Slide(direction)) => {
                        let before = engine.snapshot();
                        let outcome = engine.play(direction, rng);
                        animation = (config.animate && outcome.result.changed)
                            .then(|| SlideAnimation::from_movements(&before, &outcome.result.movements));
                    }
                    Some(GameAction::Restart) => {
                        engine.reset(rng);
                        animation = None;
                    }
                    None => {}
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
