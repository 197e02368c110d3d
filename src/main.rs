//! Terminal 2048 runner (default binary).
//!
//! Plays one session in the alternate screen, then offers the after-game
//! menu (save, edit the leaderboard, quit) on the normal screen.

use std::fs::File;
use std::io;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tui_2048::app::{run_session, InputSource, Renderer};
use tui_2048::config::{AppConfig, Args};
use tui_2048::core::{GameSnapshot, GameState};
use tui_2048::end_game::run_end_game;
use tui_2048::input::handle_key_event;
use tui_2048::scores::Leaderboard;
use tui_2048::term::{FrameBuffer, GameView, StatusView, TerminalRenderer, Viewport};
use tui_2048::types::Command;

fn main() -> Result<()> {
    let config = AppConfig::from_args(Args::parse())?;
    init_logging(&config)?;

    let leaderboard = if config.save_score {
        match Leaderboard::open_default() {
            Ok(board) => Some(board),
            Err(err) => {
                warn!(error = %err, "leaderboard unavailable");
                None
            }
        }
    } else {
        None
    };
    let best_score = leaderboard
        .as_ref()
        .and_then(|board| board.best().ok().flatten());

    let mut game = GameState::new(config.dimension, config.seed);
    let mut screen = TerminalScreen::new(StatusView {
        best_score,
        seed: config.seed,
    });
    screen.term.enter()?;

    let result = run_session(&mut game, &mut screen, &mut Keyboard);

    // Always try to restore terminal state.
    let _ = screen.term.exit();
    let summary = result?;

    println!(
        "Final score: {} ({} moves, best tile {})",
        summary.score(),
        summary.snapshot.moves,
        summary.snapshot.max_tile
    );

    if let Some(board) = leaderboard {
        let stdin = io::stdin();
        run_end_game(
            &board,
            summary.score(),
            config.player_name.as_deref(),
            &mut stdin.lock(),
            &mut io::stdout(),
        )?;
    }
    Ok(())
}

fn init_logging(config: &AppConfig) -> Result<()> {
    // The board owns the terminal, so logs only go to a file.
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_filter.clone()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

/// Crossterm-backed renderer: snapshot -> framebuffer -> diffed terminal output.
struct TerminalScreen {
    term: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
    status: StatusView,
    viewport: Option<Viewport>,
}

impl TerminalScreen {
    fn new(status: StatusView) -> Self {
        Self {
            term: TerminalRenderer::new(),
            view: GameView::default(),
            fb: FrameBuffer::new(0, 0),
            status,
            viewport: None,
        }
    }
}

impl Renderer for TerminalScreen {
    fn render(&mut self, snap: &GameSnapshot) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        // The terminal may have reflowed the old frame on resize.
        if self.viewport.replace(viewport) != Some(viewport) {
            self.term.invalidate();
        }
        self.view
            .render_into_with_status(snap, Some(&self.status), viewport, &mut self.fb);
        self.term.draw(&self.fb)
    }
}

/// Blocking keyboard input; keys without a meaning are skipped.
struct Keyboard;

impl InputSource for Keyboard {
    fn next_command(&mut self) -> Result<Command> {
        loop {
            if let Event::Key(key) = event::read()? {
                if let Some(command) = handle_key_event(key) {
                    return Ok(command);
                }
            }
        }
    }
}
