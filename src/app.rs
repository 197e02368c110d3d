//! Session loop and the frontend capabilities it drives.
//!
//! The engine never talks to a terminal. A session asks an [`InputSource`]
//! for commands, applies them, and hands every resulting snapshot to a
//! [`Renderer`]. The binary plugs in crossterm-backed implementations;
//! tests plug in scripted ones.

use anyhow::Result;
use tracing::{debug, info};

use crate::core::{GameSnapshot, GameState};
use crate::types::Command;

/// Consumes snapshots of the game.
pub trait Renderer {
    fn render(&mut self, snap: &GameSnapshot) -> Result<()>;
}

/// Produces player commands. Blocks until one is available.
pub trait InputSource {
    fn next_command(&mut self) -> Result<Command>;
}

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    GameOver,
    Quit,
}

impl SessionEnd {
    pub fn as_str(self) -> &'static str {
        match self {
            SessionEnd::GameOver => "game_over",
            SessionEnd::Quit => "quit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub end: SessionEnd,
    pub snapshot: GameSnapshot,
}

impl SessionSummary {
    pub fn score(&self) -> u64 {
        self.snapshot.score
    }
}

/// Play until the game is over or the player quits.
///
/// Starts the game if needed. Every state the player can see is rendered,
/// including the final game-over board.
pub fn run_session<R, I>(game: &mut GameState, renderer: &mut R, input: &mut I) -> Result<SessionSummary>
where
    R: Renderer + ?Sized,
    I: InputSource + ?Sized,
{
    game.start();
    info!(
        dimension = game.dimension(),
        seed = game.seed(),
        "session started"
    );

    let end = loop {
        let snap = game.snapshot();
        renderer.render(&snap)?;
        if snap.game_over {
            break SessionEnd::GameOver;
        }

        match input.next_command()? {
            Command::Quit => break SessionEnd::Quit,
            Command::Move(direction) => {
                let outcome = game.take_turn(direction);
                if !outcome.changed {
                    debug!(direction = direction.as_str(), "blocked move");
                }
            }
        }
    };

    let snapshot = game.snapshot();
    info!(
        end = end.as_str(),
        score = snapshot.score,
        moves = snapshot.moves,
        max_tile = snapshot.max_tile,
        "session finished"
    );
    Ok(SessionSummary { end, snapshot })
}
