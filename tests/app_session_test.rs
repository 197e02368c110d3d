use std::collections::VecDeque;

use anyhow::{bail, Result};

use tui_2048::app::{run_session, InputSource, Renderer, SessionEnd};
use tui_2048::core::{Board, GameSnapshot, GameState};
use tui_2048::types::{Command, Direction};

#[derive(Default)]
struct RecordingRenderer {
    frames: Vec<GameSnapshot>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, snap: &GameSnapshot) -> Result<()> {
        self.frames.push(snap.clone());
        Ok(())
    }
}

/// Replays a fixed script, then quits.
struct ScriptedInput {
    commands: VecDeque<Command>,
    requests: usize,
}

impl ScriptedInput {
    fn new(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
            requests: 0,
        }
    }
}

impl InputSource for ScriptedInput {
    fn next_command(&mut self) -> Result<Command> {
        self.requests += 1;
        Ok(self.commands.pop_front().unwrap_or(Command::Quit))
    }
}

#[test]
fn quit_right_away_renders_the_opening_board() {
    let mut game = GameState::new(4, 3);
    let mut renderer = RecordingRenderer::default();
    let mut input = ScriptedInput::new([Command::Quit]);

    let summary = run_session(&mut game, &mut renderer, &mut input).unwrap();

    assert_eq!(summary.end, SessionEnd::Quit);
    assert_eq!(renderer.frames.len(), 1);
    let opening = &renderer.frames[0];
    assert_eq!(opening.grid.iter().flatten().filter(|&&v| v != 0).count(), 1);
    assert_eq!(summary.snapshot, *opening);
}

#[test]
fn moves_are_applied_and_rendered() {
    let board = Board::from_rows(&[[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let mut game = GameState::with_board(board, 11);
    let mut renderer = RecordingRenderer::default();
    let mut input = ScriptedInput::new([Command::Move(Direction::Left)]);

    let summary = run_session(&mut game, &mut renderer, &mut input).unwrap();

    assert_eq!(summary.end, SessionEnd::Quit);
    assert_eq!(summary.score(), 4);
    assert_eq!(summary.snapshot.moves, 1);
    assert_eq!(renderer.frames.len(), 2);
    assert_eq!(renderer.frames[1].score, 4);
}

#[test]
fn blocked_moves_change_nothing() {
    let board = Board::from_rows(&[[2, 0], [0, 0]]);
    let mut game = GameState::with_board(board, 5);
    game.start();
    let before = game.snapshot();

    let blocked = [Direction::Left, Direction::Up]
        .into_iter()
        .filter(|&d| !game.would_change(d))
        .map(Command::Move)
        .collect::<Vec<_>>();
    let mut renderer = RecordingRenderer::default();
    let mut input = ScriptedInput::new(blocked.clone());

    let summary = run_session(&mut game, &mut renderer, &mut input).unwrap();

    assert_eq!(summary.snapshot, before);
    assert_eq!(renderer.frames.len(), blocked.len() + 1);
    assert!(renderer.frames.iter().all(|f| *f == before));
}

#[test]
fn finished_game_stops_without_asking_for_input() {
    let board = Board::from_rows(&[[2, 4], [4, 2]]);
    let mut game = GameState::with_board(board, 1);
    let mut renderer = RecordingRenderer::default();
    let mut input = ScriptedInput::new([]);

    let summary = run_session(&mut game, &mut renderer, &mut input).unwrap();

    assert_eq!(summary.end, SessionEnd::GameOver);
    assert!(summary.snapshot.game_over);
    assert_eq!(input.requests, 0);
    assert_eq!(renderer.frames.len(), 1);
    assert!(renderer.frames[0].game_over);
}

#[test]
fn renderer_errors_end_the_session() {
    struct BrokenRenderer;
    impl Renderer for BrokenRenderer {
        fn render(&mut self, _snap: &GameSnapshot) -> Result<()> {
            bail!("terminal went away")
        }
    }

    let mut game = GameState::new(4, 1);
    let mut input = ScriptedInput::new([]);
    let err = run_session(&mut game, &mut BrokenRenderer, &mut input).unwrap_err();
    assert!(err.to_string().contains("terminal went away"));
    assert_eq!(input.requests, 0);
}
