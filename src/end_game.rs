//! After-game menu: save the score, edit the leaderboard, or quit.
//!
//! Runs on the normal screen once the board has been torn down. Input and
//! output are plain streams so the whole menu can be driven from a script.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::info;

use crate::scores::{Leaderboard, ScoreStoreError};
use crate::term::{leaderboard_lines, write_table};

/// Choices offered once a game has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndGameAction {
    SaveScore,
    EditLeaderboard,
    Quit,
}

impl EndGameAction {
    /// Parse a menu answer: `s`, `e`, `q` or the full word (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "s" | "save" => Some(EndGameAction::SaveScore),
            "e" | "edit" => Some(EndGameAction::EditLeaderboard),
            "q" | "quit" => Some(EndGameAction::Quit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EndGameAction::SaveScore => "save",
            EndGameAction::EditLeaderboard => "edit",
            EndGameAction::Quit => "quit",
        }
    }
}

/// One change to the stored leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaderboardEdit {
    Rename { old: String, new: String },
    Remove(String),
}

impl LeaderboardEdit {
    /// Parse `rename OLD NEW` or `remove NAME` (`mv`/`rm` also work).
    ///
    /// Names are single words here.
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let verb = words.next()?.to_lowercase();
        let edit = match verb.as_str() {
            "rename" | "mv" => LeaderboardEdit::Rename {
                old: words.next()?.to_string(),
                new: words.next()?.to_string(),
            },
            "remove" | "rm" => LeaderboardEdit::Remove(words.next()?.to_string()),
            _ => return None,
        };
        if words.next().is_some() {
            return None;
        }
        Some(edit)
    }

    pub fn apply(&self, board: &Leaderboard) -> Result<(), ScoreStoreError> {
        match self {
            LeaderboardEdit::Rename { old, new } => board.rename(old, new),
            LeaderboardEdit::Remove(name) => board.remove(name).map(|_| ()),
        }
    }
}

/// Run the menu until the player saves or quits.
///
/// `player` is the name given on the command line; without one the player
/// is asked when saving. Returns the name the score was saved under.
/// End of input counts as quitting.
pub fn run_end_game<R, W>(
    board: &Leaderboard,
    score: u64,
    player: Option<&str>,
    input: &mut R,
    out: &mut W,
) -> Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(out, "[s]ave score, [e]dit leaderboard, [q]uit: ")?;
        out.flush()?;
        let Some(answer) = read_line(input)? else {
            return Ok(None);
        };

        match EndGameAction::from_str(&answer) {
            Some(EndGameAction::SaveScore) => {
                let name = match player {
                    Some(name) => name.to_string(),
                    None => {
                        write!(out, "Name: ")?;
                        out.flush()?;
                        match read_line(input)? {
                            Some(line) => line.trim().to_string(),
                            None => return Ok(None),
                        }
                    }
                };

                match board.record(&name, score) {
                    Ok(best) => {
                        info!(name = %name, score, best, "score saved");
                        if best {
                            writeln!(out, "New personal best for {name}!")?;
                        }
                        show(board, Some(&name), out)?;
                        return Ok(Some(name));
                    }
                    Err(ScoreStoreError::EmptyName) => {
                        writeln!(out, "A name is needed to save the score.")?;
                    }
                    Err(err) => return Err(err.into()),
                }
            }
            Some(EndGameAction::EditLeaderboard) => {
                show(board, player, out)?;
                write!(out, "rename OLD NEW | remove NAME: ")?;
                out.flush()?;
                let Some(line) = read_line(input)? else {
                    return Ok(None);
                };

                let Some(edit) = LeaderboardEdit::parse(&line) else {
                    writeln!(out, "Unrecognized edit: {}", line.trim())?;
                    continue;
                };
                match edit.apply(board) {
                    Ok(()) => {
                        info!(?edit, "leaderboard edited");
                        show(board, player, out)?;
                    }
                    Err(
                        err @ (ScoreStoreError::UnknownPlayer(_)
                        | ScoreStoreError::NameTaken(_)
                        | ScoreStoreError::EmptyName),
                    ) => writeln!(out, "{err}")?,
                    Err(err) => return Err(err.into()),
                }
            }
            Some(EndGameAction::Quit) => return Ok(None),
            None => writeln!(out, "Unknown choice: {}", answer.trim())?,
        }
    }
}

fn show<W: Write>(board: &Leaderboard, player: Option<&str>, out: &mut W) -> Result<()> {
    let entries = board.ranked()?;
    write_table(out, &leaderboard_lines(&entries, player))
}

/// Next line of input, `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_parse_keys_and_words() {
        assert_eq!(EndGameAction::from_str("s"), Some(EndGameAction::SaveScore));
        assert_eq!(EndGameAction::from_str(" E\n"), Some(EndGameAction::EditLeaderboard));
        assert_eq!(EndGameAction::from_str("quit"), Some(EndGameAction::Quit));
        assert_eq!(EndGameAction::from_str("x"), None);
        for action in [
            EndGameAction::SaveScore,
            EndGameAction::EditLeaderboard,
            EndGameAction::Quit,
        ] {
            assert_eq!(EndGameAction::from_str(action.as_str()), Some(action));
        }
    }

    #[test]
    fn edits_parse() {
        assert_eq!(
            LeaderboardEdit::parse("rename ada lovelace\n"),
            Some(LeaderboardEdit::Rename {
                old: "ada".to_string(),
                new: "lovelace".to_string()
            })
        );
        assert_eq!(
            LeaderboardEdit::parse("RM bob"),
            Some(LeaderboardEdit::Remove("bob".to_string()))
        );
        assert_eq!(LeaderboardEdit::parse("rename ada"), None);
        assert_eq!(LeaderboardEdit::parse("remove a b"), None);
        assert_eq!(LeaderboardEdit::parse("promote ada"), None);
        assert_eq!(LeaderboardEdit::parse(""), None);
    }
}
