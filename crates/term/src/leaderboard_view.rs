//! Plain-text leaderboard table.
//!
//! Column widths follow the longest entry in each column:
//!
//! ```text
//! ---------------------------
//! | Place | User Name | Score |
//! ---------------------------
//! |    1. | ada       |  2048 |
//! ```

use crate::scores::ScoreEntry;

const PLACE: &str = "Place";
const USER_NAME: &str = "User Name";
const SCORE: &str = "Score";

/// One line of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLine {
    pub text: String,
    /// The row belongs to the player who just finished.
    pub highlighted: bool,
}

impl TableLine {
    fn plain(text: String) -> Self {
        Self {
            text,
            highlighted: false,
        }
    }
}

/// Build the table for `entries` (already ranked), highlighting `player`'s row.
///
/// An empty leaderboard yields a single "no scores yet" line.
pub fn leaderboard_lines(entries: &[ScoreEntry], player: Option<&str>) -> Vec<TableLine> {
    if entries.is_empty() {
        return vec![TableLine::plain("No scores yet.".to_string())];
    }

    // Place is printed with a trailing '.', so it needs one extra column.
    let place_w = PLACE.len().max(entries.len().to_string().len() + 1);
    let name_w = entries
        .iter()
        .map(|e| e.name.chars().count())
        .chain(std::iter::once(USER_NAME.len()))
        .max()
        .unwrap_or(USER_NAME.len());
    let score_w = entries
        .iter()
        .map(|e| e.score.to_string().len())
        .chain(std::iter::once(SCORE.len()))
        .max()
        .unwrap_or(SCORE.len());

    let header = format!(
        "| {:^place_w$} | {:^name_w$} | {:^score_w$} |",
        PLACE, USER_NAME, SCORE
    );
    let separator = "-".repeat(header.chars().count());

    let mut lines = Vec::with_capacity(entries.len() + 5);
    lines.push(TableLine::plain("Leaderboard".to_string()));
    lines.push(TableLine::plain(separator.clone()));
    lines.push(TableLine::plain(header));
    lines.push(TableLine::plain(separator.clone()));

    for (i, entry) in entries.iter().enumerate() {
        let place = format!("{}.", i + 1);
        lines.push(TableLine {
            text: format!(
                "| {:>place_w$} | {:<name_w$} | {:>score_w$} |",
                place, entry.name, entry.score
            ),
            highlighted: player == Some(entry.name.as_str()),
        });
    }

    lines.push(TableLine::plain(separator));
    lines
}
