use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Default wrong-guess budget per player.
pub const DEFAULT_MAX_WRONGS: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum GameStatus {
    /// Created, players may join, no word selected yet.
    Waiting,
    /// A round is live: a word is selected and guesses are accepted.
    Playing,
    /// A player completed the word; the puzzle is revealed for the podium.
    Finished,
}

/// Shared per-game state, persisted at `game:<code>`.
///
/// Guess progress lives on each [`crate::Player`] record, not here; the game
/// record only changes when a round starts or the first winner is declared.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Game {
    pub code: String,
    pub status: GameStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_word: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_hint: Option<String>,
    pub max_wrongs: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner_id: Option<String>,
    /// Epoch milliseconds.
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<i64>,
}

impl Game {
    pub fn new(code: String, created_at: i64) -> Self {
        Self {
            code,
            status: GameStatus::Waiting,
            current_word: None,
            current_category: None,
            current_hint: None,
            max_wrongs: DEFAULT_MAX_WRONGS,
            winner: None,
            winner_id: None,
            created_at,
            started_at: None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }
}
