use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Per-player guess progress, persisted at `player:<code>:<id>`.
///
/// Each player works the puzzle independently; the id doubles as the
/// player's only authentication token.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Player {
    pub id: String,
    pub name: String,
    /// Cumulative across rounds.
    pub score: i32,
    pub guessed_letters: BTreeSet<char>,
    pub wrong_guesses: u32,
    pub is_eliminated: bool,
    #[serde(default)]
    pub finished_at: Option<i64>,
    pub joined_at: i64,
}

impl Player {
    pub fn new(id: String, name: String, joined_at: i64) -> Self {
        Self {
            id,
            name,
            score: 0,
            guessed_letters: BTreeSet::new(),
            wrong_guesses: 0,
            is_eliminated: false,
            finished_at: None,
            joined_at,
        }
    }

    pub fn has_guessed(&self, letter: char) -> bool {
        self.guessed_letters.contains(&letter)
    }

    /// Whether every letter of `word` has been guessed. Membership only;
    /// repeated letters in the word are satisfied by a single guess.
    pub fn has_revealed(&self, word: &str) -> bool {
        word.chars().all(|c| self.guessed_letters.contains(&c))
    }

    /// Clears round-scoped state ahead of a fresh round, keeping the
    /// cumulative score.
    pub fn reset_round_state(&mut self) {
        self.guessed_letters.clear();
        self.wrong_guesses = 0;
        self.is_eliminated = false;
        self.finished_at = None;
    }
}
