use std::sync::Arc;

use game_core::GameEngine;
use game_persistence::MemoryKvStore;
use game_types::Player;

/// Engine backed by an in-memory store.
pub fn create_test_engine() -> GameEngine {
    GameEngine::new(Arc::new(MemoryKvStore::new()))
}

/// Adds a single word so `start_game` selects it deterministically.
pub async fn seed_word(engine: &GameEngine, word: &str) {
    engine
        .word_bank()
        .add_word(word, Some("Testing"), Some("test hint"))
        .await
        .unwrap();
}

/// Creates a game, joins one player, starts a round with `word`.
pub async fn playing_game(engine: &GameEngine, word: &str) -> (String, Player) {
    seed_word(engine, word).await;
    let game = engine.create_game().await.unwrap();
    let player = engine.join_game(&game.code, "Alice").await.unwrap();
    engine.start_game(&game.code).await.unwrap();
    (game.code, player)
}

/// Guesses `letter` and asserts the call succeeded.
pub async fn guess(
    engine: &GameEngine,
    code: &str,
    player_id: &str,
    letter: char,
) -> game_core::GuessOutcome {
    engine
        .guess_letter(code, player_id, &letter.to_string())
        .await
        .unwrap()
}

/// Drives a player through every letter of `word`, winning the round.
pub async fn guess_word(engine: &GameEngine, code: &str, player_id: &str, word: &str) {
    let mut seen = std::collections::BTreeSet::new();
    for letter in word.chars() {
        if seen.insert(letter) {
            guess(engine, code, player_id, letter).await;
        }
    }
}
