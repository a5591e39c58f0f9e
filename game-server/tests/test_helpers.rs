use std::sync::Arc;

use warp::Filter;

use game_core::GameEngine;
use game_persistence::MemoryKvStore;
use game_server::create_routes;

pub fn create_test_engine() -> Arc<GameEngine> {
    Arc::new(GameEngine::new(Arc::new(MemoryKvStore::new())))
}

pub fn create_test_app(
    engine: Arc<GameEngine>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    create_routes(engine)
}

/// Seeds one word so a started round is deterministic.
pub async fn seed_word(engine: &GameEngine, word: &str) {
    engine
        .word_bank()
        .add_word(word, Some("Testing"), Some("a hint"))
        .await
        .unwrap();
}

/// A playing game with one known word and one joined player, set up
/// through the engine so each test exercises only its own endpoint.
/// Returns (code, player_id).
pub async fn playing_game(engine: &GameEngine, word: &str) -> (String, String) {
    seed_word(engine, word).await;
    let game = engine.create_game().await.unwrap();
    let player = engine.join_game(&game.code, "Alice").await.unwrap();
    engine.start_game(&game.code).await.unwrap();
    (game.code, player.id)
}
