use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::info;

use game_persistence::{KvStore, game_key, player_key, player_prefix};
use game_types::{Game, GameError, GameStatus, Player, StorageError};

use crate::codes::{generate_game_code, new_record_id, normalize_code};
use crate::scoring::win_score;
use crate::word_bank::WordBank;

/// Result of one processed guess.
#[derive(Debug, Clone)]
pub struct GuessOutcome {
    pub game: Game,
    pub player: Player,
    pub is_correct: bool,
    pub won: bool,
    pub eliminated: bool,
}

/// The game engine: every operation is a read-modify-write against the
/// injected store. Different player keys never conflict; game-record
/// writes that claim the winner are serialized through a per-code mutex
/// so only the first win sticks.
pub struct GameEngine {
    store: Arc<dyn KvStore>,
    words: WordBank,
    game_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl GameEngine {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            words: WordBank::new(store.clone()),
            store,
            game_locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn word_bank(&self) -> &WordBank {
        &self.words
    }

    pub async fn create_game(&self) -> Result<Game, GameError> {
        // Retry on collision so codes are unique even at scale.
        let code = loop {
            let candidate = generate_game_code();
            if self.store.get(&game_key(&candidate)).await?.is_none() {
                break candidate;
            }
        };

        let game = Game::new(code.clone(), now_ms());
        self.save_game(&game).await?;
        info!("Created game {}", code);
        Ok(game)
    }

    pub async fn get_game(&self, code: &str) -> Result<Game, GameError> {
        let code = normalize_code(code);
        self.load_game(&code)
            .await?
            .ok_or_else(|| GameError::not_found("game"))
    }

    /// Starts a round: picks a word, flips the game to playing, and clears
    /// every joined player's round state (score carries across rounds).
    pub async fn start_game(&self, code: &str) -> Result<Game, GameError> {
        let code = normalize_code(code);
        let mut game = self
            .load_game(&code)
            .await?
            .ok_or_else(|| GameError::not_found("game"))?;

        let word = self.words.random_word().await?;
        game.current_word = Some(word.word);
        game.current_category = Some(word.category);
        game.current_hint = Some(word.hint);
        game.status = GameStatus::Playing;
        game.winner = None;
        game.winner_id = None;
        game.started_at = Some(now_ms());

        for mut player in self.list_players(&code).await? {
            player.reset_round_state();
            self.save_player(&code, &player).await?;
        }

        self.save_game(&game).await?;
        info!("Started game {} in category {:?}", code, game.current_category);
        Ok(game)
    }

    /// Deletes the game and every player record under it. Idempotent.
    pub async fn reset_game(&self, code: &str) -> Result<(), GameError> {
        let code = normalize_code(code);
        self.store.delete(&game_key(&code)).await?;

        for player in self.list_players(&code).await? {
            self.store.delete(&player_key(&code, &player.id)).await?;
        }

        self.game_locks.lock().await.remove(&code);
        info!("Reset game {}", code);
        Ok(())
    }

    /// Joins regardless of game status; the returned id is the player's
    /// only credential.
    pub async fn join_game(&self, code: &str, name: &str) -> Result<Player, GameError> {
        let code = normalize_code(code);
        let name = name.trim();
        if name.is_empty() {
            return Err(GameError::validation("name is required"));
        }

        self.load_game(&code)
            .await?
            .ok_or_else(|| GameError::not_found("game"))?;

        let player = Player::new(new_record_id(), name.to_string(), now_ms());
        self.save_player(&code, &player).await?;
        info!("Player {} joined game {}", player.id, code);
        Ok(player)
    }

    pub async fn get_player(&self, code: &str, player_id: &str) -> Result<Player, GameError> {
        let code = normalize_code(code);
        self.load_player(&code, player_id)
            .await?
            .ok_or_else(|| GameError::not_found("player"))
    }

    /// Unordered; callers sort for leaderboards and podiums.
    pub async fn list_players(&self, code: &str) -> Result<Vec<Player>, GameError> {
        let code = normalize_code(code);
        let values = self.store.get_by_prefix(&player_prefix(&code)).await?;
        values
            .into_iter()
            .map(|value| decode(value, "player"))
            .collect()
    }

    /// The per-player guess state machine.
    pub async fn guess_letter(
        &self,
        code: &str,
        player_id: &str,
        letter: &str,
    ) -> Result<GuessOutcome, GameError> {
        let code = normalize_code(code);

        // No trimming: a space is a valid guess when the word contains one.
        let mut chars = letter.chars();
        let raw = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(GameError::validation("letter must be a single character")),
        };

        let game = self.load_game(&code).await?;
        let game = match game {
            Some(g) if g.is_playing() => g,
            _ => return Err(GameError::invalid_state("game is not in playing state")),
        };
        let current_word = game
            .current_word
            .clone()
            .ok_or_else(|| GameError::invalid_state("game is not in playing state"))?;

        let mut player = self
            .load_player(&code, player_id)
            .await?
            .ok_or_else(|| GameError::not_found("player"))?;

        if player.is_eliminated {
            return Err(GameError::invalid_state("player is eliminated"));
        }
        if player.finished_at.is_some() {
            return Err(GameError::invalid_state("player already finished this round"));
        }

        let letter = raw.to_ascii_uppercase();
        if player.has_guessed(letter) {
            return Err(GameError::DuplicateGuess(letter));
        }

        let is_correct = current_word.contains(letter);
        player.guessed_letters.insert(letter);
        if !is_correct {
            player.wrong_guesses += 1;
        }

        let won = player.has_revealed(&current_word);
        let eliminated = !won && player.wrong_guesses >= game.max_wrongs;

        let mut latest_game = game;
        if won {
            player.finished_at = Some(now_ms());
            player.score += win_score(player.wrong_guesses);
            latest_game = self.claim_winner(&code, &player).await?;
        } else if eliminated {
            player.is_eliminated = true;
            player.finished_at = Some(now_ms());
        }

        self.save_player(&code, &player).await?;

        Ok(GuessOutcome {
            game: latest_game,
            player,
            is_correct,
            won,
            eliminated,
        })
    }

    /// Records `player` as the game's winner only if no winner is set yet.
    /// The per-code lock serializes near-simultaneous wins, so the first
    /// one through claims victory and later ones leave the record alone.
    async fn claim_winner(&self, code: &str, player: &Player) -> Result<Game, GameError> {
        let lock = self.game_lock(code).await;
        let _guard = lock.lock().await;

        let mut game = self
            .load_game(code)
            .await?
            .ok_or_else(|| GameError::not_found("game"))?;

        if game.winner.is_none() {
            game.winner = Some(player.name.clone());
            game.winner_id = Some(player.id.clone());
            game.status = GameStatus::Finished;
            self.save_game(&game).await?;
            info!("Player {} won game {}", player.id, code);
        }

        Ok(game)
    }

    async fn game_lock(&self, code: &str) -> Arc<Mutex<()>> {
        let mut locks = self.game_locks.lock().await;
        locks.entry(code.to_owned()).or_default().clone()
    }

    async fn load_game(&self, code: &str) -> Result<Option<Game>, GameError> {
        match self.store.get(&game_key(code)).await? {
            Some(value) => Ok(Some(decode(value, "game")?)),
            None => Ok(None),
        }
    }

    async fn load_player(
        &self,
        code: &str,
        player_id: &str,
    ) -> Result<Option<Player>, GameError> {
        match self.store.get(&player_key(code, player_id)).await? {
            Some(value) => Ok(Some(decode(value, "player")?)),
            None => Ok(None),
        }
    }

    async fn save_game(&self, game: &Game) -> Result<(), GameError> {
        self.store
            .set(&game_key(&game.code), encode(game)?)
            .await?;
        Ok(())
    }

    async fn save_player(&self, code: &str, player: &Player) -> Result<(), GameError> {
        self.store
            .set(&player_key(code, &player.id), encode(player)?)
            .await?;
        Ok(())
    }
}

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

fn decode<T: DeserializeOwned>(value: serde_json::Value, what: &str) -> Result<T, GameError> {
    serde_json::from_value(value)
        .map_err(|e| StorageError(format!("corrupt {what} record: {e}")).into())
}

fn encode<T: Serialize>(value: &T) -> Result<serde_json::Value, GameError> {
    serde_json::to_value(value).map_err(|e| StorageError(e.to_string()).into())
}
