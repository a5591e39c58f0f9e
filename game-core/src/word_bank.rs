use std::sync::Arc;

use rand::seq::SliceRandom;
use tracing::info;

use game_persistence::{KvStore, WORD_PREFIX, word_key};
use game_types::{GameError, StorageError, Word};

use crate::codes::new_record_id;

/// Starter bank shipped with the server so a fresh install is playable
/// before an admin has curated anything.
pub const INITIAL_WORDS: &[(&str, &str, &str)] = &[
    ("ELEPHANT", "Animals", "Large mammal with a trunk"),
    ("GIRAFFE", "Animals", "Tallest land animal"),
    ("PENGUIN", "Animals", "Flightless bird from Antarctica"),
    ("DOLPHIN", "Animals", "Intelligent marine mammal"),
    ("BUTTERFLY", "Animals", "Colorful flying insect"),
    ("KANGAROO", "Animals", "Hopping marsupial from Australia"),
    ("PIZZA", "Food", "Italian dish with cheese and toppings"),
    ("CHOCOLATE", "Food", "Sweet brown treat"),
    ("HAMBURGER", "Food", "Popular fast food sandwich"),
    ("SPAGHETTI", "Food", "Long thin Italian pasta"),
    ("STRAWBERRY", "Food", "Red fruit with seeds on outside"),
    ("AUSTRALIA", "Countries", "Country known for kangaroos"),
    ("CANADA", "Countries", "Country north of United States"),
    ("BRAZIL", "Countries", "Largest South American country"),
    ("JAPAN", "Countries", "Island nation in East Asia"),
    ("EGYPT", "Countries", "Country famous for pyramids"),
    ("COMPUTER", "Technology", "Electronic device for processing data"),
    ("INTERNET", "Technology", "Global network of computers"),
    ("SMARTPHONE", "Technology", "Mobile device with touchscreen"),
    ("KEYBOARD", "Technology", "Device for typing"),
    ("BASKETBALL", "Sports", "Game with hoops and orange ball"),
    ("FOOTBALL", "Sports", "Popular sport played with feet"),
    ("TENNIS", "Sports", "Racket sport played on court"),
    ("SWIMMING", "Sports", "Moving through water"),
    ("MOUNTAIN", "Nature", "Very high natural elevation"),
    ("RAINBOW", "Nature", "Colorful arc in sky after rain"),
    ("OCEAN", "Nature", "Large body of salt water"),
    ("VOLCANO", "Nature", "Mountain that erupts lava"),
    ("TEACHER", "Professions", "Person who educates students"),
    ("DOCTOR", "Professions", "Medical professional"),
    ("ENGINEER", "Professions", "Person who designs and builds"),
    ("ARTIST", "Professions", "Creative person who makes art"),
];

const DEFAULT_CATEGORY: &str = "General";

/// The admin-curated collection of candidate puzzle words, stored under
/// `word:<id>` keys. Words are immutable once created.
pub struct WordBank {
    store: Arc<dyn KvStore>,
}

impl WordBank {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    pub async fn add_word(
        &self,
        word: &str,
        category: Option<&str>,
        hint: Option<&str>,
    ) -> Result<Word, GameError> {
        let normalized = word.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(GameError::validation("word is required"));
        }

        let entry = Word {
            id: new_record_id(),
            word: normalized,
            category: category
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .unwrap_or(DEFAULT_CATEGORY)
                .to_string(),
            hint: hint.unwrap_or_default().trim().to_string(),
        };

        self.store
            .set(&word_key(&entry.id), encode(&entry)?)
            .await?;
        Ok(entry)
    }

    pub async fn list_words(&self) -> Result<Vec<Word>, GameError> {
        let values = self.store.get_by_prefix(WORD_PREFIX).await?;
        values.into_iter().map(decode).collect()
    }

    pub async fn delete_word(&self, id: &str) -> Result<(), GameError> {
        self.store.delete(&word_key(id)).await?;
        Ok(())
    }

    /// One word chosen uniformly from the full bank.
    pub async fn random_word(&self) -> Result<Word, GameError> {
        let words = self.list_words().await?;
        words
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or(GameError::NoWordsAvailable)
    }

    pub async fn is_empty(&self) -> Result<bool, GameError> {
        Ok(self.list_words().await?.is_empty())
    }

    /// Loads the starter bank into an empty store. No-op when any word
    /// already exists, so restarts never duplicate entries.
    pub async fn seed_initial_words(&self) -> Result<usize, GameError> {
        if !self.is_empty().await? {
            return Ok(0);
        }

        for (word, category, hint) in INITIAL_WORDS {
            self.add_word(word, Some(category), Some(hint)).await?;
        }

        info!("Seeded word bank with {} starter words", INITIAL_WORDS.len());
        Ok(INITIAL_WORDS.len())
    }
}

fn decode(value: serde_json::Value) -> Result<Word, GameError> {
    serde_json::from_value(value)
        .map_err(|e| StorageError(format!("corrupt word record: {e}")).into())
}

fn encode(word: &Word) -> Result<serde_json::Value, GameError> {
    serde_json::to_value(word).map_err(|e| StorageError(e.to_string()).into())
}
