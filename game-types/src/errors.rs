use thiserror::Error;

/// Opaque failure from the key-value backend (connection, query, or a
/// record that no longer decodes).
#[derive(Debug, Clone, Error)]
#[error("storage error: {0}")]
pub struct StorageError(pub String);

#[derive(Debug, Error)]
pub enum GameError {
    /// Bad input shape: empty word, empty name, multi-character letter.
    #[error("{0}")]
    Validation(String),

    /// Unknown game, player, or word.
    #[error("{0} not found")]
    NotFound(String),

    /// Wrong game status for the operation, or the player already
    /// finished or was eliminated.
    #[error("{0}")]
    InvalidState(String),

    #[error("letter '{0}' already guessed")]
    DuplicateGuess(char),

    #[error("no words available")]
    NoWordsAvailable,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl GameError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
