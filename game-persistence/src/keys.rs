//! Key layout of the flat namespace: `word:<id>`, `game:<code>`,
//! `player:<code>:<playerId>`.

pub const WORD_PREFIX: &str = "word:";

pub fn word_key(id: &str) -> String {
    format!("{WORD_PREFIX}{id}")
}

pub fn game_key(code: &str) -> String {
    format!("game:{code}")
}

pub fn player_key(code: &str, player_id: &str) -> String {
    format!("player:{code}:{player_id}")
}

pub fn player_prefix(code: &str) -> String {
    format!("player:{code}:")
}
