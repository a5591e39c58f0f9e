use rand::Rng;
use uuid::Uuid;

/// 32 symbols; visually ambiguous characters (I, O, 0, 1) are excluded so
/// codes survive being read off a shared screen.
pub const GAME_CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

pub const GAME_CODE_LEN: usize = 6;

/// A fresh 6-character game code. Uniqueness is the caller's problem
/// (the engine retries until the key is free).
pub fn generate_game_code() -> String {
    let mut rng = rand::thread_rng();
    (0..GAME_CODE_LEN)
        .map(|_| GAME_CODE_ALPHABET[rng.gen_range(0..GAME_CODE_ALPHABET.len())] as char)
        .collect()
}

/// Id for word and player records.
pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

/// Codes are shared verbally; accept any casing and stray whitespace.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}
