use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Populate an empty word bank with the starter words at startup.
    pub seed_initial_words: bool,
}

impl Config {
    pub fn new() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("Invalid PORT"),
            seed_initial_words: env::var("SEED_INITIAL_WORDS")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .expect("Invalid SEED_INITIAL_WORDS"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
