pub mod codes;
pub mod engine;
pub mod scoring;
pub mod word_bank;

// Re-export main components
pub use codes::*;
pub use engine::*;
pub use scoring::*;
pub use word_bank::*;
