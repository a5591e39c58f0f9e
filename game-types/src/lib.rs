pub mod api;
pub mod errors;
pub mod game;
pub mod player;
pub mod word;

// Re-export all types
pub use api::*;
pub use errors::*;
pub use game::*;
pub use player::*;
pub use word::*;
