pub mod connection;
pub mod entities;
pub mod keys;
pub mod kv;
pub mod memory;
pub mod sql;

pub use keys::*;
pub use kv::KvStore;
pub use memory::MemoryKvStore;
pub use sql::SqlKvStore;
