pub mod db;
pub mod kv;
pub mod topic_store;

pub use db::SqliteStore;
pub use kv::{KeyValueStore, MemoryStore};
pub use topic_store::{TOPIC_KEY_PREFIX, TopicStore, topic_key};
