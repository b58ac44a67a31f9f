//! Persists topics as JSON records under `study-topic:<id>` keys.

use super::kv::KeyValueStore;
use crate::error::StorageError;
use crate::models::Topic;

pub const TOPIC_KEY_PREFIX: &str = "study-topic:";

pub fn topic_key(id: &str) -> String {
    format!("{}{}", TOPIC_KEY_PREFIX, id)
}

pub struct TopicStore<S> {
    store: S,
}

impl<S: KeyValueStore> TopicStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Writes the topic, replacing any record with the same id.
    pub fn save(&mut self, topic: &Topic) -> Result<(), StorageError> {
        let json = serde_json::to_string(topic)?;
        self.store.set(&topic_key(&topic.id), &json)?;
        log::info!("Saved topic '{}' ({})", topic.topic_name, topic.id);
        Ok(())
    }

    pub fn load(&self, id: &str) -> Result<Option<Topic>, StorageError> {
        match self.store.get(&topic_key(id))? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Loads every saved topic in key order.
    ///
    /// Records that cannot be fetched or parsed are skipped; if the key
    /// listing itself fails the result is empty.
    pub fn load_all(&self) -> Vec<Topic> {
        let keys = match self.store.list(TOPIC_KEY_PREFIX) {
            Ok(keys) => keys,
            Err(e) => {
                log::warn!("Could not list saved topics: {}", e);
                return Vec::new();
            }
        };

        keys.iter()
            .filter_map(|key| match self.store.get(key) {
                Ok(Some(json)) => match serde_json::from_str::<Topic>(&json) {
                    Ok(topic) => Some(topic),
                    Err(e) => {
                        log::warn!("Skipping unparseable topic record {}: {}", key, e);
                        None
                    }
                },
                Ok(None) => None,
                Err(e) => {
                    log::warn!("Skipping unreadable topic record {}: {}", key, e);
                    None
                }
            })
            .collect()
    }

    /// Deleting an id that was never saved is not an error.
    pub fn delete(&mut self, id: &str) -> Result<(), StorageError> {
        self.store.delete(&topic_key(id))?;
        log::info!("Deleted topic {}", id);
        Ok(())
    }
}
