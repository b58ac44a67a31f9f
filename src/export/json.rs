//! JSON import/export for topics.
//! Files use the same record layout as the topic store.

use crate::error::StorageError;
use crate::models::Topic;
use std::fs;
use std::path::Path;

/// Exports a topic to a JSON file at the specified path.
pub fn export_topic_to_path(topic: &Topic, path: impl AsRef<Path>) -> Result<(), StorageError> {
    let json_string = serde_json::to_string_pretty(topic)?;
    fs::write(path.as_ref(), json_string)?;
    log::info!(
        "Topic '{}' exported to '{}'",
        topic.topic_name,
        path.as_ref().display()
    );
    Ok(())
}

/// Imports a topic from a JSON file.
/// Returns an error if the file doesn't exist or contains invalid JSON.
pub fn import_topic(path: impl AsRef<Path>) -> Result<Topic, StorageError> {
    let contents = fs::read_to_string(path.as_ref())?;
    let topic: Topic = serde_json::from_str(&contents)?;

    log::info!(
        "Topic '{}' imported from '{}'",
        topic.topic_name,
        path.as_ref().display()
    );
    Ok(topic)
}
