//! Study app controller.
//! Runs generation, keeps the working session and the saved-topics list,
//! and talks to the topic store.

use crate::config::Config;
use crate::database::{KeyValueStore, TopicStore};
use crate::error::{StorageError, ValidationError};
use crate::export::json::{export_topic_to_path, import_topic};
use crate::generator::generate_materials;
use crate::models::{StudySession, Topic, TopicSummary};
use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;
use std::time::Duration;

/// Saved ids more than a day ahead of the clock don't advance the id counter.
const MAX_ID_LEAD_MS: i64 = 24 * 60 * 60 * 1000;

/// Topic name and notes captured when generation starts.
struct PendingGeneration {
    topic_name: String,
    notes: String,
}

pub struct StudyApp<S: KeyValueStore> {
    topics: TopicStore<S>,
    session: StudySession,
    saved_topics: Vec<Topic>,
    pending: Option<PendingGeneration>,
    generation_delay: Duration,
    rng: StdRng,
    last_id: i64,
}

impl<S: KeyValueStore> StudyApp<S> {
    /// Creates the app and loads previously saved topics
    pub fn new(store: S, config: &Config) -> Self {
        let rng = match config.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut app = Self {
            topics: TopicStore::new(store),
            session: StudySession::default(),
            saved_topics: Vec::new(),
            pending: None,
            generation_delay: config.generation_delay,
            rng,
            last_id: 0,
        };
        app.refresh_saved_topics();
        app
    }

    pub fn session(&self) -> &StudySession {
        &self.session
    }

    /// Direct access for input editing, navigation and quiz answers.
    pub fn session_mut(&mut self) -> &mut StudySession {
        &mut self.session
    }

    pub fn saved_topics(&self) -> &[Topic] {
        &self.saved_topics
    }

    pub fn saved_summaries(&self) -> Vec<TopicSummary> {
        self.saved_topics.iter().map(Topic::summary).collect()
    }

    pub fn topic_store(&self) -> &TopicStore<S> {
        &self.topics
    }

    pub fn is_generating(&self) -> bool {
        self.pending.is_some()
    }

    fn validate(&self) -> Result<PendingGeneration, ValidationError> {
        if self.pending.is_some() {
            return Err(ValidationError::AlreadyGenerating);
        }
        if self.session.topic_name.trim().is_empty() {
            return Err(ValidationError::MissingTopicName);
        }
        if self.session.notes.trim().is_empty() {
            return Err(ValidationError::MissingNotes);
        }

        Ok(PendingGeneration {
            topic_name: self.session.topic_name.clone(),
            notes: self.session.notes.clone(),
        })
    }

    /// Validates the input and enters the generating state. Nothing changes
    /// when validation fails.
    pub fn begin_generation(&mut self) -> Result<(), ValidationError> {
        let pending = self.validate()?;
        self.pending = Some(pending);
        Ok(())
    }

    /// Completes a generation started with [`begin_generation`](Self::begin_generation).
    /// Returns `None` if none is in flight.
    pub fn finish_generation(&mut self) -> Option<Topic> {
        let pending = self.pending.take()?;
        Some(self.run_generation(pending))
    }

    /// Validates, waits for the configured delay and generates in one call.
    pub fn generate(&mut self) -> Result<Topic, ValidationError> {
        self.begin_generation()?;
        if !self.generation_delay.is_zero() {
            std::thread::sleep(self.generation_delay);
        }
        self.finish_generation()
            .ok_or(ValidationError::AlreadyGenerating)
    }

    fn run_generation(&mut self, pending: PendingGeneration) -> Topic {
        let materials = generate_materials(&pending.topic_name, &pending.notes, &mut self.rng);

        self.session.show_materials(
            materials.flashcards.clone(),
            materials.quiz_questions.clone(),
            materials.study_tips.clone(),
        );

        let now = Utc::now();
        let topic = Topic {
            id: self.mint_id(now),
            topic_name: pending.topic_name,
            notes: pending.notes,
            flashcards: materials.flashcards,
            quiz_questions: materials.quiz_questions,
            study_tips: materials.study_tips,
            created_at: now,
        };

        // The in-memory result stays on screen even if it can't be stored
        if let Err(e) = self.topics.save(&topic) {
            log::warn!(
                "Storage not available, topic '{}' is session-only: {}",
                topic.topic_name,
                e
            );
        }
        self.refresh_saved_topics();

        log::debug!(
            "Generated {} flashcards, {} quiz questions for '{}'",
            topic.flashcards.len(),
            topic.quiz_questions.len(),
            topic.topic_name
        );
        topic
    }

    /// Millisecond timestamp, bumped past every id already handed out or
    /// loaded and past any saved id it would collide with.
    fn mint_id(&mut self, now: DateTime<Utc>) -> String {
        let mut id = now.timestamp_millis().max(self.last_id.saturating_add(1));
        while id < i64::MAX && self.saved_topics.iter().any(|t| t.id == id.to_string()) {
            id += 1;
        }
        self.last_id = id;
        id.to_string()
    }

    /// Shows a saved topic without regenerating anything.
    /// Returns false when no saved topic has this id.
    pub fn load_topic(&mut self, id: &str) -> bool {
        match self.saved_topics.iter().find(|t| t.id == id) {
            Some(topic) => {
                self.session.show_topic(topic);
                true
            }
            None => false,
        }
    }

    pub fn delete_topic(&mut self, id: &str) {
        if let Err(e) = self.topics.delete(id) {
            log::warn!("Could not delete topic {}: {}", id, e);
        }
        self.refresh_saved_topics();
    }

    pub fn refresh_saved_topics(&mut self) {
        self.saved_topics = self.topics.load_all();

        // Ids far in the future come from foreign writers, not from this clock
        let horizon = Utc::now().timestamp_millis() + MAX_ID_LEAD_MS;
        let newest = self
            .saved_topics
            .iter()
            .filter_map(|t| t.id.parse::<i64>().ok())
            .filter(|&id| id <= horizon)
            .max()
            .unwrap_or(0);
        self.last_id = self.last_id.max(newest);
    }

    /// Writes a saved topic to a JSON file. Returns false for an unknown id.
    pub fn export_topic(&self, id: &str, path: impl AsRef<Path>) -> Result<bool, StorageError> {
        match self.saved_topics.iter().find(|t| t.id == id) {
            Some(topic) => {
                export_topic_to_path(topic, path)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Reads a topic from a JSON file and stores it. A record with the same
    /// id is replaced.
    pub fn import_topic(&mut self, path: impl AsRef<Path>) -> Result<Topic, StorageError> {
        let topic = import_topic(path)?;
        self.topics.save(&topic)?;
        self.refresh_saved_topics();
        Ok(topic)
    }
}
