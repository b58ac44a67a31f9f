pub mod app;
pub mod config;
pub mod database;
pub mod error;
pub mod export;
pub mod generator;
pub mod models;

pub use app::StudyApp;
pub use config::Config;
pub use error::{Result, StorageError, StudyError, ValidationError};
pub use models::{Flashcard, QuizAnswer, QuizQuestion, StudySession, StudyTip, Tab, Topic};
