pub mod flashcard;
pub mod quiz_question;
pub mod study_session;
pub mod study_tip;
pub mod topic;

pub use flashcard::Flashcard;
pub use quiz_question::{QuizAnswer, QuizQuestion};
pub use study_session::{QuizScore, StudySession, Tab};
pub use study_tip::StudyTip;
pub use topic::{Topic, TopicSummary};
