use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyTip {
    pub icon: String,
    pub title: String,
    pub tip: String,
}
