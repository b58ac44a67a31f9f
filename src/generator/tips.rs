//! Fixed study tips, personalised with the topic name.

use crate::models::StudyTip;

pub const TIP_COUNT: usize = 5;

pub fn generate_study_tips(topic_name: &str) -> Vec<StudyTip> {
    let tip = |icon: &str, title: &str, text: String| StudyTip {
        icon: icon.to_string(),
        title: title.to_string(),
        tip: text,
    };

    vec![
        tip(
            "🎯",
            "Active Recall",
            format!(
                "Try to explain {} without looking at your notes. This strengthens memory retention.",
                topic_name
            ),
        ),
        tip(
            "⏰",
            "Spaced Repetition",
            "Review this material after 1 day, 3 days, then 1 week for optimal retention."
                .to_string(),
        ),
        tip(
            "✍️",
            "Practice Application",
            format!(
                "Create real-world examples of how {} applies to situations you know.",
                topic_name
            ),
        ),
        tip(
            "🧩",
            "Connect Concepts",
            format!(
                "Link {} to other topics you've learned. Building connections improves understanding.",
                topic_name
            ),
        ),
        tip(
            "👥",
            "Teach Someone",
            format!(
                "Explain {} to a friend or family member. Teaching is the best way to learn.",
                topic_name
            ),
        ),
    ]
}
