//! Prompt sent to the judge

use crate::topic::topic::Topic;

/// Builds the judge instruction for a topic/answer pair.
pub struct JudgePromptTemplate;

impl JudgePromptTemplate {
    /// Fixed persona and output contract for the judge
    pub const SYSTEM: &'static str = "You are a harsh comedy writer for a TV variety show. \
Rate the [ANSWER] given to the [TOPIC] and reply with this JSON only, no markdown:\n\
{ \"score\": integer from 1 to 6, \"comment\": \"a short quip\" }";

    /// Full prompt text. An empty answer is sent as-is so the judge can
    /// score the silence.
    pub fn render(topic: &Topic, answer: &str) -> String {
        format!(
            "{}\n\n[TOPIC] {}\n[ANSWER] {}",
            Self::SYSTEM,
            topic.prompt,
            answer.trim()
        )
    }
}
