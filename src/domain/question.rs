use serde::{Deserialize, Serialize};

use super::Subject;

/// Structured record extracted from one analyze or similar-question
/// reply. Built fresh per call; the caller owns it outright.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedQuestion {
    pub question_text: String,
    pub answer_text: String,
    pub analysis: String,
    #[serde(default)]
    pub subject: Subject,
    #[serde(default)]
    pub knowledge_points: Vec<String>,
    #[serde(default)]
    pub requires_image: bool,
}

/// Partial record produced by the reanswer flow. The caller already has
/// the question text, so only the regenerated fields appear, and any of
/// them may legitimately be empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReanswerOutput {
    pub answer_text: String,
    pub analysis: String,
    #[serde(default)]
    pub knowledge_points: Vec<String>,
}
