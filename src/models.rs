use serde::Deserialize;

pub type Questions = Vec<Question>;

/// A question as written in a question bank file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
}
