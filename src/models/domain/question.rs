use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One multiple-choice question as extracted from the model response.
///
/// Option keys are single-letter labels ("A" through "D"); `answer` may be
/// absent when no answer token could be parsed without invalidating the
/// record.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionRecord {
    pub question: String,
    pub options: BTreeMap<String, String>,
    #[serde(default)]
    pub answer: Option<String>,
}

impl QuestionRecord {
    /// A record is only worth emitting if it has question text and at least
    /// two options to choose between.
    pub fn is_valid(&self) -> bool {
        !self.question.trim().is_empty() && self.options.len() >= 2
    }
}
