use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::models::domain::QuestionRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizStatus {
    Success,
}

/// Per-difficulty question sets, keyed by the level string and kept in the
/// order the caller requested them. Serializes as a JSON object whose keys
/// follow insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuizByLevel {
    entries: Vec<(String, Vec<QuestionRecord>)>,
}

impl QuizByLevel {
    pub fn insert(&mut self, level: impl Into<String>, records: Vec<QuestionRecord>) {
        self.entries.push((level.into(), records));
    }

    pub fn get(&self, level: &str) -> Option<&[QuestionRecord]> {
        self.entries
            .iter()
            .find(|(key, _)| key == level)
            .map(|(_, records)| records.as_slice())
    }

    pub fn total_questions(&self) -> usize {
        self.entries.iter().map(|(_, records)| records.len()).sum()
    }
}

impl Serialize for QuizByLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (level, records) in &self.entries {
            map.serialize_entry(level, records)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for QuizByLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct QuizByLevelVisitor;

        impl<'de> Visitor<'de> for QuizByLevelVisitor {
            type Value = QuizByLevel;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of difficulty level to question records")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut quiz = QuizByLevel::default();
                while let Some((level, records)) =
                    access.next_entry::<String, Vec<QuestionRecord>>()?
                {
                    quiz.insert(level, records);
                }
                Ok(quiz)
            }
        }

        deserializer.deserialize_map(QuizByLevelVisitor)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct QuizResult {
    pub category: String,
    pub quiz: QuizByLevel,
    pub total_questions: usize,
    pub generated_at: DateTime<Utc>,
    pub status: QuizStatus,
}
