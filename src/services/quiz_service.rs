use std::sync::Arc;
use std::time::Duration;

use crate::constants::quiz_prompt::build_quiz_prompt;
use crate::errors::{AppError, AppResult};
use crate::models::domain::QuestionRecord;
use crate::services::extractor::extract_question_records;
use crate::services::model_service::TextGenerator;

/// Retry budget for one (category, difficulty) generation. Kept as a value so
/// tests can shrink the attempt count or check the backoff schedule directly.
#[derive(Clone, Copy, Debug)]
pub struct RetryPolicy {
    pub max_attempts: u32,
}

impl RetryPolicy {
    /// Delay before retrying after the given zero-based failed attempt:
    /// 1s after the first failure, 2s after the second, and so on.
    pub fn backoff(&self, attempt: u32) -> Duration {
        Duration::from_secs(1 << attempt)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_attempts: 3 }
    }
}

pub struct QuizService {
    generator: Arc<dyn TextGenerator>,
    retry: RetryPolicy,
}

impl QuizService {
    pub fn new(generator: Arc<dyn TextGenerator>, retry: RetryPolicy) -> Self {
        Self { generator, retry }
    }

    /// Generates questions for one (category, difficulty) pair, retrying
    /// transient failures up to the policy budget with exponential backoff.
    pub async fn generate(
        &self,
        category: &str,
        difficulty: &str,
    ) -> AppResult<Vec<QuestionRecord>> {
        let prompt = build_quiz_prompt(category, difficulty);

        let mut last_error = None;
        for attempt in 0..self.retry.max_attempts {
            if attempt > 0 {
                tokio::time::sleep(self.retry.backoff(attempt - 1)).await;
            }

            match self.attempt(&prompt).await {
                Ok(records) => {
                    log::info!(
                        "generated {} questions for {category} - {difficulty}",
                        records.len()
                    );
                    return Ok(records);
                }
                Err(err) if err.is_retryable() => {
                    log::warn!(
                        "attempt {} failed for {category} {difficulty}: {err}",
                        attempt + 1
                    );
                    last_error = Some(err);
                }
                Err(err) => return Err(err),
            }
        }

        let cause = last_error
            .map(|err| err.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        Err(AppError::Generation(format!(
            "failed to generate quiz after {} attempts: {cause}",
            self.retry.max_attempts
        )))
    }

    async fn attempt(&self, prompt: &str) -> AppResult<Vec<QuestionRecord>> {
        let text = self.generator.generate_text(prompt).await?;
        let records = extract_question_records(&text);
        if records.is_empty() {
            return Err(AppError::ExtractionEmpty);
        }
        Ok(records)
    }
}
