use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::{GeminiClient, QuizService, RetryPolicy, TextGenerator},
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let generator = Arc::new(GeminiClient::new(&config)?);
        Ok(Self::with_generator(config, generator))
    }

    /// Builds the state around an arbitrary generator. This is the injection
    /// seam integration tests use to stub out the remote API.
    pub fn with_generator(config: Config, generator: Arc<dyn TextGenerator>) -> Self {
        let quiz_service = Arc::new(QuizService::new(generator, RetryPolicy::default()));
        Self {
            quiz_service,
            config: Arc::new(config),
        }
    }
}
