pub mod extractor;
pub mod model_service;
pub mod quiz_archive;
pub mod quiz_service;

pub use model_service::{GeminiClient, TextGenerator};
pub use quiz_service::{QuizService, RetryPolicy};
