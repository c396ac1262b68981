use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,

    #[serde(default = "default_difficulty_levels")]
    #[validate(length(min = 1, message = "At least one difficulty level is required"))]
    pub difficulty_levels: Vec<String>,
}

fn default_difficulty_levels() -> Vec<String> {
    vec![
        "Beginner".to_string(),
        "Intermediate".to_string(),
        "Advanced".to_string(),
    ]
}
