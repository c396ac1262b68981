use actix_web::{get, post, web, HttpResponse};
use chrono::Utc;
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{GenerateQuizRequest, QuizByLevel, QuizResult, QuizStatus},
    services::quiz_archive::archive_quiz_result,
};

/// Generates questions for every requested difficulty level, strictly in
/// order. A failure on any level aborts the whole request; partial results
/// are never returned.
#[post("/generate_quiz")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let category = request.category.trim().to_string();

    let mut quiz = QuizByLevel::default();
    for level in &request.difficulty_levels {
        let level = level.trim();
        log::info!("generating questions for {category} - {level}");
        let records = state.quiz_service.generate(&category, level).await?;
        quiz.insert(level, records);
    }

    let result = QuizResult {
        total_questions: quiz.total_questions(),
        category,
        quiz,
        generated_at: Utc::now(),
        status: QuizStatus::Success,
    };

    // Best-effort audit artifact; failures are logged inside and ignored.
    let _ = archive_quiz_result(&result, &state.config.archive_dir);

    Ok(HttpResponse::Ok().json(result))
}

/// Static service description.
#[get("/")]
pub async fn service_info() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Digital Guardian Quiz API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "generate_quiz": "POST /generate_quiz - Generate quiz questions",
        },
        "status": "active"
    }))
}
