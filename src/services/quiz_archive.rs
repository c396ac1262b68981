use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::dto::QuizResult;

static UNSAFE_CHARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\-.]").expect("valid filename sanitizer pattern"));

/// Best-effort dump of a finished quiz to disk as an audit artifact. The file
/// is never read back; failures are logged and must not affect the response.
pub fn archive_quiz_result(result: &QuizResult, dir: &Path) -> Option<PathBuf> {
    let lowered = result.category.to_lowercase();
    let safe_category = UNSAFE_CHARS_RE.replace_all(&lowered, "_");
    let path = dir.join(format!("quiz_{}_{}.json", safe_category, Utc::now().timestamp()));

    let json = match serde_json::to_string_pretty(result) {
        Ok(json) => json,
        Err(err) => {
            log::warn!("could not serialize quiz for archiving: {err}");
            return None;
        }
    };

    match fs::write(&path, json) {
        Ok(()) => {
            log::info!("quiz saved to {}", path.display());
            Some(path)
        }
        Err(err) => {
            log::warn!("could not save quiz to {}: {err}", path.display());
            None
        }
    }
}
