use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::QuestionRecord;

static CODE_FENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^```json\s*|\s*```$").expect("valid code fence pattern"));

static QUESTION_INDEX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\d+\.\s*").expect("valid question index pattern"));

static OPTION_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[A-D]\)\s*").expect("valid option marker pattern"));

static OPTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-D])\)\s*(.*)").expect("valid option pattern"));

static ANSWER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Answer:\s*([A-D])").expect("valid answer pattern"));

/// Extracts question records from a model response. The model is prompted to
/// return a pure JSON array but is not trusted to comply, so a strict JSON
/// parse is tried first and numbered-prose scanning is the fallback. Total
/// failure yields an empty vec, never an error.
pub fn extract_question_records(raw_text: &str) -> Vec<QuestionRecord> {
    let mut text = raw_text.trim().to_string();

    if text.starts_with("```") {
        text = CODE_FENCE_RE.replace_all(&text, "").trim().to_string();
    }

    if text.starts_with('[') && text.ends_with(']') {
        match serde_json::from_str::<Vec<QuestionRecord>>(&text) {
            Ok(records) if records.iter().all(QuestionRecord::is_valid) => return records,
            Ok(_) => {
                log::debug!("strict JSON path yielded invalid records, falling back to line scan");
            }
            Err(err) => {
                log::debug!("JSON parsing failed, falling back to line scan: {err}");
            }
        }
    }

    let block_starts: Vec<(usize, usize)> = QUESTION_INDEX_RE
        .find_iter(&text)
        .map(|m| (m.start(), m.end()))
        .collect();

    let mut records = Vec::new();
    for (i, &(_, body_start)) in block_starts.iter().enumerate() {
        let body_end = block_starts
            .get(i + 1)
            .map(|&(next_start, _)| next_start)
            .unwrap_or(text.len());

        match parse_question_block(&text[body_start..body_end]) {
            Some(record) => records.push(record),
            None => log::debug!("skipping question block {}: too few options", i + 1),
        }
    }

    records
}

/// Parses one numbered block into a record. Lines before the first option
/// marker form the question text; a block without any option marker or with
/// fewer than two options cannot form a valid record.
fn parse_question_block(block: &str) -> Option<QuestionRecord> {
    let lines: Vec<&str> = block.trim().lines().collect();

    let option_start = lines.iter().position(|line| OPTION_MARKER_RE.is_match(line))?;

    let question = lines[..option_start]
        .iter()
        .map(|line| line.trim())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string();

    let mut options = BTreeMap::new();
    let mut answer = None;
    for line in &lines[option_start..] {
        let line = line.trim();
        if let Some(caps) = OPTION_RE.captures(line) {
            options.insert(caps[1].to_string(), caps[2].trim().to_string());
        }
        // An answer token may share a line with an option or sit on its own;
        // the first one found wins.
        if answer.is_none() {
            if let Some(caps) = ANSWER_RE.captures(line) {
                answer = Some(caps[1].to_uppercase());
            }
        }
    }

    let record = QuestionRecord {
        question,
        options,
        answer,
    };
    record.is_valid().then_some(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{sample_quiz_json, sample_quiz_prose};

    #[test]
    fn test_strict_path_round_trips_valid_json() {
        let json = sample_quiz_json();
        let records = extract_question_records(&json);

        assert_eq!(records.len(), 3);
        assert_eq!(serde_json::to_value(&records).unwrap(), serde_json::from_str::<serde_json::Value>(&json).unwrap());
    }

    #[test]
    fn test_strict_path_preserves_order() {
        let records = extract_question_records(&sample_quiz_json());

        assert!(records[0].question.contains("lottery"));
        assert!(records[1].question.contains("password"));
        assert!(records[2].question.contains("news article"));
    }

    #[test]
    fn test_fenced_json_matches_unfenced_result() {
        let json = sample_quiz_json();
        let fenced = format!("```json\n{json}\n```");
        let plain_fenced = format!("```\n{json}\n```");

        assert_eq!(extract_question_records(&fenced), extract_question_records(&json));
        assert_eq!(
            extract_question_records(&plain_fenced),
            extract_question_records(&json)
        );
    }

    #[test]
    fn test_prose_blocks_are_parsed() {
        let records = extract_question_records(&sample_quiz_prose());

        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].question,
            "You receive an email saying you won a lottery you never joined. What should you do?"
        );
        assert_eq!(records[0].options.len(), 4);
        assert_eq!(records[0].options["C"], "Delete or report the email");
        assert_eq!(records[0].answer.as_deref(), Some("C"));
    }

    #[test]
    fn test_multi_line_question_text_is_joined() {
        let text = "1. A question that spans\nmore than one line?\nA) yes\nB) no\nAnswer: A";
        let records = extract_question_records(text);

        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].question,
            "A question that spans more than one line?"
        );
    }

    #[test]
    fn test_answer_absent_when_no_token() {
        let text = "1. Is an answer required?\nA) yes\nB) no";
        let records = extract_question_records(text);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].answer, None);
    }

    #[test]
    fn test_first_answer_token_wins() {
        let text = "1. Which answer sticks?\nA) first Answer: A\nB) second\nAnswer: B";
        let records = extract_question_records(text);

        assert_eq!(records[0].answer.as_deref(), Some("A"));
    }

    #[test]
    fn test_answer_token_is_case_insensitive_and_uppercased() {
        let text = "1. Case check?\nA) yes\nB) no\nanswer: b";
        let records = extract_question_records(text);

        assert_eq!(records[0].answer.as_deref(), Some("B"));
    }

    #[test]
    fn test_block_with_one_option_is_dropped() {
        let text = "1. Too few options?\nA) only one\n2. Enough options?\nA) yes\nB) no\nAnswer: A";
        let records = extract_question_records(text);

        assert_eq!(records.len(), 1);
        assert!(records[0].question.contains("Enough"));
    }

    #[test]
    fn test_block_without_option_markers_is_dropped() {
        let text = "1. Just some prose with no options at all.\nStill no options here.";
        assert!(extract_question_records(text).is_empty());
    }

    #[test]
    fn test_output_never_exceeds_block_count() {
        let text = "1. One?\nA) a\nB) b\n2. Two?\nA) a\nB) b\n3. Three, no options";
        assert!(extract_question_records(text).len() <= 3);
    }

    #[test]
    fn test_empty_input_returns_empty() {
        assert!(extract_question_records("").is_empty());
    }

    #[test]
    fn test_non_quiz_text_returns_empty() {
        assert!(extract_question_records("not a quiz at all").is_empty());
    }

    #[test]
    fn test_malformed_json_falls_back_to_line_scan() {
        let text = "[not valid json\n1. Fallback question?\nA) yes\nB) no\nAnswer: A]";
        let records = extract_question_records(text);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].question, "Fallback question?");
    }

    #[test]
    fn test_json_with_invalid_records_is_not_trusted() {
        // Parses as JSON objects but lacks the question/options shape.
        let text = r#"[{"foo": "bar"}, {"baz": 1}]"#;
        assert!(extract_question_records(text).is_empty());
    }

    #[test]
    fn test_indented_option_markers_are_recognized() {
        let text = "1. Indented options?\n   A) yes\n   B) no\n   Answer: B";
        let records = extract_question_records(text);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].options["A"], "yes");
        assert_eq!(records[0].answer.as_deref(), Some("B"));
    }
}
