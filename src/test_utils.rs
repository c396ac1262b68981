#[cfg(test)]
pub mod fixtures {
    use std::collections::BTreeMap;

    use crate::models::domain::QuestionRecord;

    /// Builds a record from (label, text) option pairs.
    pub fn question_record(question: &str, options: &[(&str, &str)]) -> QuestionRecord {
        QuestionRecord {
            question: question.to_string(),
            options: options
                .iter()
                .map(|(label, text)| (label.to_string(), text.to_string()))
                .collect::<BTreeMap<_, _>>(),
            answer: None,
        }
    }

    /// The 3-question JSON array the prompt documents as the expected output.
    pub fn sample_quiz_json() -> String {
        r#"[
  {
    "question": "You receive an email saying you won a lottery you never joined. What should you do?",
    "options": {"A": "Click the link immediately", "B": "Reply with your bank details", "C": "Delete or report the email", "D": "Forward it to friends"},
    "answer": "C"
  },
  {
    "question": "When creating a password for your social media account, which option is safest?",
    "options": {"A": "123456", "B": "Your name and birthdate", "C": "A mix of letters, numbers, and symbols", "D": "Password"},
    "answer": "C"
  },
  {
    "question": "If you see a news article on social media that seems unbelievable, what should you do first?",
    "options": {"A": "Share it quickly", "B": "Check if it's from a reliable source", "C": "Trust it because a friend posted it", "D": "Ignore all news"},
    "answer": "B"
  }
]"#
        .to_string()
    }

    /// The same content as numbered prose, the way a non-compliant model
    /// tends to render it.
    pub fn sample_quiz_prose() -> String {
        "Here are your questions:\n\
         1. You receive an email saying you won a lottery you never joined. What should you do?\n\
         A) Click the link immediately\n\
         B) Reply with your bank details\n\
         C) Delete or report the email\n\
         D) Forward it to friends\n\
         Answer: C\n\
         2. When creating a password for your social media account, which option is safest?\n\
         A) 123456\n\
         B) Your name and birthdate\n\
         C) A mix of letters, numbers, and symbols\n\
         D) Password\n\
         Answer: C\n"
            .to_string()
    }
}
