/// Prompt template for quiz generation. The two substitution points are
/// `{category}` and `{difficulty}`; the literal JSON braces in the example
/// output are left untouched by the substitution.
pub const QUIZ_PROMPT_TEMPLATE: &str = r#"Generate exactly 3 multiple choice quiz questions about digital safety and responsible online behavior under the theme of Media and Information Literacy (MIL), for the topic "{category}" at {difficulty} level.

Requirements:
- Frame questions around **real-life digital scenarios** (e.g., online scams, phishing emails, fake news, password safety, data privacy, cyberbullying, social media awareness).
- Avoid technical jargon (firewalls, encryption, protocols).
- Make it understandable to the general public, including students, parents, and casual internet users.
- Each question must raise awareness about safe digital practices or dangers of digital crimes.
- Provide 4 options labeled "A", "B", "C", "D", with **only one correct answer**.
- Ensure the correct answer helps the user learn about digital safety.

Output Format:
Return ONLY valid JSON in this format (no extra text, no markdown):

[
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
]
Generate the questions now:"#;

pub fn build_quiz_prompt(category: &str, difficulty: &str) -> String {
    QUIZ_PROMPT_TEMPLATE
        .replace("{category}", category)
        .replace("{difficulty}", difficulty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_substitutes_category_and_difficulty() {
        let prompt = build_quiz_prompt("Phishing", "Beginner");

        assert!(prompt.contains("the topic \"Phishing\" at Beginner level"));
        assert!(!prompt.contains("{category}"));
        assert!(!prompt.contains("{difficulty}"));
    }

    #[test]
    fn test_prompt_keeps_json_example_intact() {
        let prompt = build_quiz_prompt("Fake News", "Advanced");

        assert!(prompt.contains("Return ONLY valid JSON"));
        assert!(prompt.contains(r#""answer": "C""#));
    }
}
