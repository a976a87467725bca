use web_sys::Document;

use crate::error::UiError;
use crate::events::{query_all, Controller, Subscription};

/// Keys that activate a focused control the same way a click does.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

pub fn faq_question_id(index: usize) -> String {
    format!("faq-question-{}", index)
}

pub fn faq_answer_id(index: usize) -> String {
    format!("faq-answer-{}", index)
}

pub fn aria_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Fills in labels and focusability the markup may have left out.
pub struct AccessibilityEnhancer;

impl Controller for AccessibilityEnhancer {
    fn name(&self) -> &'static str {
        "Accessibility"
    }

    fn mount(&self, document: &Document) -> Result<Vec<Subscription>, UiError> {
        if let Some(toggle) = document.get_element_by_id("themeToggle") {
            if !toggle.has_attribute("aria-label") {
                let _ = toggle.set_attribute("aria-label", "Toggle dark mode");
            }
        }

        for question in query_all(document, ".faq-question")? {
            if !question.has_attribute("tabindex") {
                let _ = question.set_attribute("tabindex", "0");
            }
        }

        if let Some(results) = document.get_element_by_id("roadmapResults") {
            let _ = results.set_attribute("aria-live", "polite");
        }

        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Enter", true)]
    #[case(" ", true)]
    #[case("Tab", false)]
    #[case("Escape", false)]
    #[case("a", false)]
    fn activation_keys(#[case] key: &str, #[case] expected: bool) {
        assert_eq!(is_activation_key(key), expected);
    }

    #[test]
    fn question_and_answer_ids_pair_up() {
        assert_eq!(faq_question_id(2), "faq-question-2");
        assert_eq!(faq_answer_id(2), "faq-answer-2");
    }

    #[test]
    fn aria_flags() {
        assert_eq!(aria_bool(true), "true");
        assert_eq!(aria_bool(false), "false");
    }
}
