//! Mock language model for testing.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::annotation::{Annotation, AnnotationKind, Sentence};
use crate::error::Result;

use super::provider::{
    ChatContext, ChatGrounding, ChatMessage, CorrectionResult, ExplanationResult, Language,
    LanguageModel, LlmConfig,
};

/// Sentence boundary pattern: a run of text up to closing punctuation.
static SENTENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^.!?]+[.!?]*").expect("valid sentence regex"));

/// Common learner errors the mock knows how to fix.
const FIXES: &[(&str, &str)] = &[
    ("have went", "went"),
    ("more better", "better"),
    ("informations", "information"),
    ("Ich habe gegangen", "Ich bin gegangen"),
];

/// Words that mark a text as German for the mock's detection heuristic.
const GERMAN_MARKERS: &[&str] = &["der ", "die ", "das ", "und ", "ich ", "nicht ", "habe "];

/// Mock provider that returns deterministic responses for testing.
///
/// Corrections apply a fixed replacement table; explanations split on
/// sentence punctuation and annotate with offsets that are consistent
/// with the sentence text. Tests exercising the repair path build their
/// inconsistent annotations by hand.
pub struct MockProvider {
    config: LlmConfig,
}

impl MockProvider {
    /// Create a new mock provider.
    pub fn new() -> Self {
        Self {
            config: LlmConfig {
                model: "mock".to_string(),
                ..LlmConfig::default()
            },
        }
    }

    /// Create with custom configuration.
    pub fn with_config(config: LlmConfig) -> Self {
        Self { config }
    }

    fn detect_language(text: &str) -> Language {
        let lower = text.to_lowercase();
        let is_german = lower.chars().any(|c| "äöüß".contains(c))
            || GERMAN_MARKERS.iter().any(|m| lower.contains(m));
        if is_german {
            Language::De
        } else {
            Language::En
        }
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageModel for MockProvider {
    fn correct(&self, text: &str) -> Result<CorrectionResult> {
        let mut corrected = text.to_string();
        let mut applied = Vec::new();

        for (wrong, right) in FIXES {
            if corrected.contains(wrong) {
                corrected = corrected.replace(wrong, right);
                applied.push(format!("- `{}` should be `{}`", wrong, right));
            }
        }

        let mistakes = if applied.is_empty() {
            "No mistakes found.".to_string()
        } else {
            applied.join("\n")
        };

        Ok(CorrectionResult {
            detected_language: Self::detect_language(text),
            corrected,
            mistakes,
            knowledge: "**Tip**: review the corrected forms above and compare \
                        them with your original wording."
                .to_string(),
        })
    }

    fn explain(&self, text: &str) -> Result<ExplanationResult> {
        let sentences = SENTENCE_RE
            .find_iter(text)
            .map(|m| m.as_str().trim())
            .filter(|s| !s.is_empty())
            .map(|sentence_text| {
                let mut annotations = Vec::new();

                // Annotate the first long word as vocabulary.
                if let Some(word) = sentence_text
                    .split_whitespace()
                    .find(|w| w.chars().count() >= 7)
                {
                    let start = sentence_text.find(word).unwrap_or(0);
                    annotations.push(
                        Annotation::new(
                            word,
                            start,
                            start + word.len(),
                            AnnotationKind::Vocabulary,
                            format!("'{}' is a longer word worth learning.", word),
                        )
                        .with_examples(vec![
                            format!("I used '{}' in a sentence.", word),
                            format!("'{}' appears often in writing.", word),
                        ]),
                    );
                }

                // Annotate a known grammar trouble spot.
                if let Some(start) = sentence_text.find("went") {
                    annotations.push(Annotation::new(
                        "went",
                        start,
                        start + "went".len(),
                        AnnotationKind::Grammar,
                        "Simple past of 'to go'; do not combine with 'have'.",
                    ));
                }

                Sentence::new(sentence_text)
                    .with_annotations(annotations)
                    .with_teacher_comment("Read the sentence aloud and note the highlighted parts.")
            })
            .collect();

        Ok(ExplanationResult {
            detected_language: Self::detect_language(text),
            sentences,
        })
    }

    fn chat(
        &self,
        context: &ChatContext,
        history: &[ChatMessage],
        message: &str,
    ) -> Result<String> {
        let mode = match &context.grounding {
            ChatGrounding::Correction(_) => "correction",
            ChatGrounding::Explanation(_) => "explanation",
        };
        Ok(format!(
            "Regarding your {} of \"{}\" (turn {}): {}",
            mode,
            context.original,
            history.len() + 1,
            message
        ))
    }

    fn config(&self) -> &LlmConfig {
        &self.config
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_correct_applies_known_fix() {
        let provider = MockProvider::new();
        let result = provider.correct("I have went to the store.").unwrap();

        assert_eq!(result.corrected, "I went to the store.");
        assert!(result.mistakes.contains("have went"));
        assert_eq!(result.detected_language, Language::En);
    }

    #[test]
    fn test_mock_correct_clean_text() {
        let provider = MockProvider::new();
        let result = provider.correct("All fine here.").unwrap();

        assert_eq!(result.corrected, "All fine here.");
        assert_eq!(result.mistakes, "No mistakes found.");
    }

    #[test]
    fn test_mock_detects_german() {
        let provider = MockProvider::new();
        let result = provider.correct("Ich habe gegangen und gelacht.").unwrap();
        assert_eq!(result.detected_language, Language::De);
        assert_eq!(result.corrected, "Ich bin gegangen und gelacht.");
    }

    #[test]
    fn test_mock_explain_splits_sentences() {
        let provider = MockProvider::new();
        let result = provider
            .explain("I have went home. The weather was wonderful!")
            .unwrap();

        assert_eq!(result.sentences.len(), 2);
        assert_eq!(result.sentences[0].text, "I have went home.");
        assert_eq!(result.sentences[1].text, "The weather was wonderful!");
    }

    #[test]
    fn test_mock_explain_offsets_are_consistent() {
        let provider = MockProvider::new();
        let result = provider
            .explain("I have went to the store yesterday.")
            .unwrap();

        for sentence in &result.sentences {
            for ann in &sentence.annotations {
                assert_eq!(&sentence.text[ann.start..ann.end], ann.text);
            }
        }
    }

    #[test]
    fn test_mock_explain_vocabulary_has_examples() {
        let provider = MockProvider::new();
        let result = provider.explain("The magnificent castle stood tall.").unwrap();

        let vocab: Vec<_> = result.sentences[0]
            .annotations
            .iter()
            .filter(|a| a.kind == AnnotationKind::Vocabulary)
            .collect();
        assert_eq!(vocab.len(), 1);
        assert!(vocab[0].examples.len() >= 2);
    }

    #[test]
    fn test_mock_chat_is_deterministic() {
        let provider = MockProvider::new();
        let context = ChatContext::correction(
            "text",
            CorrectionResult {
                detected_language: Language::En,
                corrected: "text".to_string(),
                mistakes: String::new(),
                knowledge: String::new(),
            },
        );

        let a = provider.chat(&context, &[], "why?").unwrap();
        let b = provider.chat(&context, &[], "why?").unwrap();
        assert_eq!(a, b);
    }
}
