//! Language model provider trait and result types.

use serde::{Deserialize, Serialize};

use crate::annotation::Sentence;
use crate::error::Result;

/// Language detected by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// English.
    #[serde(rename = "en")]
    En,
    /// German.
    #[serde(rename = "de")]
    De,
}

impl Language {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::De => "German",
        }
    }
}

/// Result of correcting a text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectionResult {
    /// Language the model detected in the input.
    pub detected_language: Language,
    /// The fully corrected text.
    pub corrected: String,
    /// Markdown analysis of the specific mistakes.
    pub mistakes: String,
    /// Markdown deep-dive into the relevant rules and vocabulary.
    pub knowledge: String,
}

/// Result of explaining a text sentence by sentence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationResult {
    /// Language the model detected in the input.
    pub detected_language: Language,
    /// Sentences in document order, each with its claimed annotations.
    pub sentences: Vec<Sentence>,
}

/// Role of a chat message author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

/// One message in a follow-up conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    /// Create a model message.
    pub fn model(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            content: content.into(),
        }
    }
}

/// The prior result a follow-up conversation is grounded in.
#[derive(Debug, Clone)]
pub enum ChatGrounding {
    Correction(CorrectionResult),
    Explanation(ExplanationResult),
}

/// Context for a follow-up conversation: the text the user submitted and
/// the result the conversation refers to.
#[derive(Debug, Clone)]
pub struct ChatContext {
    /// The text the user originally submitted.
    pub original: String,
    /// The result being discussed.
    pub grounding: ChatGrounding,
}

impl ChatContext {
    /// Ground a conversation in a correction result.
    pub fn correction(original: impl Into<String>, result: CorrectionResult) -> Self {
        Self {
            original: original.into(),
            grounding: ChatGrounding::Correction(result),
        }
    }

    /// Ground a conversation in an explanation result.
    pub fn explanation(original: impl Into<String>, result: ExplanationResult) -> Self {
        Self {
            original: original.into(),
            grounding: ChatGrounding::Explanation(result),
        }
    }

    /// Language of the grounding result.
    pub fn detected_language(&self) -> Language {
        match &self.grounding {
            ChatGrounding::Correction(r) => r.detected_language,
            ChatGrounding::Explanation(r) => r.detected_language,
        }
    }
}

/// Configuration for language model providers.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Model to use (e.g., "gemini-2.0-flash").
    pub model: String,

    /// Maximum tokens in response.
    pub max_tokens: usize,

    /// Temperature for generation (0.0-1.0).
    pub temperature: f64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.0-flash".to_string(),
            max_tokens: 4096,
            temperature: 0.4,
        }
    }
}

/// Trait for language model providers.
///
/// Implementations must be thread-safe (Send + Sync) so a provider can be
/// shared with the capture worker.
pub trait LanguageModel: Send + Sync {
    /// Correct a text and analyze its mistakes.
    ///
    /// # Arguments
    /// * `text` - The user's text, English or German (auto-detected)
    ///
    /// # Returns
    /// The corrected text plus markdown mistake analysis and knowledge notes
    fn correct(&self, text: &str) -> Result<CorrectionResult>;

    /// Split a text into sentences and annotate the parts worth explaining.
    ///
    /// Annotation offsets in the result are the model's claims and must be
    /// reconciled before rendering (see [`crate::annotation::repair`]).
    fn explain(&self, text: &str) -> Result<ExplanationResult>;

    /// Answer a follow-up question grounded in a prior result.
    ///
    /// # Arguments
    /// * `context` - The original text and the result being discussed
    /// * `history` - Prior turns of this conversation, oldest first
    /// * `message` - The user's new question
    fn chat(&self, context: &ChatContext, history: &[ChatMessage], message: &str)
        -> Result<String>;

    /// Get the configuration for this provider.
    fn config(&self) -> &LlmConfig;

    /// Get the name of this provider (for logging/debugging).
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_serde() {
        assert_eq!(serde_json::to_string(&Language::En).unwrap(), "\"en\"");
        let lang: Language = serde_json::from_str("\"de\"").unwrap();
        assert_eq!(lang, Language::De);
    }

    #[test]
    fn test_correction_result_camel_case() {
        let json = r#"{
            "detectedLanguage": "de",
            "corrected": "Ich bin gestern gegangen.",
            "mistakes": "**haben/sein**: ...",
            "knowledge": "Verbs of movement take *sein*."
        }"#;

        let result: CorrectionResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.detected_language, Language::De);
        assert!(result.corrected.starts_with("Ich bin"));
    }

    #[test]
    fn test_chat_context_language() {
        let context = ChatContext::correction(
            "original",
            CorrectionResult {
                detected_language: Language::En,
                corrected: "corrected".to_string(),
                mistakes: String::new(),
                knowledge: String::new(),
            },
        );
        assert_eq!(context.detected_language(), Language::En);
    }
}
