//! Prompt templates for model interactions.

use super::provider::{ChatContext, ChatGrounding, Language};

/// System prompt shared by correction and explanation requests.
pub fn system_prompt() -> &'static str {
    "You are a world-class linguistic expert and language tutor for German \
     and English. You keep a simple, direct approach and enrich feedback \
     with practical examples that clarify the linguistic points."
}

/// Build the prompt for a correction request.
pub fn correction_prompt(text: &str) -> String {
    format!(
        r#"Task:
1. Detect whether the input text is English or German.
2. Correct the text for grammar, punctuation, and style.
3. Analyze the specific mistakes (grammar, vocabulary, false friends) and explain WHY each is wrong.
4. Provide knowledge notes: relevant grammar rules, vocabulary nuances, and 2-3 full example sentences per key correction.

Language rule:
- German input -> all feedback in German.
- English input -> all feedback in English.

Formatting:
- Use Markdown in the analysis fields: **bold** for key terms, backticks for quoted words and examples, bullet points for lists.
- Separate distinct errors or knowledge points with blank lines.

RETURN JSON ONLY, no markdown code fences around the JSON:
{{
  "detectedLanguage": "en" or "de",
  "corrected": "The fully corrected text",
  "mistakes": "Detailed analysis of each mistake",
  "knowledge": "Deeper notes on the rules involved"
}}

Text to correct: "{text}""#
    )
}

/// Build the prompt for an explanation request.
pub fn explanation_prompt(text: &str) -> String {
    format!(
        r#"Task:
1. Detect whether the input text is English or German.
2. Split the text into individual sentences.
3. For each sentence, identify 2-4 parts worth explaining:
   - "vocabulary": difficult or interesting words
   - "grammar": verb tenses, cases, sentence patterns
   - "idiom": idiomatic expressions or phrases
   - "structure": unusual word order or construction
4. For each annotated part provide the exact text to highlight, its start and end character positions WITHIN THAT SENTENCE (not the whole input), the type, a clear explanation in simple everyday language, and usage examples. Vocabulary and idiom annotations MUST carry at least 2 examples.
5. Per sentence, optionally provide "simplifiedExpression" (a simpler rewording, only when the sentence is complex) and "teacherComment" (a teacher's summary of the key difficulties).

Language rule:
- German input -> explanations in German.
- English input -> explanations in English.

CRITICAL: positions are relative to each sentence.

RETURN JSON ONLY, no markdown code fences around the JSON:
{{
  "detectedLanguage": "en" or "de",
  "sentences": [
    {{
      "text": "The full sentence text.",
      "simplifiedExpression": "optional simpler rewording",
      "teacherComment": "optional teacher summary",
      "annotations": [
        {{
          "text": "part to highlight",
          "start": 10,
          "end": 25,
          "type": "vocabulary",
          "explanation": "Simple explanation",
          "examples": ["Example 1", "Example 2"]
        }}
      ]
    }}
  ]
}}

Text to explain: "{text}""#
    )
}

/// Build the system prompt for a follow-up conversation.
pub fn chat_system_prompt(context: &ChatContext) -> String {
    let language = match context.detected_language() {
        Language::De => "German",
        Language::En => "English",
    };

    let grounding = match &context.grounding {
        ChatGrounding::Correction(result) => format!(
            "- Corrected text: \"{}\"\n- Analysis: {}",
            result.corrected, result.mistakes
        ),
        ChatGrounding::Explanation(result) => {
            let summary = result
                .sentences
                .iter()
                .map(|s| {
                    s.annotations
                        .iter()
                        .map(|a| format!("{}: {}", a.text, a.explanation))
                        .collect::<Vec<_>>()
                        .join("; ")
                })
                .collect::<Vec<_>>()
                .join(" | ");
            format!("- Annotations: {summary}")
        }
    };

    format!(
        r#"You are a helpful language tutor assisting a user with follow-up questions about a result they just received.

Context:
- Original text: "{original}"
{grounding}

Answer the user's questions about the corrections, grammar rules, or vocabulary. Be concise, use Markdown, and reply in {language}. Keep answers short unless asked for detail."#,
        original = context.original,
    )
}

/// Canned model acknowledgement that opens a chat history.
pub fn chat_ack(context: &ChatContext) -> String {
    format!(
        "Understood. I am ready to answer questions about this result in {}.",
        context.detected_language().label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::CorrectionResult;

    #[test]
    fn test_correction_prompt_embeds_text() {
        let prompt = correction_prompt("I have went home.");
        assert!(prompt.contains("I have went home."));
        assert!(prompt.contains("detectedLanguage"));
    }

    #[test]
    fn test_explanation_prompt_demands_sentence_relative_positions() {
        let prompt = explanation_prompt("Es zieht.");
        assert!(prompt.contains("relative to each sentence"));
        assert!(prompt.contains("\"type\": \"vocabulary\""));
    }

    #[test]
    fn test_chat_system_prompt_uses_detected_language() {
        let context = ChatContext::correction(
            "Ich habe gegangen.",
            CorrectionResult {
                detected_language: crate::llm::Language::De,
                corrected: "Ich bin gegangen.".to_string(),
                mistakes: "haben vs sein".to_string(),
                knowledge: String::new(),
            },
        );
        let prompt = chat_system_prompt(&context);
        assert!(prompt.contains("reply in German"));
        assert!(prompt.contains("Ich bin gegangen."));
    }
}
