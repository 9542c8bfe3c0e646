//! Annotation and sentence types as received from the model.

use serde::{Deserialize, Serialize};

/// Category of a highlight annotation.
///
/// A closed enumeration; the model response contract permits no other
/// values, so deserialization rejects anything outside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationKind {
    /// Difficult or interesting words.
    Vocabulary,
    /// Verb tenses, cases, sentence patterns.
    Grammar,
    /// Idiomatic expressions or phrases.
    Idiom,
    /// Unusual word order or sentence construction.
    Structure,
}

impl AnnotationKind {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            AnnotationKind::Vocabulary => "Vocabulary",
            AnnotationKind::Grammar => "Grammar",
            AnnotationKind::Idiom => "Idiom",
            AnnotationKind::Structure => "Structure",
        }
    }

    /// Get the marker glyph used when rendering an expanded annotation.
    pub fn icon(&self) -> &'static str {
        match self {
            AnnotationKind::Vocabulary => "📖",
            AnnotationKind::Grammar => "✦",
            AnnotationKind::Idiom => "💬",
            AnnotationKind::Structure => "💡",
        }
    }

    /// All kinds, in display order.
    pub fn all() -> [AnnotationKind; 4] {
        [
            AnnotationKind::Vocabulary,
            AnnotationKind::Grammar,
            AnnotationKind::Idiom,
            AnnotationKind::Structure,
        ]
    }
}

/// A model-claimed highlight span with its explanatory payload.
///
/// Everything here is untrusted as received: `start` and `end` are the
/// offsets the model reported and frequently do not slice the sentence to
/// `text`. The repair engine verifies or corrects them before rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// The exact substring the model claims to be highlighting.
    pub text: String,

    /// Claimed start offset into the owning sentence.
    pub start: usize,

    /// Claimed end offset (exclusive).
    pub end: usize,

    /// Category of the annotation.
    #[serde(rename = "type")]
    pub kind: AnnotationKind,

    /// Explanation of the highlighted part, always present.
    pub explanation: String,

    /// Usage examples. Domain policy asks the model for at least two when
    /// the kind is vocabulary or idiom; this is advisory, not enforced.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
}

impl Annotation {
    /// Create a new annotation.
    pub fn new(
        text: impl Into<String>,
        start: usize,
        end: usize,
        kind: AnnotationKind,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            kind,
            explanation: explanation.into(),
            examples: Vec::new(),
        }
    }

    /// Set the usage examples.
    pub fn with_examples(mut self, examples: Vec<String>) -> Self {
        self.examples = examples;
        self
    }
}

/// One sentence of an explanation result, with its annotations in the
/// order the model produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sentence {
    /// The full sentence text.
    pub text: String,

    /// Annotations claimed for this sentence, in model order.
    #[serde(default)]
    pub annotations: Vec<Annotation>,

    /// A simpler rewording of the sentence, when the model provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simplified_expression: Option<String>,

    /// Teacher-style summary of the sentence's key difficulties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_comment: Option<String>,
}

impl Sentence {
    /// Create a sentence with no annotations.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            annotations: Vec::new(),
            simplified_expression: None,
            teacher_comment: None,
        }
    }

    /// Set the annotations.
    pub fn with_annotations(mut self, annotations: Vec<Annotation>) -> Self {
        self.annotations = annotations;
        self
    }

    /// Set the simplified expression.
    pub fn with_simplified_expression(mut self, text: impl Into<String>) -> Self {
        self.simplified_expression = Some(text.into());
        self
    }

    /// Set the teacher comment.
    pub fn with_teacher_comment(mut self, text: impl Into<String>) -> Self {
        self.teacher_comment = Some(text.into());
        self
    }
}

/// An annotation whose offsets have been verified against the sentence.
///
/// `identity` is the annotation's position in the model's original list and
/// stays stable across sorting and filtering; it is the key the UI uses for
/// expansion state. The offsets are byte offsets guaranteed to satisfy
/// `&sentence[start..end] == text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepairedAnnotation {
    /// Position of the source annotation in the model's original list.
    pub identity: usize,

    /// Highlighted substring (trimmed during repair when necessary).
    pub text: String,

    /// Verified start offset into the sentence.
    pub start: usize,

    /// Verified end offset (exclusive). Always greater than `start`.
    pub end: usize,

    /// Category of the annotation.
    pub kind: AnnotationKind,

    /// Explanation of the highlighted part.
    pub explanation: String,

    /// Usage examples.
    pub examples: Vec<String>,
}

impl RepairedAnnotation {
    /// The verified byte range of this annotation.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(AnnotationKind::Vocabulary.label(), "Vocabulary");
        assert_eq!(AnnotationKind::Grammar.label(), "Grammar");
        assert_eq!(AnnotationKind::Idiom.label(), "Idiom");
        assert_eq!(AnnotationKind::Structure.label(), "Structure");
    }

    #[test]
    fn test_kind_serde_lowercase() {
        let json = serde_json::to_string(&AnnotationKind::Vocabulary).unwrap();
        assert_eq!(json, "\"vocabulary\"");

        let kind: AnnotationKind = serde_json::from_str("\"grammar\"").unwrap();
        assert_eq!(kind, AnnotationKind::Grammar);
    }

    #[test]
    fn test_kind_rejects_unknown_values() {
        let result: std::result::Result<AnnotationKind, _> =
            serde_json::from_str("\"spelling\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_annotation_deserializes_model_json() {
        let json = r#"{
            "text": "have went",
            "start": 2,
            "end": 11,
            "type": "grammar",
            "explanation": "Use the past participle 'gone' after 'have'.",
            "examples": ["I have gone to the store.", "She has gone home."]
        }"#;

        let ann: Annotation = serde_json::from_str(json).unwrap();
        assert_eq!(ann.text, "have went");
        assert_eq!(ann.kind, AnnotationKind::Grammar);
        assert_eq!(ann.examples.len(), 2);
    }

    #[test]
    fn test_annotation_examples_default_empty() {
        let json = r#"{"text":"der","start":0,"end":3,"type":"grammar","explanation":"Article."}"#;
        let ann: Annotation = serde_json::from_str(json).unwrap();
        assert!(ann.examples.is_empty());
    }

    #[test]
    fn test_sentence_camel_case_fields() {
        let json = r#"{
            "text": "Es zieht wie Hechtsuppe.",
            "annotations": [],
            "simplifiedExpression": "Es ist sehr zugig.",
            "teacherComment": "A fixed idiom; learn it as a whole."
        }"#;

        let sentence: Sentence = serde_json::from_str(json).unwrap();
        assert_eq!(
            sentence.simplified_expression.as_deref(),
            Some("Es ist sehr zugig.")
        );
        assert!(sentence.teacher_comment.is_some());
    }
}
