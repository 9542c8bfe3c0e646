//! History record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::annotation::Sentence;
use crate::llm::{CorrectionResult, ExplanationResult, Language};

/// Payload of a history record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum RecordPayload {
    /// A correction-mode result.
    Correction {
        original: String,
        corrected: String,
        mistakes: String,
        knowledge: String,
    },
    /// An explanation-mode result.
    Explanation {
        original: String,
        sentences: Vec<Sentence>,
    },
}

impl RecordPayload {
    /// The text the user originally submitted.
    pub fn original(&self) -> &str {
        match self {
            RecordPayload::Correction { original, .. } => original,
            RecordPayload::Explanation { original, .. } => original,
        }
    }

    /// Get a human-readable mode label.
    pub fn mode_label(&self) -> &'static str {
        match self {
            RecordPayload::Correction { .. } => "correction",
            RecordPayload::Explanation { .. } => "explanation",
        }
    }
}

/// One persisted correction or explanation result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Unique identifier for this record.
    pub id: String,

    /// When the result was received.
    pub created_at: DateTime<Utc>,

    /// Language the model detected.
    pub language: Language,

    /// The stored result.
    #[serde(flatten)]
    pub payload: RecordPayload,
}

impl HistoryRecord {
    /// Create a record from a correction result.
    pub fn correction(original: impl Into<String>, result: &CorrectionResult) -> Self {
        let original = original.into();
        let created_at = Utc::now();
        Self {
            id: generate_record_id(&original, &created_at),
            created_at,
            language: result.detected_language,
            payload: RecordPayload::Correction {
                original,
                corrected: result.corrected.clone(),
                mistakes: result.mistakes.clone(),
                knowledge: result.knowledge.clone(),
            },
        }
    }

    /// Create a record from an explanation result.
    pub fn explanation(original: impl Into<String>, result: &ExplanationResult) -> Self {
        let original = original.into();
        let created_at = Utc::now();
        Self {
            id: generate_record_id(&original, &created_at),
            created_at,
            language: result.detected_language,
            payload: RecordPayload::Explanation {
                original,
                sentences: result.sentences.clone(),
            },
        }
    }
}

/// Generate a stable record ID from the submitted text and creation time.
fn generate_record_id(original: &str, created_at: &DateTime<Utc>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(original.as_bytes());
    hasher.update(created_at.to_rfc3339().as_bytes());
    let digest = hasher.finalize();
    let hex: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
    format!("rec_{}", &hex[..12])
}
