//! Glossa: LLM-assisted language tutor for English and German text.
//!
//! Glossa sends user text to a remote language model and renders either a
//! corrected version with a word-level diff or a per-sentence set of
//! pedagogical highlight annotations. Model output is untrusted: claimed
//! annotation offsets are verified and repaired against the literal
//! sentence text before anything is rendered.
//!
//! # Core Principles
//!
//! - **Untrusted offsets**: every model-claimed span is verified against
//!   ground truth and relocated or dropped, never rendered as-is
//! - **Best effort**: one bad annotation never breaks the rest of a
//!   sentence; reconciliation failures are a policy, not an error
//! - **Results survive**: a failed history write never discards a result
//!   the user already received
//!
//! # Example
//!
//! ```
//! use glossa::annotation::{compose, repair};
//! use glossa::llm::{LanguageModel, MockProvider};
//!
//! let provider = MockProvider::new();
//! let result = provider.explain("I have went to the store.").unwrap();
//!
//! for sentence in &result.sentences {
//!     let repaired = repair(&sentence.text, &sentence.annotations);
//!     let segments = compose(&sentence.text, &repaired);
//!     let rebuilt: String = segments.iter().map(|s| s.text()).collect();
//!     assert_eq!(rebuilt, sentence.text);
//! }
//! ```

pub mod annotation;
pub mod capture;
pub mod diff;
pub mod error;
pub mod history;
pub mod llm;

pub use annotation::{
    compose, repair, Annotation, AnnotationKind, RepairedAnnotation, Segment, Selection, Sentence,
};
pub use capture::{CaptureEvent, CaptureMode, CaptureQueue};
pub use diff::{diff_words, DiffPart};
pub use error::{GlossaError, Result};
pub use history::{HistoryRecord, HistoryStore, RecordPayload, PAGE_SIZE};
pub use llm::{
    ChatContext, ChatGrounding, ChatMessage, ChatRole, CorrectionResult, ExplanationResult,
    GeminiProvider, Language, LanguageModel, LlmConfig, MockProvider,
};
