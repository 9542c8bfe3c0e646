//! Language model integration for correction, explanation, and chat.
//!
//! The remote model is an opaque collaborator: it takes text and returns
//! either a corrected version with prose analysis or a per-sentence set of
//! highlight annotations. Nothing returned here is trusted structurally;
//! annotation offsets in particular go through
//! [`crate::annotation::repair`] before rendering.
//!
//! # Supported Providers
//!
//! - **Gemini** - Google Gemini models via API (requires `GEMINI_API_KEY`)
//! - **Mock** - deterministic responses, no network, for tests and demos
//!
//! # Example
//!
//! ```no_run
//! use glossa::llm::{GeminiProvider, LanguageModel};
//!
//! let provider = GeminiProvider::from_env().unwrap();
//! let result = provider.correct("I have went to the store.").unwrap();
//! println!("{}", result.corrected);
//! ```

mod gemini;
mod mock;
mod prompts;
mod provider;

pub use gemini::GeminiProvider;
pub use mock::MockProvider;
pub use provider::{
    ChatContext, ChatGrounding, ChatMessage, ChatRole, CorrectionResult, ExplanationResult,
    Language, LanguageModel, LlmConfig,
};
