//! Command implementations.

pub mod chat;
pub mod correct;
pub mod explain;
pub mod history;
pub mod watch;

use std::fs;
use std::path::PathBuf;

use glossa::llm::{GeminiProvider, LanguageModel, LlmConfig, MockProvider};
use glossa::GlossaError;

use crate::cli::LlmChoice;

/// Build the provider selected on the command line.
pub fn build_provider(
    choice: LlmChoice,
    model: Option<String>,
) -> Result<Box<dyn LanguageModel>, Box<dyn std::error::Error>> {
    let mut config = LlmConfig::default();
    if let Some(model) = model {
        config.model = model;
    }

    match choice {
        LlmChoice::Gemini => {
            let key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
            Ok(Box::new(GeminiProvider::with_config(key, config)?))
        }
        LlmChoice::Mock => Ok(Box::new(MockProvider::with_config(config))),
    }
}

/// Resolve the input text from a positional argument or a file.
pub fn read_input(
    text: Option<String>,
    file: Option<PathBuf>,
) -> Result<String, Box<dyn std::error::Error>> {
    let input = match (text, file) {
        (Some(text), None) => text,
        (None, Some(path)) => fs::read_to_string(&path).map_err(|source| GlossaError::Io {
            path: path.clone(),
            source,
        })?,
        (Some(_), Some(_)) => return Err("Give either TEXT or --file, not both".into()),
        (None, None) => return Err("No input. Give TEXT or --file.".into()),
    };

    let input = input.trim().to_string();
    if input.is_empty() {
        return Err("Input text is empty".into());
    }
    Ok(input)
}
