//! Chat command - follow-up questions about a stored result.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use colored::Colorize;

use glossa::history::{HistoryStore, RecordPayload};
use glossa::llm::{ChatContext, ChatMessage, CorrectionResult, ExplanationResult};

use crate::cli::LlmChoice;

use super::build_provider;

pub fn run(
    id: Option<String>,
    llm: LlmChoice,
    model: Option<String>,
    store_path: PathBuf,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = HistoryStore::open(&store_path)?;

    let record = match &id {
        Some(id) => store
            .get(id)
            .ok_or_else(|| format!("Record '{}' not found", id))?,
        None => store
            .latest()
            .ok_or("History is empty; run a correction or explanation first")?,
    };

    let context = match &record.payload {
        RecordPayload::Correction {
            original,
            corrected,
            mistakes,
            knowledge,
        } => ChatContext::correction(
            original,
            CorrectionResult {
                detected_language: record.language,
                corrected: corrected.clone(),
                mistakes: mistakes.clone(),
                knowledge: knowledge.clone(),
            },
        ),
        RecordPayload::Explanation {
            original,
            sentences,
        } => ChatContext::explanation(
            original,
            ExplanationResult {
                detected_language: record.language,
                sentences: sentences.clone(),
            },
        ),
    };

    let provider = build_provider(llm, model)?;
    if verbose {
        eprintln!("Using {} ({})", provider.name(), provider.config().model);
    }

    println!(
        "Discussing {} of \"{}\" ({}). Empty line or Ctrl-D to exit.",
        record.payload.mode_label(),
        truncate(record.payload.original(), 50),
        record.language.label()
    );

    let mut history: Vec<ChatMessage> = Vec::new();
    let stdin = io::stdin();

    loop {
        print!("{} ", ">".cyan());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let message = line.trim();
        if message.is_empty() {
            break;
        }

        let answer = provider.chat(&context, &history, message)?;
        println!("{}", answer);
        println!();

        history.push(ChatMessage::user(message));
        history.push(ChatMessage::model(answer));
    }

    Ok(())
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}…", cut)
    }
}
