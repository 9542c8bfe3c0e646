//! History command - browse, show, and delete stored results.

use std::path::PathBuf;

use colored::Colorize;

use glossa::history::{HistoryStore, RecordPayload};
use glossa::llm::{CorrectionResult, ExplanationResult};

use crate::cli::HistoryAction;
use crate::render;

pub fn run(
    action: HistoryAction,
    store_path: PathBuf,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = HistoryStore::open(&store_path)?;

    match action {
        HistoryAction::List { page } => list(&store, page),
        HistoryAction::Show { id, json } => show(&store, &id, json)?,
        HistoryAction::Delete { id } => {
            store.delete(&id)?;
            println!("Deleted {}", id);
        }
    }

    Ok(())
}

fn list(store: &HistoryStore, page: usize) {
    let records = store.page(page);

    if records.is_empty() {
        println!("No history on page {}.", page);
        return;
    }

    for record in &records {
        let preview: String = record.payload.original().chars().take(60).collect();
        println!(
            "{}  {}  {:12}  {}",
            record.id.cyan(),
            record
                .created_at
                .with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .dimmed(),
            record.payload.mode_label(),
            preview
        );
    }
    println!();
    println!(
        "{} of {} records (page {})",
        records.len(),
        store.len(),
        page
    );
}

fn show(store: &HistoryStore, id: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let record = store
        .get(id)
        .ok_or_else(|| format!("Record '{}' not found", id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(record)?);
        return Ok(());
    }

    println!(
        "{}  {}",
        record.id.cyan().bold(),
        record
            .created_at
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
            .dimmed()
    );
    println!();

    match &record.payload {
        RecordPayload::Correction {
            original,
            corrected,
            mistakes,
            knowledge,
        } => {
            let result = CorrectionResult {
                detected_language: record.language,
                corrected: corrected.clone(),
                mistakes: mistakes.clone(),
                knowledge: knowledge.clone(),
            };
            render::render_correction(original, &result);
        }
        RecordPayload::Explanation { sentences, .. } => {
            let result = ExplanationResult {
                detected_language: record.language,
                sentences: sentences.clone(),
            };
            render::render_explanation(&result);
        }
    }

    Ok(())
}
