//! Correct command - run a correction and render the diff.

use std::path::PathBuf;

use glossa::history::{HistoryRecord, HistoryStore};

use crate::cli::LlmChoice;
use crate::render;

use super::{build_provider, read_input};

pub fn run(
    text: Option<String>,
    file: Option<PathBuf>,
    no_save: bool,
    llm: LlmChoice,
    model: Option<String>,
    store_path: PathBuf,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(text, file)?;
    let provider = build_provider(llm, model)?;

    if verbose {
        eprintln!("Using {} ({})", provider.name(), provider.config().model);
    }

    let result = provider.correct(&input)?;
    render::render_correction(&input, &result);

    if !no_save {
        let mut store = HistoryStore::open(&store_path)?;
        // A failed write must not hide the result the user already has.
        if let Err(e) = store.append(HistoryRecord::correction(&input, &result)) {
            eprintln!("Warning: could not save to history: {}", e);
        }
    }

    Ok(())
}
