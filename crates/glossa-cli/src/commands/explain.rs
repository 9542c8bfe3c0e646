//! Explain command - annotate a text sentence by sentence.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use colored::Colorize;

use glossa::annotation::{compose, repair, Segment, Selection};
use glossa::history::{HistoryRecord, HistoryStore};
use glossa::llm::ExplanationResult;

use crate::cli::LlmChoice;
use crate::render;

use super::{build_provider, read_input};

#[allow(clippy::too_many_arguments)]
pub fn run(
    text: Option<String>,
    file: Option<PathBuf>,
    interactive: bool,
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

    let result = provider.explain(&input)?;

    if interactive {
        run_interactive(&result)?;
    } else {
        render::render_explanation(&result);
    }

    if !no_save {
        let mut store = HistoryStore::open(&store_path)?;
        // History write failures are non-fatal; the result is already rendered.
        if let Err(e) = store.append(HistoryRecord::explanation(&input, &result)) {
            eprintln!("Warning: could not save to history: {}", e);
        }
    }

    Ok(())
}

/// Step through the sentences, toggling one expanded annotation at a time.
fn run_interactive(result: &ExplanationResult) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!(
        "{} ({})",
        "Explanation".cyan().bold(),
        result.detected_language.label()
    );
    println!(
        "{}",
        "Enter an annotation number to expand it, the same number to collapse, \
         Enter for the next sentence, q to quit."
            .dimmed()
    );

    for sentence in &result.sentences {
        let repaired = repair(&sentence.text, &sentence.annotations);
        let segments = compose(&sentence.text, &repaired);

        // Expansion state is per sentence view and starts collapsed.
        let mut selection = Selection::new();

        loop {
            println!();
            render::render_segments(&segments);
            println!();

            if let Some(identity) = selection.expanded() {
                if let Some(ann) = segments
                    .iter()
                    .filter_map(Segment::annotation)
                    .find(|a| a.identity == identity)
                {
                    render::render_annotation_detail(ann);
                }
            }
            render::render_sentence_extras(sentence);

            print!("{} ", ">".dimmed());
            io::stdout().flush()?;

            let line = match lines.next() {
                Some(line) => line?,
                None => return Ok(()),
            };
            let line = line.trim();

            if line.is_empty() {
                break;
            }
            if line.eq_ignore_ascii_case("q") {
                return Ok(());
            }
            match line.parse::<usize>() {
                Ok(identity) => selection.toggle(identity),
                Err(_) => println!("{}", "Enter a number, Enter, or q.".dimmed()),
            }
        }
    }

    Ok(())
}
