//! Watch command - process capture events from stdin, one at a time.
//!
//! Stands in for the desktop shell's clipboard shortcut: each stdin line
//! is one capture event. Events are run through the serialized capture
//! queue, so a line submitted while a request is in flight waits instead
//! of interleaving output.

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use colored::Colorize;

use glossa::capture::{CaptureEvent, CaptureMode, CaptureQueue};
use glossa::history::{HistoryRecord, HistoryStore};
use glossa::llm::LanguageModel;

use crate::cli::LlmChoice;
use crate::render;

use super::build_provider;

pub fn run(
    llm: LlmChoice,
    model: Option<String>,
    store_path: PathBuf,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let provider: Arc<dyn LanguageModel> = Arc::from(build_provider(llm, model)?);
    let store = Arc::new(Mutex::new(HistoryStore::open(&store_path)?));

    if verbose {
        eprintln!("Using {} ({})", provider.name(), provider.config().model);
    }
    println!(
        "{}",
        "Reading capture events from stdin: 'c <text>' corrects, 'e <text>' \
         explains, 'q' quits."
            .dimmed()
    );

    let running = Arc::new(AtomicBool::new(true));
    {
        let running = Arc::clone(&running);
        ctrlc::set_handler(move || {
            running.store(false, Ordering::SeqCst);
        })?;
    }

    let worker_provider = Arc::clone(&provider);
    let worker_store = Arc::clone(&store);
    let queue = CaptureQueue::start(move |event| {
        process(&*worker_provider, &worker_store, event);
    });

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if !running.load(Ordering::SeqCst) {
            break;
        }
        let line = line?;
        let line = line.trim();

        let event = match line.split_once(' ') {
            _ if line.eq_ignore_ascii_case("q") => break,
            Some(("c", text)) => CaptureEvent::new(text, CaptureMode::Correction),
            Some(("e", text)) => CaptureEvent::new(text, CaptureMode::Explanation),
            _ => {
                if !line.is_empty() {
                    eprintln!("Ignored line; use 'c <text>' or 'e <text>'.");
                }
                continue;
            }
        };
        queue.submit(event);
    }

    // Drain anything still queued before exiting.
    queue.shutdown();
    Ok(())
}

/// Handle one capture event: call the model, render, save.
fn process(
    provider: &dyn LanguageModel,
    store: &Mutex<HistoryStore>,
    event: CaptureEvent,
) {
    println!();
    println!(
        "{} {}",
        "Captured".cyan().bold(),
        format!("({})", event.mode.label()).dimmed()
    );

    let record = match event.mode {
        CaptureMode::Correction => match provider.correct(&event.text) {
            Ok(result) => {
                render::render_correction(&event.text, &result);
                HistoryRecord::correction(&event.text, &result)
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                return;
            }
        },
        CaptureMode::Explanation => match provider.explain(&event.text) {
            Ok(result) => {
                render::render_explanation(&result);
                HistoryRecord::explanation(&event.text, &result)
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                return;
            }
        },
    };

    if let Err(e) = store.lock().unwrap().append(record) {
        eprintln!("Warning: could not save to history: {}", e);
    }
}
