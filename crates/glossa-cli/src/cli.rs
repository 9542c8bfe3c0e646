//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Glossa: LLM-assisted language tutor for English and German
#[derive(Parser)]
#[command(name = "glossa")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Language model provider to use
    #[arg(long, global = true, default_value = "gemini")]
    pub llm: LlmChoice,

    /// Model to use (provider-specific, e.g. "gemini-2.0-flash")
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Path to the history file
    #[arg(long, global = true, default_value = "glossa.history.json")]
    pub store: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Correct a text and show a word-level diff with analysis
    Correct {
        /// Text to correct (reads the file given with --file when omitted)
        #[arg(value_name = "TEXT")]
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Don't write the result to history
        #[arg(long)]
        no_save: bool,
    },

    /// Explain a text sentence by sentence with highlighted annotations
    Explain {
        /// Text to explain (reads the file given with --file when omitted)
        #[arg(value_name = "TEXT")]
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Step through sentences, expanding annotations one at a time
        #[arg(short, long)]
        interactive: bool,

        /// Don't write the result to history
        #[arg(long)]
        no_save: bool,
    },

    /// Browse, show, or delete stored results
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },

    /// Ask follow-up questions about a stored result
    Chat {
        /// Record ID to discuss (defaults to the most recent record)
        #[arg(value_name = "ID")]
        id: Option<String>,
    },

    /// Read capture events from stdin and process them one at a time
    Watch,
}

#[derive(Subcommand)]
pub enum HistoryAction {
    /// List stored results, newest first
    List {
        /// Page to show (20 records per page)
        #[arg(short, long, default_value = "0")]
        page: usize,
    },

    /// Show one stored result in full
    Show {
        /// Record ID
        #[arg(value_name = "ID")]
        id: String,

        /// Output the raw record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a stored result
    Delete {
        /// Record ID
        #[arg(value_name = "ID")]
        id: String,
    },
}

/// Language model provider choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LlmChoice {
    /// Google Gemini API (requires GEMINI_API_KEY)
    #[default]
    Gemini,
    /// Deterministic mock provider for testing
    Mock,
}

impl std::str::FromStr for LlmChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gemini" | "google" => Ok(LlmChoice::Gemini),
            "mock" | "test" => Ok(LlmChoice::Mock),
            _ => Err(format!("Unknown provider: {}. Use: gemini or mock.", s)),
        }
    }
}

impl std::fmt::Display for LlmChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LlmChoice::Gemini => write!(f, "gemini"),
            LlmChoice::Mock => write!(f, "mock"),
        }
    }
}
