//! Glossa CLI - LLM-assisted language tutor.

mod cli;
mod commands;
mod render;

use clap::Parser;
use cli::{Cli, Commands};
use glossa::GlossaError;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Correct {
            text,
            file,
            no_save,
        } => commands::correct::run(
            text,
            file,
            no_save,
            cli.llm,
            cli.model,
            cli.store,
            cli.verbose,
        ),

        Commands::Explain {
            text,
            file,
            interactive,
            no_save,
        } => commands::explain::run(
            text,
            file,
            interactive,
            no_save,
            cli.llm,
            cli.model,
            cli.store,
            cli.verbose,
        ),

        Commands::History { action } => commands::history::run(action, cli.store, cli.verbose),

        Commands::Chat { id } => {
            commands::chat::run(id, cli.llm, cli.model, cli.store, cli.verbose)
        }

        Commands::Watch => commands::watch::run(cli.llm, cli.model, cli.store, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if e.downcast_ref::<GlossaError>()
            .is_some_and(GlossaError::is_credential_missing)
        {
            eprintln!("Hint: export GEMINI_API_KEY=<your key>, or rerun with --llm mock.");
        }
        std::process::exit(1);
    }
}
