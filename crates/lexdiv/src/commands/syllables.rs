//! Syllables command: show how words are split.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use lexdiv_core::syllabify;

/// Arguments for the `syllables` subcommand.
#[derive(Args, Debug)]
pub struct SyllablesArgs {
    /// Words to split (lowercased before splitting).
    #[arg(required = true)]
    pub words: Vec<String>,
}

#[derive(Serialize)]
struct Split {
    word: String,
    syllables: Vec<String>,
}

fn split(word: &str) -> Split {
    let word = word.trim().to_lowercase();
    let syllables = syllabify(&word).into_iter().map(str::to_string).collect();
    Split { word, syllables }
}

/// Print the syllables of each word.
#[instrument(name = "cmd_syllables", skip_all, fields(words = args.words.len()))]
pub fn cmd_syllables(args: SyllablesArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(words = ?args.words, "executing syllables command");

    let splits: Vec<Split> = args.words.iter().map(|w| split(w)).collect();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&splits)?);
        return Ok(());
    }

    for s in &splits {
        println!("{}: {}", s.word.bold(), s.syllables.join("-"));
    }

    Ok(())
}
