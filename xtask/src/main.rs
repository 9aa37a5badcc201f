//! Development tasks for the lexdiv workspace.
//!
//! Run with `cargo run -p xtask -- <task>`.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "Development tasks for lexdiv")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out: Utf8PathBuf,
    },
    /// Generate shell completions
    Completions {
        /// Output directory
        #[arg(long, default_value = "target/completions")]
        out: Utf8PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    match Xtask::parse().task {
        Task::Man { out } => man(&out),
        Task::Completions { out } => completions(&out),
    }
}

fn man(out: &Utf8PathBuf) -> anyhow::Result<()> {
    std::fs::create_dir_all(out).with_context(|| format!("failed to create {out}"))?;
    let cmd = lexdiv::command();
    clap_mangen::generate_to(cmd, out)
        .with_context(|| format!("failed to write man pages to {out}"))?;
    println!("man pages written to {out}");
    Ok(())
}

fn completions(out: &Utf8PathBuf) -> anyhow::Result<()> {
    std::fs::create_dir_all(out).with_context(|| format!("failed to create {out}"))?;
    let mut cmd = lexdiv::command();
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell, Shell::Elvish] {
        let path = clap_complete::generate_to(shell, &mut cmd, "lexdiv", out)
            .with_context(|| format!("failed to write {shell} completions"))?;
        println!("{}", path.display());
    }
    Ok(())
}
