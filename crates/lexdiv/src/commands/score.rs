//! Score command: diversity ratio of one file.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use lexdiv_core::Metric;

use super::read_input_file;

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// File to score.
    pub file: Utf8PathBuf,

    /// Metric to compute (defaults to the configured metric).
    #[arg(long, value_enum)]
    pub metric: Option<Metric>,
}

/// Print the diversity ratio of a file.
#[instrument(name = "cmd_score", skip_all, fields(file = %args.file))]
pub fn cmd_score(
    args: ScoreArgs,
    global_json: bool,
    config_metric: Metric,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, metric = ?args.metric, "executing score command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let metric = args.metric.unwrap_or(config_metric);
    let report = metric.report(&content);

    if global_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report)
                .with_context(|| format!("failed to serialize report for {}", args.file))?
        );
    } else {
        println!("{:.4}", report.ratio);
    }

    Ok(())
}
