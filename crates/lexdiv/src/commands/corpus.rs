//! Corpus command: score every item of one dataset.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument, warn};

use lexdiv_core::{CorpusFormat, CorpusReport, Extractor, Metric, corpus};

use super::spinner;

/// Arguments for the `corpus` subcommand.
#[derive(Args, Debug)]
pub struct CorpusArgs {
    /// Dataset root directory.
    pub dir: Utf8PathBuf,

    /// Dataset shape.
    #[arg(long, value_enum)]
    pub format: CorpusFormat,

    /// File read inside each item directory (xml format).
    #[arg(long, value_name = "NAME")]
    pub file_name: Option<String>,

    /// Key of the nested command mapping (json format).
    #[arg(long, value_name = "KEY")]
    pub field: Option<String>,

    /// Name shown in the report (defaults to the directory name).
    #[arg(long)]
    pub name: Option<String>,

    /// Metric to compute (defaults to the configured metric).
    #[arg(long, value_enum)]
    pub metric: Option<Metric>,
}

/// Load and score one dataset.
///
/// A missing or unlistable root is logged as a warning and yields an
/// empty report.
pub(crate) fn score_dataset(
    name: &str,
    root: &Utf8Path,
    extractor: &dyn Extractor,
    metric: Metric,
    hide_progress: bool,
) -> CorpusReport {
    let bar = spinner(format!("scoring {name}"), hide_progress);
    let report = match corpus::load_corpus(root, extractor) {
        Ok(items) => corpus::score_items(name, &items, metric),
        Err(err) => {
            warn!(dataset = name, error = %err, "dataset skipped");
            CorpusReport::empty(name, metric)
        }
    };
    bar.finish_and_clear();
    report
}

/// Print per-item ratios followed by the summary block.
pub(crate) fn print_report(report: &CorpusReport) {
    println!();
    println!("{} ({})", report.name.bold(), report.metric);
    for item in &report.items {
        println!("{:<20} → TTR: {:.4}", item.label, item.ratio);
    }

    println!();
    println!("{}", "=".repeat(60));
    println!(" {} – {}", "Statistics".bold(), report.name);
    println!("{}", "=".repeat(60));
    match &report.summary {
        Some(summary) => {
            println!("{}: {}", "Items".dimmed(), summary.count);
            println!("{}:   {:.4}", "Mean TTR".dimmed(), summary.mean);
            println!("{}:  {:.4}", "Std. dev.".dimmed(), summary.stdev);
        }
        None => println!("{}", "No items processed.".yellow()),
    }
}

/// Score one dataset directory and print the results.
#[instrument(name = "cmd_corpus", skip_all, fields(dir = %args.dir, format = %args.format))]
pub fn cmd_corpus(
    args: CorpusArgs,
    global_json: bool,
    quiet: bool,
    config_metric: Metric,
) -> anyhow::Result<()> {
    debug!(dir = %args.dir, format = %args.format, "executing corpus command");

    let metric = args.metric.unwrap_or(config_metric);
    let name = args
        .name
        .clone()
        .or_else(|| args.dir.file_name().map(str::to_string))
        .unwrap_or_else(|| args.dir.to_string());
    let extractor = args
        .format
        .extractor(args.file_name.as_deref(), args.field.as_deref());

    let report = score_dataset(
        &name,
        &args.dir,
        extractor.as_ref(),
        metric,
        global_json || quiet,
    );

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}
