//! Compare command: score every configured dataset side by side.

use camino::Utf8Path;
use clap::Args;
use tracing::{debug, instrument};

use lexdiv_core::{Config, CorpusReport, Metric};

use super::corpus::{print_report, score_dataset};

/// Arguments for the `compare` subcommand.
#[derive(Args, Debug, Default)]
pub struct CompareArgs {
    /// Metric to compute (defaults to the configured metric).
    #[arg(long, value_enum)]
    pub metric: Option<Metric>,
}

/// Score the configured datasets, or the built-in `Data` / `QwenMax` pair.
#[instrument(name = "cmd_compare", skip_all)]
pub fn cmd_compare(
    args: CompareArgs,
    global_json: bool,
    quiet: bool,
    config: &Config,
    cwd: &Utf8Path,
) -> anyhow::Result<()> {
    let metric = args.metric.unwrap_or(config.metric);
    let datasets = config.datasets_or_builtin();
    debug!(datasets = datasets.len(), %metric, "executing compare command");

    let reports: Vec<CorpusReport> = datasets
        .iter()
        .map(|dataset| {
            let root = cwd.join(&dataset.path);
            let extractor = dataset
                .format
                .extractor(dataset.file_name.as_deref(), dataset.field.as_deref());
            score_dataset(
                &dataset.name,
                &root,
                extractor.as_ref(),
                metric,
                global_json || quiet,
            )
        })
        .collect();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        println!("Lexical diversity ({metric})");
        for report in &reports {
            print_report(report);
        }
    }

    Ok(())
}
