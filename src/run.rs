//! Top-level orchestration of a collection run.

use crate::collector::{CollectListener, CollectStats, ProjectCollector};
use crate::config::Config;
use crate::document::ProjectDocument;
use crate::error::Result;
use crate::reporter::{JsonReporter, TerminalReporter};
use crate::Cli;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// Collect the configured project and assemble its document in memory.
pub fn collect_document(
    config: &Config,
    listener: &dyn CollectListener,
) -> Result<(ProjectDocument, CollectStats)> {
    let collector = ProjectCollector::new(config.scan.clone());
    let collection = collector.collect(listener)?;
    let project = config.prompt.project_name(&config.scan.root);
    let document = ProjectDocument::build(&config.prompt, &project, collection.records);
    Ok((document, collection.stats))
}

/// Collect, build and write the document, reporting progress to the console.
pub fn run_collection(config: &Config, reporter: &TerminalReporter) -> Result<CollectStats> {
    let (document, stats) = collect_document(config, reporter)?;
    JsonReporter::new().emit(&document, &config.scan.output)?;

    info!(output = %config.scan.output.display(), files = stats.collected, "Document written");
    Ok(stats)
}

/// Entry point behind `main`. Never panics on run failures.
pub fn run(cli: &Cli) -> ExitCode {
    let reporter = TerminalReporter::new().with_quiet(cli.quiet);
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let result = Config::resolve(cli, &cwd)
        .map_err(Into::into)
        .and_then(|config| run_collection(&config, &reporter).map(|stats| (config, stats)));

    match result {
        Ok((config, stats)) => {
            reporter.print_success(&config.scan.output, &stats);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Collection failed");
            reporter.print_failure(&e);
            ExitCode::from(2)
        }
    }
}
