//! Console progress for a collection run.
//!
//! Advisory only; nothing printed here is part of the output document.

use crate::collector::{CollectListener, CollectStats};
use crate::document::FileRecord;
use crate::error::CollectorError;
use colored::Colorize;
use std::path::Path;

pub struct TerminalReporter {
    quiet: bool,
}

impl TerminalReporter {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    /// Suppress per-file success lines. Failures are always shown.
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn format_start(&self, root: &Path) -> String {
        format!(
            "{} {}\n{}",
            "Collecting".cyan().bold(),
            root.display(),
            "Scanning files...".dimmed()
        )
    }

    pub fn format_collected(&self, record: &FileRecord) -> String {
        format!("  {} {}", "✓".green(), record.file_path)
    }

    pub fn format_failed(&self, path: &Path, error: &CollectorError) -> String {
        format!(
            "  {} {} ({})",
            "⚠".yellow(),
            path.display(),
            error.root_cause()
        )
    }

    pub fn format_success(&self, output: &Path, stats: &CollectStats) -> String {
        let mut line = format!(
            "\n{} Wrote {} file(s) to '{}'",
            "Done.".green().bold(),
            stats.collected,
            output.display()
        );
        if stats.failed > 0 {
            line.push_str(&format!(", {} skipped after read errors", stats.failed));
        }
        line.push_str(". Upload it to your AI reviewer.");
        line
    }

    pub fn format_failure(&self, error: &CollectorError) -> String {
        format!("\n{} {}", "Error:".red().bold(), error)
    }

    pub fn print_start(&self, root: &Path) {
        println!("{}", self.format_start(root));
    }

    pub fn print_success(&self, output: &Path, stats: &CollectStats) {
        println!("{}", self.format_success(output, stats));
    }

    pub fn print_failure(&self, error: &CollectorError) {
        eprintln!("{}", self.format_failure(error));
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl CollectListener for TerminalReporter {
    fn on_start(&self, root: &Path) {
        self.print_start(root);
    }

    fn on_collected(&self, record: &FileRecord) {
        if !self.quiet {
            println!("{}", self.format_collected(record));
        }
    }

    fn on_failed(&self, path: &Path, error: &CollectorError) {
        eprintln!("{}", self.format_failed(path, error));
    }
}
