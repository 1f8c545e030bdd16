use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(
    name = "project-collector",
    version,
    about = "Collect a project's text files into one JSON document for AI code review",
    long_about = "project-collector walks a project directory, skips ignored folders and binary files, and writes every text file's path and content into a single JSON document together with fixed review instructions."
)]
pub struct Cli {
    /// Root directory to scan
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Output JSON file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file (YAML, JSON or TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Additional directory name to skip (repeatable)
    #[arg(long = "ignore-dir", value_name = "NAME")]
    pub ignore_dirs: Vec<String>,

    /// Additional file extension to skip, e.g. ".lock" (repeatable)
    #[arg(long = "ignore-ext", value_name = "EXT")]
    pub ignore_exts: Vec<String>,

    /// Project name written into the document
    #[arg(long)]
    pub project: Option<String>,

    /// Only report failures and the final summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Debug-level logging; overrides RUST_LOG
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Log filter directives for this run.
    ///
    /// `--verbose` forces `debug`. Otherwise `env` (the value of `RUST_LOG`)
    /// is used, falling back to `warn`.
    pub fn log_directives(&self, env: Option<String>) -> String {
        if self.verbose {
            return "debug".to_string();
        }
        env.filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| "warn".to_string())
    }
}
