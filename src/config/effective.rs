//! Effective configuration after merging CLI and config file.

use std::path::Path;

use super::error::ConfigError;
use super::types::{Config, normalize_extension};
use crate::Cli;

impl Config {
    /// Resolve the configuration for one run.
    ///
    /// - An explicit `--config` file must load, otherwise the run fails.
    /// - Without one, the usual search in `cwd` applies.
    /// - Path options: CLI takes precedence, fallback to config.
    /// - Ignore lists: CLI entries extend the configured sets.
    pub fn resolve(cli: &Cli, cwd: &Path) -> Result<Self, ConfigError> {
        let mut config = match cli.config {
            Some(ref path) => Self::from_file(path)?,
            None => Self::load(Some(cwd)),
        };
        config.apply_cli(cli);
        Ok(config)
    }

    /// Overlay command line options onto this configuration.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(ref root) = cli.root {
            self.scan.root = root.clone();
        }
        if let Some(ref output) = cli.output {
            self.scan.output = output.clone();
        }
        self.scan
            .ignored_dirs
            .extend(cli.ignore_dirs.iter().cloned());
        self.scan
            .ignored_extensions
            .extend(cli.ignore_exts.iter().map(|e| normalize_extension(e)));
        if let Some(ref project) = cli.project {
            self.prompt.project = Some(project.clone());
        }
    }
}
