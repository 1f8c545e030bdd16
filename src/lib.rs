pub mod cli;
pub mod collector;
pub mod config;
pub mod discovery;
pub mod document;
pub mod error;
pub mod reporter;
pub mod run;

pub use cli::Cli;
pub use collector::{CollectListener, CollectStats, Collection, ProjectCollector, SilentListener};
pub use config::{Config, PromptConfig, ScanConfig};
pub use discovery::Classification;
pub use document::{FileRecord, ProjectDocument};
pub use error::{CollectorError, Result};
pub use reporter::{JsonReporter, TerminalReporter};
pub use run::{collect_document, run, run_collection};
