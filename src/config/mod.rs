//! Configuration layer for project-collector.
//!
//! ## Layers
//! - `types`: Configuration type definitions and compiled-in defaults
//! - `loading`: File loading logic
//! - `effective`: CLI + config file merging

mod effective;
mod error;
mod loading;
mod types;

pub use error::{ConfigError, ConfigFormat};
pub use loading::CONFIG_FILE_NAMES;
pub use types::{
    Config, DEFAULT_IGNORED_DIRS, DEFAULT_IGNORED_EXTENSIONS, DEFAULT_OUTPUT_FILE, PromptConfig,
    ScanConfig, normalize_extension,
};
