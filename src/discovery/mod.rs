//! Discovery layer for the collector.
//!
//! This module handles:
//! - Directory traversal with ignored-directory pruning
//! - Text/binary classification by bounded probe read

pub mod text_detection;
pub mod walker;

pub use text_detection::{Classification, PROBE_LEN, classify, probe_is_text, read_text};
pub use walker::{DirectoryWalker, Walk, WalkEntry, relative_slash_path};
