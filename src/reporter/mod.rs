//! Output of a collection run: the JSON document and console progress.

pub mod json;
pub mod terminal;

pub use json::JsonReporter;
pub use terminal::TerminalReporter;
