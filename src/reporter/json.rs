use crate::document::ProjectDocument;
use crate::error::{CollectorError, Result};
use std::fs;
use std::path::Path;

/// Serializes a [`ProjectDocument`] as indented JSON.
///
/// Non-ASCII text is written as-is rather than `\u` escaped.
pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }

    /// Render the document with two-space indentation.
    pub fn render(&self, document: &ProjectDocument) -> Result<String> {
        Ok(serde_json::to_string_pretty(document)?)
    }

    /// Write the document to `path` as UTF-8.
    ///
    /// A failed write leaves whatever the OS left behind; nothing is cleaned up.
    pub fn emit(&self, document: &ProjectDocument, path: &Path) -> Result<()> {
        let output = self.render(document)?;
        fs::write(path, output).map_err(|e| CollectorError::write_error(path, e))
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PromptConfig;
    use crate::document::FileRecord;
    use crate::error::IoOperation;
    use tempfile::TempDir;

    fn sample_document() -> ProjectDocument {
        ProjectDocument::build(
            &PromptConfig::default(),
            "attendance-app",
            vec![
                FileRecord::new("a.txt", "hello"),
                FileRecord::new("docs/読んでね.md", "出席管理アプリ\n\"quoted\"\n"),
            ],
        )
    }

    #[test]
    fn test_render_is_indented() {
        let output = JsonReporter::new().render(&sample_document()).unwrap();
        assert!(output.starts_with("{\n  \"meta\": {\n    \"task\": \"code_review\""));
    }

    #[test]
    fn test_render_keeps_non_ascii_literal() {
        let output = JsonReporter::new().render(&sample_document()).unwrap();
        assert!(output.contains("出席管理アプリ"));
        assert!(output.contains("docs/読んでね.md"));
        assert!(!output.contains("\\u"));
    }

    #[test]
    fn test_emit_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("review.json");
        let document = sample_document();

        JsonReporter::new().emit(&document, &path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let parsed: ProjectDocument = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, document);
        assert_eq!(
            parsed.file("docs/読んでね.md").unwrap().content,
            "出席管理アプリ\n\"quoted\"\n"
        );
    }

    #[test]
    fn test_emit_write_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing-dir").join("review.json");

        let err = JsonReporter::new()
            .emit(&sample_document(), &path)
            .unwrap_err();
        assert!(matches!(
            err,
            CollectorError::Io {
                operation: IoOperation::Write,
                ..
            }
        ));
        assert!(!path.exists());
    }

    #[test]
    #[allow(clippy::default_constructed_unit_structs)]
    fn test_json_default_trait() {
        let document = ProjectDocument::build(&PromptConfig::default(), "empty", vec![]);
        let output = JsonReporter::default().render(&document).unwrap();
        assert!(output.contains("\"files\": []"));
    }
}
