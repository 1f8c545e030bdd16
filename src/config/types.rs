//! Configuration type definitions.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Default output file name, written relative to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "project_review.json";

/// Directory names that are never descended into by default.
pub const DEFAULT_IGNORED_DIRS: &[&str] = &[
    ".git",
    "__pycache__",
    "node_modules",
    "venv",
    ".idea",
    ".vscode",
    "dist",
    "build",
    "coverage",
];

/// File extensions that are never read by default.
pub const DEFAULT_IGNORED_EXTENSIONS: &[&str] = &[
    ".png", ".jpg", ".jpeg", ".gif", ".ico", ".pyc", ".exe", ".bin", ".zip", ".pdf", ".dll",
    ".sqlite3", ".db",
];

/// Main configuration structure for project-collector.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// What to scan and where to write.
    pub scan: ScanConfig,
    /// Fixed instructional payload of the output document.
    pub prompt: PromptConfig,
}

impl Config {
    /// Bring every configured value into its canonical form.
    pub fn normalize(&mut self) {
        self.scan.normalize();
    }
}

/// Scan configuration. Immutable once handed to the collector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Top-level directory to scan.
    pub root: PathBuf,
    /// Path of the JSON document to write.
    pub output: PathBuf,
    /// Directory names pruned at any depth (exact, case-sensitive).
    pub ignored_dirs: HashSet<String>,
    /// File extensions skipped without reading (lower-case, dot-prefixed).
    pub ignored_extensions: HashSet<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            ignored_dirs: DEFAULT_IGNORED_DIRS.iter().map(|d| d.to_string()).collect(),
            ignored_extensions: DEFAULT_IGNORED_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
        }
    }
}

impl ScanConfig {
    /// Create a scan configuration with the default ignore sets.
    pub fn new(root: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output: output.into(),
            ..Default::default()
        }
    }

    /// Replace both ignore sets.
    pub fn with_ignore_sets<D, E>(mut self, dirs: D, extensions: E) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        self.ignored_dirs = dirs.into_iter().map(Into::into).collect();
        self.ignored_extensions = extensions
            .into_iter()
            .map(|e| normalize_extension(e.as_ref()))
            .collect();
        self
    }

    /// Check if a directory name is pruned. Matching is exact and
    /// case-sensitive.
    pub fn is_ignored_dir(&self, name: &str) -> bool {
        self.ignored_dirs.contains(name)
    }

    /// Check if a file's extension is in the ignored set.
    ///
    /// Only the last extension counts, and dotfiles such as `.bashrc` have
    /// none.
    pub fn is_ignored_extension(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
            .is_some_and(|ext| self.ignored_extensions.contains(&ext))
    }

    fn normalize(&mut self) {
        self.ignored_extensions = self
            .ignored_extensions
            .iter()
            .map(|e| normalize_extension(e))
            .collect();
    }
}

/// Lower-case an extension and make sure it starts with a dot.
pub fn normalize_extension(ext: &str) -> String {
    let lower = ext.trim().to_lowercase();
    if lower.starts_with('.') {
        lower
    } else {
        format!(".{lower}")
    }
}

/// The static task, role and instruction strings placed in every document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    pub task: String,
    /// Project name. Falls back to the root directory's name when unset.
    pub project: Option<String>,
    pub role: String,
    pub description: String,
    pub objective: String,
    pub format: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            task: "code_review".to_string(),
            project: None,
            role: "Senior Software Architect".to_string(),
            description:
                "高度なソフトウェア設計、セキュリティ、品質管理の専門家として振る舞ってください。"
                    .to_string(),
            objective:
                "以下のプロジェクトファイルを分析し、バグ、セキュリティリスク、改善点を指摘してください。"
                    .to_string(),
            format: "Markdown形式で、重要度順に問題をリストアップしてください。".to_string(),
        }
    }
}

impl PromptConfig {
    /// Resolve the project name for a given root.
    pub fn project_name(&self, root: &Path) -> String {
        if let Some(ref name) = self.project {
            return name.clone();
        }

        root.canonicalize()
            .ok()
            .as_deref()
            .unwrap_or(root)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "project".to_string())
    }
}
