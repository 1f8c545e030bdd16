//! The review document written by the collector.

use crate::config::PromptConfig;
use serde::{Deserialize, Serialize};

/// One collected text file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Path relative to the scanned root, always `/`-separated.
    pub file_path: String,
    pub content: String,
}

impl FileRecord {
    pub fn new(file_path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub task: String,
    pub project: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDefinition {
    pub role: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructions {
    pub objective: String,
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectContext {
    pub root_path: String,
    pub files: Vec<FileRecord>,
}

/// Fixed instructions plus the collected files, in traversal order.
///
/// Field order matches the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDocument {
    pub meta: Meta,
    pub role_definition: RoleDefinition,
    pub instructions: Instructions,
    pub project_context: ProjectContext,
}

impl ProjectDocument {
    /// Assemble the document. Nothing in the fixed blocks is taken from
    /// the scanned files.
    pub fn build(prompt: &PromptConfig, project: &str, files: Vec<FileRecord>) -> Self {
        Self {
            meta: Meta {
                task: prompt.task.clone(),
                project: project.to_string(),
            },
            role_definition: RoleDefinition {
                role: prompt.role.clone(),
                description: prompt.description.clone(),
            },
            instructions: Instructions {
                objective: prompt.objective.clone(),
                format: prompt.format.clone(),
            },
            project_context: ProjectContext {
                root_path: project.to_string(),
                files,
            },
        }
    }

    pub fn files(&self) -> &[FileRecord] {
        &self.project_context.files
    }

    /// Look up a record by its relative path.
    pub fn file(&self, file_path: &str) -> Option<&FileRecord> {
        self.files().iter().find(|f| f.file_path == file_path)
    }
}
