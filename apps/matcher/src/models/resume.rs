use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where a resume's text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeSource {
    Text,
    File,
}

/// A candidate resume: raw text plus a caller-facing title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resume {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub source: ResumeSource,
    pub file_name: Option<String>,
}

impl Resume {
    pub fn from_text(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            source: ResumeSource::Text,
            file_name: None,
        }
    }

    /// Titles a file-backed resume after the file name without its extension.
    pub fn from_file(file_name: impl Into<String>, content: impl Into<String>) -> Self {
        let file_name = file_name.into();
        let title = std::path::Path::new(&file_name)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| file_name.clone());

        Self {
            id: Uuid::new_v4(),
            title,
            content: content.into(),
            source: ResumeSource::File,
            file_name: Some(file_name),
        }
    }

    /// Blank resumes are skipped by the match session.
    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }
}
