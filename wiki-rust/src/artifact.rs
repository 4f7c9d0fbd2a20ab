use serde::{Deserialize, Serialize};

pub const TEXT_MIME_TYPE: &str = "text/plain";

/// An in-memory text file handed to the host as an attachment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextFile {
    pub name: String,
    pub mime_type: String,
    pub content: String,
}

impl TextFile {
    /// A `text/plain` file named `<stem>.txt`.
    pub fn from_stem(stem: &str, content: impl Into<String>) -> Self {
        Self {
            name: format!("{stem}.txt"),
            mime_type: TEXT_MIME_TYPE.to_string(),
            content: content.into(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }
}

/// How the caller wants the formatted entry delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArtifactKind {
    #[default]
    Text,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifact {
    Text(String),
    File(TextFile),
}

impl Artifact {
    /// Package formatted text. `entry_name` names the file when a file is
    /// requested and is otherwise unused.
    pub fn build(kind: ArtifactKind, entry_name: &str, text: String) -> Self {
        match kind {
            ArtifactKind::Text => Self::Text(text),
            ArtifactKind::File => Self::File(TextFile::from_stem(entry_name, text)),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::File(file) => &file.content,
        }
    }

    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::File(file) => file.content,
        }
    }

    #[must_use]
    pub fn into_file(self) -> Option<TextFile> {
        match self {
            Self::File(file) => Some(file),
            Self::Text(_) => None,
        }
    }
}
