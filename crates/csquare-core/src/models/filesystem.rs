use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// =============================================================================
// File Content
// =============================================================================

/// Body of a file node.
///
/// The manifest may give either a list of lines or a single string; a string
/// is split on line breaks when read.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum FileContent {
    Lines(Vec<String>),
    Text(String),
}

impl FileContent {
    /// The file's lines, in order.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Lines(lines) => lines.clone(),
            Self::Text(text) => text.lines().map(str::to_string).collect(),
        }
    }
}

// =============================================================================
// Filesystem Entry
// =============================================================================

/// A node of the static directory tree.
///
/// Serialized as plain JSON: objects are directories, arrays and strings are
/// files.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum FsEntry {
    File(FileContent),
    Directory(BTreeMap<String, FsEntry>),
}

impl FsEntry {
    /// Create an empty directory.
    pub fn empty_dir() -> Self {
        Self::Directory(BTreeMap::new())
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Self::Directory(_))
    }

    /// Children of a directory, `None` for files.
    pub fn children(&self) -> Option<&BTreeMap<String, FsEntry>> {
        match self {
            Self::Directory(children) => Some(children),
            Self::File(_) => None,
        }
    }

    /// Lines of a file, `None` for directories.
    pub fn content(&self) -> Option<Vec<String>> {
        match self {
            Self::File(content) => Some(content.lines()),
            Self::Directory(_) => None,
        }
    }
}
