use serde::{Deserialize, Serialize};

use crate::infrastructure::error::Result;

/// One source file supplied by the external loader.
///
/// `path` is '/'-delimited with non-empty segments and is unique within
/// a workspace. `content` is the full text as last supplied; the
/// workspace never edits it in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub path: String,
    pub content: String,
}

impl FileRecord {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Decode a loader payload: a JSON array of `{path, content}` records.
    pub fn list_from_json(json: &str) -> Result<Vec<FileRecord>> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Extract the final segment of a '/'-delimited path.
///
/// Used for tab labels and tree row names. An empty path yields an
/// empty name; validation happens when the file set is stored.
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
