use thiserror::Error;

/// Structural problems found while building the file tree.
///
/// A file set that triggers one of these is rejected wholesale rather
/// than rendered with a silently repaired tree.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TreeError {
    #[error("empty file path")]
    EmptyPath,

    #[error("empty segment in path \"{0}\"")]
    EmptySegment(String),

    #[error("\"{0}\" names both a file and a folder")]
    PathConflict(String),
}

#[derive(Error, Debug)]
pub enum WorkspaceError {
    #[error("tree error: {0}")]
    Tree(#[from] TreeError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with WorkspaceError
pub type Result<T> = std::result::Result<T, WorkspaceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_error_conversion() {
        let tree_err = TreeError::PathConflict("src".to_string());
        let err: WorkspaceError = tree_err.into();
        assert!(matches!(err, WorkspaceError::Tree(_)));
        assert!(err.to_string().contains("src"));
    }

    #[test]
    fn test_error_display() {
        let err = TreeError::EmptySegment("src//main.py".to_string());
        assert_eq!(err.to_string(), "empty segment in path \"src//main.py\"");

        let err = TreeError::PathConflict("src".to_string());
        assert_eq!(err.to_string(), "\"src\" names both a file and a folder");
    }
}
