use super::file::FileRecord;

/// All commands the UI layer can send to the workspace.
/// Each user interaction becomes one of these; `Workspace::dispatch`
/// handles them. The UI keeps no state of its own beyond what it
/// re-derives from the render calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The external loader produced a fresh file set.
    FilesLoaded(Vec<FileRecord>),
    /// A file row in the tree was activated.
    SelectFile(String),
    /// A tab was clicked.
    SwitchTab(String),
    /// A tab's close button was clicked.
    CloseTab(String),
    /// A folder row was clicked.
    ToggleFolder(String),
}
