use crate::domain::file::FileRecord;
use crate::services::tree_builder::TreeRow;

/// One tab-bar entry derived from the open-file list, in open order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub path: String,
    /// Final path segment, shown as the tab label.
    pub title: String,
    pub active: bool,
}

/// Contract for the editing surface the workspace drives.
///
/// Implementations select the language mode from the file extension
/// alone (see `Language::from_path`), fully dispose of any previous
/// surface instance before constructing a new one in `render`, and
/// report content as a plain string snapshot.
pub trait EditorSurface {
    /// Tear down the current surface and display `file`.
    fn render(&mut self, file: &FileRecord);

    /// Tear down the current surface and show the empty-state placeholder.
    fn clear(&mut self);

    /// Snapshot of the displayed content, or None when nothing is shown.
    fn current_content(&self) -> Option<String>;
}

/// Render sink for the file browser and the tab bar.
///
/// Handed the complete row/tab lists on every change; it redraws from
/// them and holds no model state of its own.
pub trait WorkspaceView {
    fn render_tree(&mut self, rows: &[TreeRow]);

    fn render_tabs(&mut self, tabs: &[Tab]);
}
