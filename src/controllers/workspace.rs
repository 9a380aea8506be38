use std::collections::{HashMap, HashSet};

use tracing::{debug, error, warn};

use crate::domain::file::{FileRecord, file_name};
use crate::domain::messages::Message;
use crate::infrastructure::error::Result;
use crate::infrastructure::surface::{EditorSurface, Tab, WorkspaceView};
use crate::services::tree_builder::{build_tree, flatten};

/// Owner of all mutable workspace state: the known file set, the open
/// tabs, the active file, and folder expansion.
///
/// Every operation completes fully (state mutation plus the triggered
/// re-renders) before the next command is processed, so the surfaces
/// never observe a partial update. The UI layer sends [`Message`]
/// commands and re-derives everything it draws from the render calls.
pub struct Workspace {
    files: HashMap<String, FileRecord>,
    /// Open paths in the order they were first opened.
    open_files: Vec<String>,
    /// Always a member of `open_files` when set.
    active_file: Option<String>,
    /// Folder paths currently expanded. Entries for folders that no
    /// longer exist are harmless and simply never render.
    expanded: HashSet<String>,
    revision: u64,
    surface: Box<dyn EditorSurface>,
    view: Box<dyn WorkspaceView>,
}

impl Workspace {
    pub fn new(surface: Box<dyn EditorSurface>, view: Box<dyn WorkspaceView>) -> Self {
        Self {
            files: HashMap::new(),
            open_files: Vec::new(),
            active_file: None,
            expanded: HashSet::new(),
            revision: 0,
            surface,
            view,
        }
    }

    /// Route one UI command to its handler.
    pub fn dispatch(&mut self, msg: Message) -> Result<()> {
        match msg {
            Message::FilesLoaded(records) => self.set_files(records)?,
            Message::SelectFile(path) => self.open_file(&path),
            Message::SwitchTab(path) => self.switch_to_file(&path),
            Message::CloseTab(path) => self.close_file(&path),
            Message::ToggleFolder(path) => self.toggle_folder(&path),
        }
        Ok(())
    }

    /// Replace the known file set wholesale. Last write wins when the
    /// loader supplies duplicate paths.
    ///
    /// A structurally invalid set is rejected with the prior state
    /// untouched. Open files missing from the new set are closed first,
    /// so every remaining tab is backed by a known file; an active file
    /// that survives is re-rendered with its new content.
    pub fn set_files(&mut self, records: Vec<FileRecord>) -> Result<()> {
        let mut files = HashMap::with_capacity(records.len());
        for record in records {
            files.insert(record.path.clone(), record);
        }
        build_tree(&files)?;

        self.files = files;
        self.revision += 1;
        debug!(
            revision = self.revision,
            count = self.files.len(),
            "file set replaced"
        );

        let vanished: Vec<String> = self
            .open_files
            .iter()
            .filter(|p| !self.files.contains_key(*p))
            .cloned()
            .collect();
        for path in &vanished {
            self.close_file(path);
        }

        // An active file that survived may carry new content.
        if let Some(path) = self.active_file.clone() {
            if let Some(record) = self.files.get(&path) {
                self.surface.render(record);
            }
        }

        self.render_tree();
        self.render_tabs();
        Ok(())
    }

    /// Open a file selected in the tree. Unknown paths are ignored.
    ///
    /// Idempotent on tab membership: re-opening an already-open file
    /// only makes it active.
    pub fn open_file(&mut self, path: &str) {
        if !self.files.contains_key(path) {
            warn!(path, "select for unknown file");
            return;
        }
        if !self.open_files.iter().any(|p| p == path) {
            self.open_files.push(path.to_string());
            debug!(path, open = self.open_files.len(), "file opened");
        }
        self.active_file = Some(path.to_string());
        self.render_tabs();
        self.render_editor();
    }

    /// Close a tab. The tab bar re-renders even when the path was not
    /// open.
    ///
    /// When the active file is closed, the path now last in open order
    /// becomes active; closing the last tab clears the editing surface.
    pub fn close_file(&mut self, path: &str) {
        if let Some(idx) = self.open_files.iter().position(|p| p == path) {
            self.open_files.remove(idx);
            debug!(path, remaining = self.open_files.len(), "file closed");

            if self.active_file.as_deref() == Some(path) {
                self.active_file = self.open_files.last().cloned();
                self.render_editor();
            }
        }
        self.render_tabs();
    }

    /// Make an already-open file active. Paths that are not open are
    /// ignored.
    pub fn switch_to_file(&mut self, path: &str) {
        if !self.open_files.iter().any(|p| p == path) {
            return;
        }
        self.active_file = Some(path.to_string());
        self.render_tabs();
        self.render_editor();
    }

    /// Flip a folder between expanded and collapsed.
    pub fn toggle_folder(&mut self, folder_path: &str) {
        if !self.expanded.remove(folder_path) {
            self.expanded.insert(folder_path.to_string());
        }
        self.render_tree();
    }

    /// Plain-text snapshot of whatever the editing surface shows.
    pub fn current_content(&self) -> Option<String> {
        self.surface.current_content()
    }

    pub fn files(&self) -> &HashMap<String, FileRecord> {
        &self.files
    }

    pub fn open_files(&self) -> &[String] {
        &self.open_files
    }

    pub fn active_file(&self) -> Option<&str> {
        self.active_file.as_deref()
    }

    pub fn is_expanded(&self, folder_path: &str) -> bool {
        self.expanded.contains(folder_path)
    }

    /// Monotonic counter bumped on every file-set replacement. A caller
    /// racing an in-flight load can compare revisions to detect that a
    /// stale response arrived after a newer set.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn render_editor(&mut self) {
        match self.active_file.as_ref().and_then(|p| self.files.get(p)) {
            Some(record) => self.surface.render(record),
            None => self.surface.clear(),
        }
    }

    fn render_tree(&mut self) {
        // The file set was validated when it was stored, so the rebuild
        // cannot conflict.
        match build_tree(&self.files) {
            Ok(tree) => {
                let rows = flatten(&tree, &self.expanded);
                self.view.render_tree(&rows);
            }
            Err(err) => error!(%err, "tree rebuild failed"),
        }
    }

    fn render_tabs(&mut self) {
        let tabs: Vec<Tab> = self
            .open_files
            .iter()
            .map(|path| Tab {
                path: path.clone(),
                title: file_name(path).to_string(),
                active: self.active_file.as_deref() == Some(path.as_str()),
            })
            .collect();
        self.view.render_tabs(&tabs);
    }
}
