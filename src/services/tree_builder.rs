use std::collections::{HashMap, HashSet};

use super::language::{file_icon, folder_icon};
use crate::domain::file::FileRecord;
use crate::domain::tree::{FolderNode, TreeNode};
use crate::infrastructure::error::TreeError;

/// Build the folder tree for the given file map.
///
/// Pure: no side effects, no stored state, callable repeatedly on any
/// input. The empty map produces a childless root. A path that implies
/// a file and a folder at the same name is rejected.
pub fn build_tree(files: &HashMap<String, FileRecord>) -> Result<FolderNode, TreeError> {
    let mut root = FolderNode::new("", "");

    // Insert in path order so conflict reporting does not depend on map
    // iteration order.
    let mut paths: Vec<&String> = files.keys().collect();
    paths.sort();
    for path in paths {
        insert_path(&mut root, path)?;
    }

    Ok(root)
}

fn insert_path(root: &mut FolderNode, path: &str) -> Result<(), TreeError> {
    if path.is_empty() {
        return Err(TreeError::EmptyPath);
    }
    let segments: Vec<&str> = path.split('/').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(TreeError::EmptySegment(path.to_string()));
    }

    let mut current = root;
    for (i, segment) in segments.iter().enumerate() {
        let prefix = segments[..=i].join("/");
        if i + 1 == segments.len() {
            match current.children.get(*segment) {
                Some(TreeNode::Folder(_)) => return Err(TreeError::PathConflict(prefix)),
                Some(TreeNode::File { .. }) => {}
                None => {
                    current.children.insert(
                        (*segment).to_string(),
                        TreeNode::File {
                            name: (*segment).to_string(),
                            path: path.to_string(),
                        },
                    );
                }
            }
        } else {
            let entry = current
                .children
                .entry((*segment).to_string())
                .or_insert_with(|| {
                    TreeNode::Folder(FolderNode::new((*segment).to_string(), prefix.clone()))
                });
            current = match entry {
                TreeNode::Folder(folder) => folder,
                TreeNode::File { .. } => return Err(TreeError::PathConflict(prefix)),
            };
        }
    }

    Ok(())
}

/// One render-ready row of the file browser, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub path: String,
    pub name: String,
    pub depth: usize,
    pub is_folder: bool,
    pub expanded: bool,
    pub icon: &'static str,
}

/// Flatten the tree into display rows, descending only into expanded
/// folders. Root children always appear.
pub fn flatten(root: &FolderNode, expanded: &HashSet<String>) -> Vec<TreeRow> {
    let mut rows = Vec::new();
    flatten_into(root, expanded, 0, &mut rows);
    rows
}

fn flatten_into(
    folder: &FolderNode,
    expanded: &HashSet<String>,
    depth: usize,
    rows: &mut Vec<TreeRow>,
) {
    for child in folder.sorted_children() {
        match child {
            TreeNode::Folder(sub) => {
                let is_expanded = expanded.contains(&sub.path);
                rows.push(TreeRow {
                    path: sub.path.clone(),
                    name: sub.name.clone(),
                    depth,
                    is_folder: true,
                    expanded: is_expanded,
                    icon: folder_icon(is_expanded),
                });
                if is_expanded {
                    flatten_into(sub, expanded, depth + 1, rows);
                }
            }
            TreeNode::File { name, path } => {
                rows.push(TreeRow {
                    path: path.clone(),
                    name: name.clone(),
                    depth,
                    is_folder: false,
                    expanded: false,
                    icon: file_icon(name),
                });
            }
        }
    }
}
