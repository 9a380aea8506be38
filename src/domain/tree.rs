use std::collections::BTreeMap;

/// A node in the derived file-browser tree.
///
/// The tree is rebuilt in full from the current file map on every
/// mutation and never patched in place. File nodes carry the path key;
/// the workspace resolves the backing record on selection, so no file
/// content is copied into the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    File { name: String, path: String },
    Folder(FolderNode),
}

impl TreeNode {
    pub fn is_folder(&self) -> bool {
        matches!(self, TreeNode::Folder(_))
    }

    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } => name,
            TreeNode::Folder(folder) => &folder.name,
        }
    }
}

/// A folder and its children, unique and iterated by name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FolderNode {
    pub name: String,
    /// '/'-joined ancestor segments identifying this folder across
    /// rebuilds. Empty for the root.
    pub path: String,
    pub children: BTreeMap<String, TreeNode>,
}

impl FolderNode {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            children: BTreeMap::new(),
        }
    }

    /// Children in render order: folders before files, each group
    /// case-sensitive lexicographic by name. Computed per call so it
    /// always reflects the current child set.
    pub fn sorted_children(&self) -> Vec<&TreeNode> {
        let mut ordered: Vec<&TreeNode> = Vec::with_capacity(self.children.len());
        ordered.extend(self.children.values().filter(|c| c.is_folder()));
        ordered.extend(self.children.values().filter(|c| !c.is_folder()));
        ordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_children_folders_first() {
        let mut root = FolderNode::new("", "");
        root.children.insert(
            "b.js".to_string(),
            TreeNode::File {
                name: "b.js".to_string(),
                path: "b.js".to_string(),
            },
        );
        root.children.insert(
            "a.js".to_string(),
            TreeNode::File {
                name: "a.js".to_string(),
                path: "a.js".to_string(),
            },
        );
        root.children
            .insert("B".to_string(), TreeNode::Folder(FolderNode::new("B", "B")));
        root.children
            .insert("A".to_string(), TreeNode::Folder(FolderNode::new("A", "A")));

        let names: Vec<&str> = root.sorted_children().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["A", "B", "a.js", "b.js"]);
    }

    #[test]
    fn test_case_sensitive_order_within_group() {
        let mut root = FolderNode::new("", "");
        for name in ["readme.md", "README.md", "Zed.txt"] {
            root.children.insert(
                name.to_string(),
                TreeNode::File {
                    name: name.to_string(),
                    path: name.to_string(),
                },
            );
        }
        let names: Vec<&str> = root.sorted_children().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["README.md", "Zed.txt", "readme.md"]);
    }
}
