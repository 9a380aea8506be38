//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - FileRecord, the loader-supplied source file
//! - TreeNode and FolderNode, the derived file-browser tree
//! - Message types for the command dispatch
//! - UserSettings, the opaque per-user record

pub mod file;
pub mod messages;
pub mod settings;
pub mod tree;

pub use file::FileRecord;
pub use messages::Message;
pub use settings::UserSettings;
pub use tree::{FolderNode, TreeNode};
