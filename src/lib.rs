//! Workspace state core - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (FileRecord, TreeNode, Messages)
//! - `controllers/` - Orchestration (Workspace)
//! - `services/` - Business operations (tree building, language lookup)
//! - `infrastructure/` - External boundaries (editor surface, render sinks, errors)

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-exports for convenient external access
pub use controllers::workspace::Workspace;
pub use domain::{FileRecord, FolderNode, Message, TreeNode, UserSettings};
pub use infrastructure::error::{Result, TreeError, WorkspaceError};
pub use infrastructure::surface::{EditorSurface, Tab, WorkspaceView};
pub use services::language::Language;
pub use services::tree_builder::{TreeRow, build_tree, flatten};
