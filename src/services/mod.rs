//! Services layer - pure business operations.
//!
//! This module contains logic with no mutable state:
//! - Tree construction and flattening for the file browser
//! - Extension-keyed language and icon lookup

pub mod language;
pub mod tree_builder;
