//! dirtree - Render a directory hierarchy as a box-drawing tree
//!
//! This crate provides:
//! - Depth-first rendering of directories (and optionally files with their sizes)
//! - A filesystem lister and a trait for plugging in other listing sources
//! - The `dirtree` command-line front end

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod tree;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, TreeError};
pub use tree::{dir_tree, render_tree, RenderOptions, Traversal};
