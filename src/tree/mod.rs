//! Directory tree rendering
//!
//! Lists each directory, drops files unless requested, orders siblings
//! byte-wise and writes one box-drawing line per entry.

mod entry;
mod line;
mod lister;
mod options;
mod renderer;

pub use entry::Entry;
pub use line::{branch_glyph, child_indent, format_line, size_suffix};
pub use lister::{DirectoryLister, FsLister};
pub use options::{RenderOptions, Traversal};
pub use renderer::{
    dir_tree, filter_entries, render_tree, render_tree_with, sort_entries, RenderStats,
};
