use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Result, TreeError};

use super::entry::Entry;
use super::line::{child_indent, format_line};
use super::lister::{DirectoryLister, FsLister};
use super::options::{RenderOptions, Traversal};

/// Counts of what a render emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Directory lines written
    pub directories: usize,
    /// File lines written
    pub files: usize,
    /// Deepest level that produced a line (0 = children of the root)
    pub max_depth: usize,
}

/// Render the tree below `root` from the local filesystem into `writer`.
///
/// The root itself produces no line. Any listing or write failure aborts the
/// render; lines already written stay written.
pub fn render_tree<W>(writer: &mut W, root: &Path, options: &RenderOptions) -> Result<RenderStats>
where
    W: Write + ?Sized,
{
    render_tree_with(writer, root, options, &FsLister::new())
}

/// Render the tree below `root` using `lister` as the source of listings.
pub fn render_tree_with<W, L>(
    writer: &mut W,
    root: &Path,
    options: &RenderOptions,
    lister: &L,
) -> Result<RenderStats>
where
    W: Write + ?Sized,
    L: DirectoryLister + ?Sized,
{
    tracing::debug!(
        root = %root.display(),
        print_files = options.print_files,
        traversal = ?options.traversal,
        "Rendering tree"
    );

    let mut renderer = Renderer {
        writer,
        lister,
        print_files: options.print_files,
        stats: RenderStats::default(),
    };

    match options.traversal {
        Traversal::Recursive => renderer.render_recursive(root, "", 0)?,
        Traversal::Iterative => renderer.render_iterative(root)?,
    }

    Ok(renderer.stats)
}

/// Render directories (and files when `print_files` is set) below `root`.
pub fn dir_tree<W>(writer: &mut W, root: &Path, print_files: bool) -> Result<()>
where
    W: Write + ?Sized,
{
    let options = RenderOptions::new().with_files(print_files);
    render_tree(writer, root, &options).map(|_| ())
}

/// Drop non-directories unless files are rendered.
pub fn filter_entries(entries: Vec<Entry>, print_files: bool) -> Vec<Entry> {
    if print_files {
        return entries;
    }
    entries.into_iter().filter(|e| e.is_dir).collect()
}

/// Order siblings by the raw bytes of their names (uppercase before lowercase).
pub fn sort_entries(mut entries: Vec<Entry>) -> Vec<Entry> {
    entries.sort_by(|a, b| {
        a.name
            .as_encoded_bytes()
            .cmp(b.name.as_encoded_bytes())
    });
    entries
}

/// A directory whose children are being emitted by the iterative driver.
struct Frame {
    path: PathBuf,
    entries: Vec<Entry>,
    next: usize,
    indent: String,
    depth: usize,
}

struct Renderer<'a, W: ?Sized, L: ?Sized> {
    writer: &'a mut W,
    lister: &'a L,
    print_files: bool,
    stats: RenderStats,
}

impl<W, L> Renderer<'_, W, L>
where
    W: Write + ?Sized,
    L: DirectoryLister + ?Sized,
{
    fn read_children(&self, path: &Path, depth: usize) -> Result<Vec<Entry>> {
        let listed = self.lister.list(path)?;
        let children = sort_entries(filter_entries(listed, self.print_files));

        tracing::debug!(
            path = %path.display(),
            depth,
            children = children.len(),
            "Visiting directory"
        );
        Ok(children)
    }

    fn emit(&mut self, indent: &str, entry: &Entry, is_last: bool, depth: usize) -> Result<()> {
        let line = format_line(indent, entry, is_last);
        self.writer
            .write_all(line.as_bytes())
            .map_err(TreeError::SinkWrite)?;

        tracing::trace!(name = ?entry.name, depth, is_last, "Emitted entry");

        if entry.is_dir {
            self.stats.directories += 1;
        } else {
            self.stats.files += 1;
        }
        self.stats.max_depth = self.stats.max_depth.max(depth);
        Ok(())
    }

    fn render_recursive(&mut self, path: &Path, indent: &str, depth: usize) -> Result<()> {
        let children = self.read_children(path, depth)?;
        let total = children.len();

        for (i, entry) in children.iter().enumerate() {
            let is_last = i + 1 == total;
            self.emit(indent, entry, is_last, depth)?;

            if entry.is_dir {
                let indent = child_indent(indent, is_last);
                self.render_recursive(&path.join(&entry.name), &indent, depth + 1)?;
            }
        }

        Ok(())
    }

    fn render_iterative(&mut self, root: &Path) -> Result<()> {
        let mut stack = vec![self.open_frame(root.to_path_buf(), String::new(), 0)?];

        while let Some(frame) = stack.last_mut() {
            if frame.next >= frame.entries.len() {
                stack.pop();
                continue;
            }

            let idx = frame.next;
            frame.next += 1;
            let is_last = idx + 1 == frame.entries.len();
            let depth = frame.depth;
            let entry = &frame.entries[idx];

            let descend = entry.is_dir.then(|| {
                let path = frame.path.join(&entry.name);
                (path, child_indent(&frame.indent, is_last))
            });

            self.emit(&frame.indent, entry, is_last, depth)?;

            if let Some((path, indent)) = descend {
                let child = self.open_frame(path, indent, depth + 1)?;
                stack.push(child);
            }
        }

        Ok(())
    }

    fn open_frame(&self, path: PathBuf, indent: String, depth: usize) -> Result<Frame> {
        let entries = self.read_children(&path, depth)?;
        Ok(Frame {
            path,
            entries,
            next: 0,
            indent,
            depth,
        })
    }
}
