use serde::{Deserialize, Serialize};

/// How the renderer walks down the hierarchy.
///
/// Both drivers emit byte-identical output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Traversal {
    /// Explicit work stack; call-stack usage does not grow with nesting depth
    #[default]
    Iterative,
    /// One call per directory level
    Recursive,
}

/// Options for a single render invocation.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Render files (with size suffix) in addition to directories
    pub print_files: bool,

    /// Traversal driver
    pub traversal: Traversal,
}

impl RenderOptions {
    /// Create a new RenderOptions with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether files are rendered
    pub fn with_files(mut self, print_files: bool) -> Self {
        self.print_files = print_files;
        self
    }

    /// Set the traversal driver
    pub fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }
}
