//! Tree-building options and configuration.

/// Options for building a document tree.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Error handling mode
    pub error_mode: ErrorMode,

    /// How a list item following a same-level paragraph is attached
    pub list_container: ListContainer,
}

impl BuildOptions {
    /// Create new build options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (replace malformed cells with empty ones).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Set the list container policy.
    pub fn with_list_container(mut self, policy: ListContainer) -> Self {
        self.list_container = policy;
        self
    }
}

/// Error handling mode during tree building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on malformed table cells
    #[default]
    Strict,
    /// Log malformed table cells and continue with an empty cell
    Lenient,
}

/// Attachment policy for a list item whose predecessor is a paragraph at
/// the same level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListContainer {
    /// The paragraph introduces the list and becomes its parent
    #[default]
    ParagraphAdopts,
    /// The list item stays a sibling of the paragraph
    Sibling,
}
