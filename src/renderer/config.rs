//! Configuration for HTML rendering

/// Default limit on markup tree depth
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Configuration options for HTML output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Escape untrusted text and attribute values
    pub escape: bool,

    /// Maximum nesting depth before rendering fails; `None` disables the guard
    /// and [`with_max_depth`](Self::with_max_depth) maps `0` to `None`
    pub max_depth: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            escape: true,
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether untrusted values are escaped
    pub fn with_escape(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }

    /// Set the maximum tree depth; `0` removes the limit
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = (depth > 0).then_some(depth);
        self
    }

    /// Remove the depth limit
    pub fn without_max_depth(mut self) -> Self {
        self.max_depth = None;
        self
    }
}
