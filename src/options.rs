pub const DEFAULT_MAX_DEPTH: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum number of nested arrays/objects.
    pub max_depth: usize,
    /// Fail when non-whitespace follows the top-level value instead of ignoring it.
    pub reject_trailing: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            reject_trailing: false,
        }
    }
}

impl ParserOptions {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
    pub fn reject_trailing(mut self, reject: bool) -> Self {
        self.reject_trailing = reject;
        self
    }
}
