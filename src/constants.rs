/// Depth used when no explicit limit is configured.
pub const DEFAULT_MAX_DEPTH: usize = 3;
/// Indentation used per level when printing a tree.
pub const TREE_INDENT: &str = "      ";
