/// Alphabet size: every byte value is a symbol.
pub const SYMBOL_COUNT: usize = 256;

/// Merges needed to join 256 leaves under one root.
pub const MERGE_STEPS: usize = SYMBOL_COUNT - 1;

/// Pairing-order header: two symbol ids per merge step, no prefix, no checksum.
pub const HEADER_LEN: usize = 2 * MERGE_STEPS;

/// Upper bound on the depth of any leaf in a 256-leaf tree.
pub const MAX_CODE_LEN: usize = MERGE_STEPS;

/// Defaults when Option<T> is None
pub const DEFAULT_BUFFER_SIZE: usize = 1024;
/// Read buffer sanity bound (1 MiB).
pub const MAX_BUFFER_SIZE: usize = 1024 * 1024;

/// File extensions used by the outer surface.
pub mod extensions {
    pub const COMPRESSED: &str = "huf";
    pub const TREE: &str = "htree";
}
