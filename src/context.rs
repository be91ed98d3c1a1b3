//! Parsing context shared by the block and inline scanners.
//!
//! Grounded on `struct render` in `ext/markdown.c`, which bundles the
//! renderer, the collected reference table, the active-character
//! table and the scratch-buffer stack together for the duration of a
//! single `markdown()` call. This port splits the combined scratch
//! stack into `block_pool`/`span_pool` per spec.md's data model (see
//! `pool.rs`), and keeps the active-character table as a plain
//! `[bool; 256]` gate rather than a function-pointer table, since the
//! actual dispatch is done with a `match` in `inline.rs`.

use crate::extensions::Extension;
use crate::pool::Pool;
use crate::reference::ReferenceTable;

/// Bytes that can possibly start an inline trigger, used to let
/// `parse_inline`'s scan loop skip everything else at memcpy speed.
///
/// Grounded on the `active_char[256]` table built in `markdown()` in
/// `ext/markdown.c`.
pub fn build_active_char_table(extensions: Extension) -> [bool; 256] {
    let mut active = [false; 256];

    for &c in &[b'*', b'_', b'`', b'[', b'!', b'<', b'\\', b'&', b'\n'] {
        active[c as usize] = true;
    }

    if extensions.contains(Extension::STRIKETHROUGH) {
        active[b'~' as usize] = true;
    }

    if extensions.contains(Extension::SUPERSCRIPT) {
        active[b'^' as usize] = true;
    }

    if extensions.contains(Extension::AUTOLINK) {
        active[b':' as usize] = true;
        active[b'w' as usize] = true;
        active[b'@' as usize] = true;
    }

    active
}

/// State threaded through a single `Document::render`/`render_inline`
/// call: the collected reference table, the two scratch pools, the
/// active-character gate and the nesting budget.
pub struct Context {
    pub extensions: Extension,
    pub max_nesting: usize,
    pub refs: ReferenceTable,
    pub block_pool: Pool,
    pub span_pool: Pool,
    pub active_char: [bool; 256],
}

impl Context {
    pub fn new(extensions: Extension, max_nesting: usize) -> Context {
        Context {
            extensions,
            max_nesting,
            refs: ReferenceTable::new(),
            block_pool: Pool::new(),
            span_pool: Pool::new(),
            active_char: build_active_char_table(extensions),
        }
    }

    /// Combined nesting counter: `block_pool.in_use + span_pool.in_use`,
    /// per spec.md's data model.
    pub fn nesting(&self) -> usize {
        self.block_pool.in_use() + self.span_pool.in_use()
    }

    pub fn over_budget(&self) -> bool {
        self.nesting() >= self.max_nesting
    }
}
